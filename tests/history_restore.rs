use silkweave::{BrushPreset, CanvasSettings, Color, Point, SilkEngine, StyleSnapshot};

fn engine_48() -> SilkEngine {
    SilkEngine::new(CanvasSettings {
        width: 48,
        height: 48,
        background: Color::BLACK,
    })
}

fn stroke(engine: &mut SilkEngine, from: (f32, f32), to: (f32, f32)) {
    engine.pointer_down();
    engine.pointer_move(Point::new(from.0, from.1));
    engine.pointer_move(Point::new(to.0, to.1));
    engine.pointer_up();
}

fn styled(engine: &mut SilkEngine, color: Color) {
    engine.set_style(StyleSnapshot {
        color,
        brush: BrushPreset::Glow,
        line_width_base: 2.0,
        symmetry: 6,
    });
}

#[test]
fn undo_then_redo_is_pixel_identical() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(90, 200, 250));
    stroke(&mut engine, (30.0, 24.0), (36.0, 20.0));
    styled(&mut engine, Color::rgb(250, 120, 40));
    stroke(&mut engine, (28.0, 30.0), (22.0, 36.0));

    let before: Vec<u8> = engine.surface().pixels().to_vec();
    assert!(engine.undo());
    assert_ne!(engine.surface().pixels(), &before[..]);
    assert!(engine.redo());
    assert_eq!(engine.surface().pixels(), &before[..]);
}

#[test]
fn three_gestures_unwind_to_a_cleared_canvas() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(180, 90, 255));
    stroke(&mut engine, (30.0, 24.0), (34.0, 22.0));
    stroke(&mut engine, (26.0, 30.0), (22.0, 34.0));
    stroke(&mut engine, (34.0, 30.0), (38.0, 34.0));
    assert_eq!(engine.history().cursor_step(), 2);

    assert!(engine.undo());
    assert!(engine.undo());
    assert_eq!(engine.history().cursor_step(), 0);

    assert!(engine.undo());
    assert_eq!(engine.history().cursor_step(), -1);
    assert_eq!(engine.surface().pixels(), engine_48().surface().pixels());

    assert!(!engine.undo());
    assert_eq!(engine.history().cursor_step(), -1);
}

#[test]
fn drawing_after_undo_truncates_the_redo_branch() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(255, 255, 0));
    stroke(&mut engine, (30.0, 24.0), (34.0, 22.0)); // A
    stroke(&mut engine, (26.0, 30.0), (22.0, 34.0)); // B
    stroke(&mut engine, (34.0, 30.0), (38.0, 34.0)); // C
    let first = engine.history().entry(0).unwrap().gesture().clone();

    assert!(engine.undo());
    assert!(engine.undo());
    stroke(&mut engine, (24.0, 20.0), (20.0, 16.0)); // D

    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.history().cursor_step(), 1);
    assert!(!engine.can_redo());
    assert_eq!(engine.history().entry(0).unwrap().gesture(), &first);
}

#[test]
fn redo_restores_each_recorded_state_in_order() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(60, 220, 120));

    let mut states = Vec::new();
    for i in 0..3 {
        let offset = i as f32 * 4.0;
        stroke(&mut engine, (28.0 + offset, 24.0), (32.0 + offset, 20.0));
        states.push(engine.surface().pixels().to_vec());
    }

    while engine.undo() {}
    for expected in &states {
        assert!(engine.redo());
        assert_eq!(engine.surface().pixels(), &expected[..]);
    }
    assert!(!engine.redo());
}

#[test]
fn clear_empties_history_and_raster() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(255, 0, 0));
    stroke(&mut engine, (30.0, 24.0), (36.0, 20.0));
    stroke(&mut engine, (26.0, 30.0), (22.0, 36.0));

    engine.clear();
    assert_eq!(engine.history().cursor_step(), -1);
    assert!(engine.history().is_empty());
    assert_eq!(engine.surface().pixels(), engine_48().surface().pixels());
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}

#[test]
fn empty_gesture_on_pointer_up_records_nothing() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(10, 10, 250));
    stroke(&mut engine, (30.0, 24.0), (36.0, 20.0));

    engine.pointer_down();
    engine.pointer_up();

    assert_eq!(engine.history().len(), 1);
    assert_eq!(engine.history().cursor_step(), 0);
}

#[test]
fn undo_survives_a_full_session_of_mixed_commands() {
    let mut engine = engine_48();
    styled(&mut engine, Color::rgb(200, 200, 200));

    stroke(&mut engine, (30.0, 24.0), (34.0, 22.0));
    stroke(&mut engine, (26.0, 30.0), (22.0, 34.0));
    assert!(engine.undo());
    stroke(&mut engine, (34.0, 30.0), (38.0, 34.0));
    assert!(engine.undo());
    assert!(engine.redo());

    let before: Vec<u8> = engine.surface().pixels().to_vec();
    assert!(engine.undo());
    assert!(engine.redo());
    assert_eq!(engine.surface().pixels(), &before[..]);
}
