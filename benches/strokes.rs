use criterion::{criterion_group, criterion_main, Criterion};
use silkweave::{BrushPreset, CanvasSettings, Color, Point, SilkEngine, StyleSnapshot};

fn bench_presets(c: &mut Criterion) {
    for brush in [BrushPreset::Glow, BrushPreset::Neon, BrushPreset::Ribbon] {
        let name = format!("stroke_{:?}_sym8", brush).to_lowercase();
        c.bench_function(&name, |b| {
            b.iter(|| {
                let mut engine = SilkEngine::new(CanvasSettings::default());
                engine.set_style(StyleSnapshot {
                    color: Color::rgb(90, 160, 240),
                    brush,
                    line_width_base: 3.0,
                    symmetry: 8,
                });
                engine.pointer_down();
                for i in 0..32 {
                    let t = i as f32 / 31.0;
                    engine.pointer_move(Point::new(420.0 + 120.0 * t, 300.0 - 80.0 * t));
                }
                engine.pointer_up();
                engine
            })
        });
    }
}

fn bench_undo_redo(c: &mut Criterion) {
    c.bench_function("undo_redo_cycle", |b| {
        let mut engine = SilkEngine::new(CanvasSettings::default());
        engine.set_style(StyleSnapshot {
            symmetry: 12,
            ..StyleSnapshot::default()
        });
        for i in 0..4 {
            engine.pointer_down();
            engine.pointer_move(Point::new(430.0 + i as f32 * 10.0, 310.0));
            engine.pointer_move(Point::new(460.0 + i as f32 * 10.0, 330.0));
            engine.pointer_up();
        }
        b.iter(|| {
            engine.undo();
            engine.redo();
        })
    });
}

criterion_group!(benches, bench_presets, bench_undo_redo);
criterion_main!(benches);
