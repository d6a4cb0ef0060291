use crate::export;
use crate::history::HistoryStack;
use crate::model::{CanvasSettings, Point, StyleSnapshot};
use crate::surface::Surface;
use crate::tracker::GestureTracker;
use anyhow::Result;

/// The outward command surface: owns the raster, the gesture tracker and
/// the history stack, and wires the host's pointer/command events through
/// them. Hosts push normalized surface-local points; the engine samples
/// the current style once per move and hands it to the tracker
/// explicitly.
#[derive(Debug)]
pub struct SilkEngine {
    surface: Surface,
    tracker: GestureTracker,
    history: HistoryStack,
    style: StyleSnapshot,
    drawing: bool,
}

impl SilkEngine {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            surface: Surface::new(settings),
            tracker: GestureTracker::default(),
            history: HistoryStack::default(),
            style: StyleSnapshot::default(),
            drawing: false,
        }
    }

    pub fn set_style(&mut self, style: StyleSnapshot) {
        self.style = style;
    }

    pub fn style(&self) -> StyleSnapshot {
        self.style
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn history(&self) -> &HistoryStack {
        &self.history
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    pub fn pointer_down(&mut self) {
        self.drawing = true;
        self.tracker.begin();
    }

    /// One pointer sample. Ignored while no gesture is active.
    pub fn pointer_move(&mut self, point: Point) {
        if !self.drawing {
            return;
        }
        let style = self.style;
        self.tracker.sample(&mut self.surface, point, style);
    }

    /// Ends the active gesture and records it; a gesture with no samples
    /// leaves the history untouched. Pointer-leave maps here too.
    pub fn pointer_up(&mut self) {
        if !self.drawing {
            return;
        }
        self.drawing = false;
        if let Some(gesture) = self.tracker.finish() {
            self.history.record(gesture, &self.surface);
        }
    }

    /// Steps history back one entry. Returns whether anything changed;
    /// at the initial state this is a no-op.
    pub fn undo(&mut self) -> bool {
        match self.history.undo(&mut self.surface) {
            Ok(applied) => applied,
            Err(err) => {
                tracing::error!(?err, "undo restore failed, surface left as-is");
                false
            }
        }
    }

    pub fn redo(&mut self) -> bool {
        match self.history.redo(&mut self.surface) {
            Ok(applied) => applied,
            Err(err) => {
                tracing::error!(?err, "redo restore failed, surface left as-is");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.history.clear(&mut self.surface);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Current surface content encoded as a PNG blob. Pull-only; engine
    /// state is unchanged.
    pub fn export_png(&self) -> Result<Vec<u8>> {
        export::encode_png(&self.surface)
    }
}

impl Default for SilkEngine {
    fn default() -> Self {
        Self::new(CanvasSettings::default())
    }
}
