pub mod engine;
pub mod export;
pub mod geometry;
pub mod history;
pub mod logging;
pub mod model;
pub mod render;
pub mod surface;
pub mod tracker;

pub use engine::SilkEngine;
pub use history::{HistoryEntry, HistoryStack};
pub use model::{
    BrushPreset, CanvasSettings, Color, Gesture, Point, Segment, StrokePoint, StyleSnapshot,
};
pub use surface::{BlendMode, Snapshot, Surface};
pub use tracker::{width_modulator, GestureTracker};
