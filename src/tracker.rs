use crate::geometry::rotate_copies;
use crate::model::{Gesture, Point, Segment, StrokePoint, StyleSnapshot};
use crate::render::render_segment;
use crate::surface::Surface;

/// Speed-derived width modulator: faster motion between samples widens
/// the stroke, clamped so width stays sane at either extreme.
pub fn width_modulator(sample_distance: f32) -> f32 {
    (sample_distance / 10.0).clamp(0.5, 2.0)
}

/// Converts a continuous pointer gesture into rendered segments and an
/// ordered record of `(point, style)` samples. Style is passed in per
/// call; the tracker holds no ambient style state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureTracker {
    points: Vec<StrokePoint>,
    last_point: Option<Point>,
}

impl GestureTracker {
    pub fn begin(&mut self) {
        self.points.clear();
        self.last_point = None;
    }

    /// Renders the segment from the previous sample to `point` under the
    /// style's symmetry and appends the sample to the in-progress
    /// gesture. The first sample of a gesture has no prior point and
    /// renders as a dot with a neutral modulator.
    pub fn sample(&mut self, surface: &mut Surface, point: Point, style: StyleSnapshot) {
        let modulator = match self.last_point {
            Some(last) => width_modulator(last.distance(point)),
            None => 1.0,
        };
        let segment = Segment::new(self.last_point.unwrap_or(point), point);

        for copy in rotate_copies(surface.center(), segment, style.symmetry) {
            render_segment(surface, copy, &style, modulator);
        }

        self.points.push(StrokePoint { point, style });
        self.last_point = Some(point);
    }

    /// Finalizes the in-progress gesture. Returns `None` when nothing was
    /// sampled; tracking state resets either way.
    pub fn finish(&mut self) -> Option<Gesture> {
        self.last_point = None;
        let points = std::mem::take(&mut self.points);
        if points.is_empty() {
            None
        } else {
            Some(Gesture { points })
        }
    }

    pub fn sample_count(&self) -> usize {
        self.points.len()
    }
}
