use crate::model::{Point, Segment};
use std::f32::consts::TAU;

/// Produces the `symmetry` rotational copies of `segment` about `center`.
///
/// Copy `i` is the original segment rotated by `TAU * i / symmetry`. Each
/// copy is computed from the original endpoints and its own index, never
/// by rotating the previous copy, so error does not accumulate even for
/// symmetry counts in the hundreds.
pub fn rotate_copies(center: Point, segment: Segment, symmetry: u32) -> Vec<Segment> {
    let count = symmetry.max(1);
    let mut copies = Vec::with_capacity(count as usize);
    for index in 0..count {
        let angle = TAU * index as f32 / count as f32;
        copies.push(Segment {
            from: rotate_about(center, segment.from, angle),
            to: rotate_about(center, segment.to, angle),
        });
    }
    copies
}

fn rotate_about(center: Point, point: Point, angle: f32) -> Point {
    let (sin, cos) = angle.sin_cos();
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    Point {
        x: center.x + dx * cos - dy * sin,
        y: center.y + dx * sin + dy * cos,
    }
}
