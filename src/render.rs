use crate::model::{BrushPreset, Color, Point, Segment, StyleSnapshot};
use crate::surface::Surface;

/// How a pass fades from the stroke axis to its rim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassProfile {
    /// Full intensity across the body with a ~1px anti-aliased rim.
    Solid,
    /// Quadratic fade from the axis outward; used for halos.
    Halo,
}

/// One compositing pass of a brush preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePass {
    pub color: Color,
    pub width_scale: f32,
    pub intensity: f32,
    pub profile: PassProfile,
}

const SECONDARY_INTENSITY: f32 = 0x44 as f32 / 255.0;
const RIBBON_INTENSITY: f32 = 0x88 as f32 / 255.0;
const NEON_HALO_INTENSITY: f32 = 0.4;

/// The ordered pass list for a style. Pass order is fixed per preset;
/// the lighten blend is commutative per pixel, so the N rotated copies
/// stay order-independent.
pub fn stroke_passes(style: &StyleSnapshot) -> Vec<StrokePass> {
    match style.brush {
        BrushPreset::Glow => vec![
            StrokePass {
                color: style.color,
                width_scale: 1.0,
                intensity: 1.0,
                profile: PassProfile::Solid,
            },
            StrokePass {
                color: style.color,
                width_scale: 2.0,
                intensity: SECONDARY_INTENSITY,
                profile: PassProfile::Halo,
            },
        ],
        BrushPreset::Neon => vec![
            StrokePass {
                color: style.color,
                width_scale: 3.0,
                intensity: NEON_HALO_INTENSITY,
                profile: PassProfile::Halo,
            },
            StrokePass {
                color: Color::WHITE,
                width_scale: 1.0,
                intensity: 1.0,
                profile: PassProfile::Solid,
            },
            StrokePass {
                color: style.color,
                width_scale: 2.0,
                intensity: SECONDARY_INTENSITY,
                profile: PassProfile::Halo,
            },
        ],
        BrushPreset::Ribbon => vec![StrokePass {
            color: style.color,
            width_scale: 1.0,
            intensity: RIBBON_INTENSITY,
            profile: PassProfile::Solid,
        }],
    }
}

/// Composites one segment onto the surface with the given style. The
/// effective stroke width is `line_width_base * width_modulator`, scaled
/// per pass. Degenerate segments render as round dots.
pub fn render_segment(
    surface: &mut Surface,
    segment: Segment,
    style: &StyleSnapshot,
    width_modulator: f32,
) {
    let base_width = (style.line_width_base * width_modulator).max(0.5);
    for pass in stroke_passes(style) {
        draw_capsule_pass(surface, segment, base_width * pass.width_scale, pass);
    }
}

/// Rasterizes the capsule (segment dilated by half the pass width),
/// compositing each covered pixel exactly once per pass. Round caps fall
/// out of the capsule shape.
fn draw_capsule_pass(surface: &mut Surface, segment: Segment, width: f32, pass: StrokePass) {
    let radius = (width / 2.0).max(0.5);
    let pad = radius.ceil() as i32 + 1;

    let min_x = segment.from.x.min(segment.to.x).floor() as i32 - pad;
    let max_x = segment.from.x.max(segment.to.x).ceil() as i32 + pad;
    let min_y = segment.from.y.min(segment.to.y).floor() as i32 - pad;
    let max_y = segment.from.y.max(segment.to.y).ceil() as i32 + pad;

    let x0 = min_x.clamp(0, surface.width() as i32);
    let x1 = max_x.clamp(-1, surface.width() as i32 - 1);
    let y0 = min_y.clamp(0, surface.height() as i32);
    let y1 = max_y.clamp(-1, surface.height() as i32 - 1);

    for y in y0..=y1 {
        for x in x0..=x1 {
            let sample = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            let dist = point_segment_distance_sq(sample, segment).sqrt();
            let coverage = pass_coverage(dist, radius, pass.profile);
            if coverage > 0.0 {
                surface.composite_pixel(x, y, pass.color, pass.intensity * coverage);
            }
        }
    }
}

fn pass_coverage(dist: f32, radius: f32, profile: PassProfile) -> f32 {
    match profile {
        PassProfile::Solid => (radius + 0.5 - dist).clamp(0.0, 1.0),
        PassProfile::Halo => {
            if dist >= radius {
                0.0
            } else {
                let t = dist / radius;
                1.0 - t * t
            }
        }
    }
}

fn point_segment_distance_sq(point: Point, segment: Segment) -> f32 {
    let vx = segment.to.x - segment.from.x;
    let vy = segment.to.y - segment.from.y;
    let wx = point.x - segment.from.x;
    let wy = point.y - segment.from.y;
    let len_sq = vx * vx + vy * vy;
    if len_sq <= f32::EPSILON {
        return wx * wx + wy * wy;
    }
    let t = ((wx * vx + wy * vy) / len_sq).clamp(0.0, 1.0);
    let dx = wx - vx * t;
    let dy = wy - vy * t;
    dx * dx + dy * dy
}
