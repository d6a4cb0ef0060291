use anyhow::{anyhow, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#rrggbb` color value as supplied by a color picker.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(anyhow!("malformed hex color: {hex:?}"));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| anyhow!("malformed hex color: {hex:?}"))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushPreset {
    #[default]
    Glow,
    Neon,
    Ribbon,
}

/// Style configuration in effect when a point is sampled. Each recorded
/// point carries its own copy so history entries stay self-contained even
/// if the host changes style mid-gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleSnapshot {
    pub color: Color,
    pub brush: BrushPreset,
    pub line_width_base: f32,
    pub symmetry: u32,
}

impl Default for StyleSnapshot {
    fn default() -> Self {
        Self {
            color: Color::rgb(0x4a, 0x90, 0xe2),
            brush: BrushPreset::Glow,
            line_width_base: 2.0,
            symmetry: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One drawable unit between two consecutive samples. `from == to` is a
/// valid dot, drawn when a gesture has no prior point yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub const fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub const fn dot(at: Point) -> Self {
        Self { from: at, to: at }
    }

    pub fn is_dot(&self) -> bool {
        self.from == self.to
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokePoint {
    pub point: Point,
    pub style: StyleSnapshot,
}

/// Ordered samples of one pointer-down-to-pointer-up gesture.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Gesture {
    pub points: Vec<StrokePoint>,
}

impl Gesture {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::BLACK,
        }
    }
}
