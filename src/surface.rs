use crate::model::{CanvasSettings, Color, Point};
use anyhow::{anyhow, Result};

/// RGBA8 pixel storage. The surface keeps every pixel opaque; alpha is a
/// storage detail so exported images carry a full channel set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaBuffer {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let mut pixels = vec![0u8; (width as usize) * (height as usize) * 4];
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[fill.r, fill.g, fill.b, 255]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let idx = ((y * self.width + x) * 4) as usize;
        Color {
            r: self.pixels[idx],
            g: self.pixels[idx + 1],
            b: self.pixels[idx + 2],
        }
    }

    fn fill(&mut self, color: Color) {
        for px in self.pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        }
    }
}

/// Compositing mode for pixel writes. Live strokes go through `Lighten`;
/// `Replace` exists only for snapshot restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    Lighten,
    Replace,
}

/// Full copy of raster content at one point in history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    buffer: RgbaBuffer,
}

impl Snapshot {
    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }
}

/// The one mutable raster surface. All mutation flows through the stroke
/// renderer or the clear/restore operations here.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    buffer: RgbaBuffer,
    background: Color,
    mode: BlendMode,
}

impl Surface {
    pub fn new(settings: CanvasSettings) -> Self {
        Self {
            buffer: RgbaBuffer::new(settings.width, settings.height, settings.background),
            background: settings.background,
            mode: BlendMode::Lighten,
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width
    }

    pub fn height(&self) -> u32 {
        self.buffer.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.buffer.width as f32 / 2.0,
            self.buffer.height as f32 / 2.0,
        )
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    pub fn pixels(&self) -> &[u8] {
        self.buffer.pixels()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.buffer.pixel(x, y)
    }

    /// Fills the raster with the background color and returns the
    /// compositing mode to `Lighten` for subsequent live strokes.
    pub fn reset_to_cleared(&mut self) {
        self.buffer.fill(self.background);
        self.mode = BlendMode::Lighten;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            buffer: self.buffer.clone(),
        }
    }

    /// Overwrites the raster with `snapshot` under a scoped `Replace`
    /// mode; the prior mode comes back on every exit path. A dimension
    /// mismatch leaves the pixels untouched.
    pub fn restore(&mut self, snapshot: &Snapshot) -> Result<()> {
        if snapshot.width() != self.width() || snapshot.height() != self.height() {
            return Err(anyhow!(
                "snapshot is {}x{}, surface is {}x{}",
                snapshot.width(),
                snapshot.height(),
                self.width(),
                self.height()
            ));
        }

        let mut scope = ReplaceScope::enter(self);
        scope.overwrite_from(snapshot);
        Ok(())
    }

    /// Composites one pixel according to the active blend mode.
    /// `intensity` scales the contribution in `[0, 1]`. Out-of-bounds
    /// coordinates are ignored.
    pub(crate) fn composite_pixel(&mut self, x: i32, y: i32, color: Color, intensity: f32) {
        if x < 0 || y < 0 || x >= self.buffer.width as i32 || y >= self.buffer.height as i32 {
            return;
        }
        let idx = ((y as u32 * self.buffer.width + x as u32) * 4) as usize;
        let px = &mut self.buffer.pixels[idx..idx + 4];
        match self.mode {
            BlendMode::Lighten => {
                px[0] = lighten_channel(px[0], color.r, intensity);
                px[1] = lighten_channel(px[1], color.g, intensity);
                px[2] = lighten_channel(px[2], color.b, intensity);
            }
            BlendMode::Replace => {
                px[0] = color.r;
                px[1] = color.g;
                px[2] = color.b;
            }
        }
        px[3] = 255;
    }
}

/// Screen blend with a source intensity factor: the destination only ever
/// gets brighter, and overlapping contributions saturate instead of
/// wrapping.
fn lighten_channel(dst: u8, src: u8, intensity: f32) -> u8 {
    let d = dst as f32 / 255.0;
    let s = (src as f32 / 255.0) * intensity.clamp(0.0, 1.0);
    let out = 1.0 - (1.0 - d) * (1.0 - s);
    (out * 255.0).round().clamp(0.0, 255.0) as u8
}

struct ReplaceScope<'a> {
    surface: &'a mut Surface,
    previous: BlendMode,
}

impl<'a> ReplaceScope<'a> {
    fn enter(surface: &'a mut Surface) -> Self {
        let previous = surface.mode;
        surface.mode = BlendMode::Replace;
        Self { surface, previous }
    }

    fn overwrite_from(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(self.surface.mode, BlendMode::Replace);
        self.surface
            .buffer
            .pixels
            .copy_from_slice(&snapshot.buffer.pixels);
    }
}

impl Drop for ReplaceScope<'_> {
    fn drop(&mut self) {
        self.surface.mode = self.previous;
    }
}
