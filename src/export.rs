use crate::surface::Surface;
use anyhow::{Context, Result};
use chrono::Local;
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder};
use std::fs;
use std::path::{Path, PathBuf};

/// Encodes the current surface pixels as a PNG blob.
pub fn encode_png(surface: &Surface) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            surface.pixels(),
            surface.width(),
            surface.height(),
            ColorType::Rgba8,
        )
        .context("encode surface pixels as png")?;
    Ok(bytes)
}

pub fn timestamped_stem(now: chrono::DateTime<Local>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

pub fn build_filename(stem: &str) -> String {
    format!("silk_{}.png", stem)
}

/// Writes the current artwork to `output_dir` under a timestamped name
/// and returns the written path.
pub fn save_artwork(
    surface: &Surface,
    output_dir: &Path,
    now: chrono::DateTime<Local>,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)
        .with_context(|| format!("create artwork output folder {}", output_dir.display()))?;
    let path = output_dir.join(build_filename(&timestamped_stem(now)));
    let bytes = encode_png(surface)?;
    fs::write(&path, bytes).with_context(|| format!("write artwork {}", path.display()))?;
    Ok(path)
}
