use std::{io::Cursor, path::Path};

use anyhow::Context as _;

use crate::foundation::{core::PixelSurface, error::PixelateResult};

/// Encode a surface as PNG bytes.
pub fn encode_png(surface: &PixelSurface) -> PixelateResult<Vec<u8>> {
    let img = surface.to_image()?;
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write a surface to `path` as PNG, creating parent directories.
pub fn save_png(surface: &PixelSurface, path: &Path) -> PixelateResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Suggested download name: `{artist}_{album}_pixel_art_block{block_size}.png`.
///
/// Every character outside `[A-Za-z0-9]` becomes `_` and the result is lowercased. Blank names
/// fall back to `artist` and `spotify`.
pub fn download_file_name(artist: &str, album: &str, block_size: u32) -> String {
    let artist = sanitize_or(artist, "artist");
    let album = sanitize_or(album, "spotify");
    format!("{artist}_{album}_pixel_art_block{block_size}.png")
}

fn sanitize_or(name: &str, fallback: &str) -> String {
    let name = if name.is_empty() { fallback } else { name };
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/export/png.rs"]
mod tests;
