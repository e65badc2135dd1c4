use base64::Engine as _;

use crate::foundation::{
    core::PixelSurface,
    error::{PixelateError, PixelateResult},
};

/// Decode encoded image bytes (any format the `image` crate reads) into straight RGBA8.
pub fn decode_image(bytes: &[u8]) -> PixelateResult<PixelSurface> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| PixelateError::load(format!("decode image from memory: {e}")))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(PixelateError::load(format!(
            "decoded image is empty ({width}x{height})"
        )));
    }
    PixelSurface::from_image(rgba)
}

/// Payload bytes of a `data:` URL. Only base64 payloads are accepted.
pub fn decode_data_url(url: &str) -> PixelateResult<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| PixelateError::load("not a data URL"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PixelateError::load("data URL has no payload separator"))?;
    if !header.ends_with(";base64") {
        return Err(PixelateError::load(format!(
            "data URL '{header}' is not base64-encoded"
        )));
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact)
        .map_err(|e| PixelateError::load(format!("data URL payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
