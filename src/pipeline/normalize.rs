use std::borrow::Cow;

use crate::{
    foundation::{
        core::PixelSurface,
        error::{PixelateError, PixelateResult},
    },
    pipeline::config::Interpolation,
};

/// Working dimensions for a `width`×`height` source.
///
/// Sources already at least `min_resolution` on both axes pass through. Otherwise the long side
/// of the aspect ratio is pinned to `min_resolution` and the other axis follows the ratio,
/// rounded half away from zero and never below 1.
pub fn normalized_dimensions(width: u32, height: u32, min_resolution: u32) -> (u32, u32) {
    if width >= min_resolution && height >= min_resolution {
        return (width, height);
    }

    let min = f64::from(min_resolution);
    let ar = f64::from(width) / f64::from(height);
    if ar >= 1.0 {
        (min_resolution, round_dim(min / ar))
    } else {
        (round_dim(min * ar), min_resolution)
    }
}

fn round_dim(v: f64) -> u32 {
    (v.round() as u32).max(1)
}

/// Produce the working surface for `src`.
///
/// Borrows `src` when no resize is needed.
#[tracing::instrument(skip(src), fields(src_w = src.width(), src_h = src.height()))]
pub fn normalize(
    src: &PixelSurface,
    min_resolution: u32,
    interpolation: Interpolation,
) -> PixelateResult<Cow<'_, PixelSurface>> {
    let (w, h) = normalized_dimensions(src.width(), src.height(), min_resolution);
    if (w, h) == src.dimensions() {
        return Ok(Cow::Borrowed(src));
    }

    tracing::debug!(w, h, "resizing source to working resolution");
    let img = src.to_image()?;
    let resized = image::imageops::resize(&img, w, h, interpolation.filter());
    if resized.dimensions() != (w, h) {
        return Err(PixelateError::surface(format!(
            "resize produced {:?}, expected {w}x{h}",
            resized.dimensions()
        )));
    }
    Ok(Cow::Owned(PixelSurface::from_image(resized)?))
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/normalize.rs"]
mod tests;
