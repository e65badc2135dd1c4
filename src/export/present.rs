use crate::foundation::{
    core::{PixelSurface, Rgba8},
    error::PixelateResult,
};

/// Scale `surface` to fit inside a `display_w`×`display_h` surface, keeping its aspect ratio,
/// centered over `background`.
///
/// Scaling is nearest-neighbour so blocks keep hard edges at any display size.
pub fn fit_contain(
    surface: &PixelSurface,
    display_w: u32,
    display_h: u32,
    background: Rgba8,
) -> PixelateResult<PixelSurface> {
    let mut canvas = PixelSurface::filled(display_w, display_h, background)?.into_image()?;

    let (w, h) = (f64::from(surface.width()), f64::from(surface.height()));
    let scale = (f64::from(display_w) / w).min(f64::from(display_h) / h);
    let scaled_w = ((w * scale).round() as u32).clamp(1, display_w);
    let scaled_h = ((h * scale).round() as u32).clamp(1, display_h);
    let offset_x = (display_w - scaled_w) / 2;
    let offset_y = (display_h - scaled_h) / 2;

    let scaled = image::imageops::resize(
        &surface.to_image()?,
        scaled_w,
        scaled_h,
        image::imageops::FilterType::Nearest,
    );
    image::imageops::overlay(
        &mut canvas,
        &scaled,
        i64::from(offset_x),
        i64::from(offset_y),
    );
    PixelSurface::from_image(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/export/present.rs"]
mod tests;
