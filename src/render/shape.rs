use crate::{
    foundation::core::{Circle, Point, Rect, Rgba8},
    pipeline::{
        config::{PixelShape, PixelationConfig},
        sample::BlockSample,
    },
};

/// Stroke color for block borders: black at 20% opacity.
pub const BORDER_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 51);

/// Border stroke width for a block size: `max(1, block_size * 0.05)`.
pub fn border_line_width(block_size: u32) -> f64 {
    (f64::from(block_size) * 0.05).max(1.0)
}

/// Everything a backend needs to paint blocks, derived once per run from the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub shape: PixelShape,
    pub block_size: u32,
    /// Stroke width when borders are drawn.
    pub border_width: Option<f64>,
}

impl ShapeStyle {
    pub fn from_config(cfg: &PixelationConfig) -> Self {
        let border_width =
            (cfg.draw_borders && cfg.block_size > 2).then(|| border_line_width(cfg.block_size));
        Self {
            shape: cfg.pixel_shape,
            block_size: cfg.block_size,
            border_width,
        }
    }
}

/// Filled area of a square block: exactly its sampled footprint.
pub fn square_rect(block: &BlockSample) -> Rect {
    Rect::new(
        f64::from(block.x),
        f64::from(block.y),
        f64::from(block.x + block.sample_width),
        f64::from(block.y + block.sample_height),
    )
}

/// Disc of a circle block.
///
/// Center and radius come from the configured `block_size`, not the sampled footprint, so a
/// trailing partial block paints a full-size disc that can reach past its footprint and off the
/// canvas.
pub fn block_circle(block: &BlockSample, block_size: u32) -> Circle {
    let r = f64::from(block_size) / 2.0;
    Circle::new(Point::new(f64::from(block.x) + r, f64::from(block.y) + r), r)
}

/// Centerline of a square border: the block rect inset by half the line width.
pub fn square_border_path(block: &BlockSample, line_width: f64) -> Rect {
    square_rect(block).inset(-line_width / 2.0)
}

/// Centerline of a circle border: the disc outline inset by half the line width.
pub fn circle_border_path(block: &BlockSample, block_size: u32, line_width: f64) -> Circle {
    let disc = block_circle(block, block_size);
    Circle::new(disc.center, (disc.radius - line_width / 2.0).max(0.0))
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
