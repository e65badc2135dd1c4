use kurbo::Shape as _;

use crate::{
    foundation::{
        core::{Circle, PixelSurface, Point, Rect, Rgba8},
        error::PixelateResult,
    },
    pipeline::{config::PixelShape, sample::BlockSample},
    render::{
        backend::RenderBackend,
        blend::over_in_place,
        shape::{
            BORDER_COLOR, ShapeStyle, block_circle, circle_border_path, square_border_path,
            square_rect,
        },
    },
};

/// Aliased rasterizer: a pixel is painted when its center lies inside the shape.
///
/// Image smoothing is off by construction, so every block edge lands on whole pixels and a
/// single fill reproduces the block color byte for byte.
#[derive(Debug, Default)]
pub struct CrispBackend;

impl CrispBackend {
    pub fn new() -> Self {
        Self
    }
}

impl RenderBackend for CrispBackend {
    #[tracing::instrument(skip(self, blocks, style), fields(blocks = blocks.len()))]
    fn render(
        &mut self,
        width: u32,
        height: u32,
        blocks: &[BlockSample],
        style: &ShapeStyle,
    ) -> PixelateResult<PixelSurface> {
        let mut out = PixelSurface::new(width, height)?;
        for block in blocks {
            paint_block(&mut out, block, style);
        }
        Ok(out)
    }
}

fn paint_block(out: &mut PixelSurface, block: &BlockSample, style: &ShapeStyle) {
    match style.shape {
        PixelShape::Square => {
            let rect = square_rect(block);
            fill_covered(out, rect, block.color, |p| rect.contains(p));
            if let Some(lw) = style.border_width {
                let center = square_border_path(block, lw);
                let outer = center.inset(lw / 2.0);
                let inner = center.inset(-lw / 2.0);
                fill_covered(out, outer, BORDER_COLOR, |p| {
                    outer.contains(p) && !inner.contains(p)
                });
            }
        }
        PixelShape::Circle => {
            let disc = block_circle(block, style.block_size);
            fill_covered(out, disc.bounding_box(), block.color, |p| disc.contains(p));
            if let Some(lw) = style.border_width {
                let center = circle_border_path(block, style.block_size, lw);
                let outer = Circle::new(center.center, center.radius + lw / 2.0);
                let inner = Circle::new(center.center, (center.radius - lw / 2.0).max(0.0));
                fill_covered(out, outer.bounding_box(), BORDER_COLOR, |p| {
                    outer.contains(p) && !inner.contains(p)
                });
            }
        }
    }
}

/// Composite `color` over every pixel in `bounds` whose center satisfies `covered`.
fn fill_covered(
    out: &mut PixelSurface,
    bounds: Rect,
    color: Rgba8,
    covered: impl Fn(Point) -> bool,
) {
    let Some((x0, y0, x1, y1)) = pixel_span(bounds, out.width(), out.height()) else {
        return;
    };
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if covered(center) {
                over_in_place(out.pixel_bytes_mut(x, y), color);
            }
        }
    }
}

/// Pixel index range touched by `bounds`, clipped to the surface.
fn pixel_span(bounds: Rect, width: u32, height: u32) -> Option<(u32, u32, u32, u32)> {
    let clip = |v: f64, max: u32| v.clamp(0.0, f64::from(max)) as u32;
    let x0 = clip(bounds.x0.floor(), width);
    let y0 = clip(bounds.y0.floor(), height);
    let x1 = clip(bounds.x1.ceil(), width);
    let y1 = clip(bounds.y1.ceil(), height);
    (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
}

#[cfg(test)]
#[path = "../../tests/unit/render/crisp.rs"]
mod tests;
