use vello_cpu::kurbo::Shape as _;

use crate::{
    foundation::{
        core::{PixelSurface, Rgba8},
        error::{PixelateError, PixelateResult},
    },
    pipeline::{config::PixelShape, sample::BlockSample},
    render::{
        backend::RenderBackend,
        shape::{
            BORDER_COLOR, ShapeStyle, block_circle, circle_border_path, square_border_path,
            square_rect,
        },
    },
};

const CIRCLE_TOLERANCE: f64 = 0.1;

/// Rasterizer backed by `vello_cpu` with analytic (antialiased) coverage.
///
/// Uses the same block geometry as the crisp backend; only edge coverage differs.
pub struct AntialiasedBackend {
    ctx: Option<vello_cpu::RenderContext>,
}

impl AntialiasedBackend {
    pub fn new() -> Self {
        Self { ctx: None }
    }

    fn with_ctx_mut<R>(
        &mut self,
        width: u16,
        height: u16,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> PixelateResult<R>,
    ) -> PixelateResult<R> {
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();
        let out = f(&mut ctx)?;
        self.ctx = Some(ctx);
        Ok(out)
    }
}

impl Default for AntialiasedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderBackend for AntialiasedBackend {
    #[tracing::instrument(skip(self, blocks, style), fields(blocks = blocks.len()))]
    fn render(
        &mut self,
        width: u32,
        height: u32,
        blocks: &[BlockSample],
        style: &ShapeStyle,
    ) -> PixelateResult<PixelSurface> {
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| PixelateError::surface("surface width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| PixelateError::surface("surface height exceeds u16"))?;
        let mut out = PixelSurface::new(width, height)?;

        let pixmap = self.with_ctx_mut(width_u16, height_u16, |ctx| {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            for block in blocks {
                draw_block(ctx, block, style);
            }
            ctx.flush();
            let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
            ctx.render_to_pixmap(&mut pixmap);
            Ok(pixmap)
        })?;

        unpremultiply_into(pixmap.data_as_u8_slice(), out.data_mut())?;
        Ok(out)
    }
}

fn paint(c: Rgba8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn draw_block(ctx: &mut vello_cpu::RenderContext, block: &BlockSample, style: &ShapeStyle) {
    ctx.set_paint(paint(block.color));
    match style.shape {
        PixelShape::Square => {
            let r = square_rect(block);
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1));
            if let Some(lw) = style.border_width {
                let b = square_border_path(block, lw);
                ctx.set_paint(paint(BORDER_COLOR));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(lw));
                ctx.stroke_rect(&vello_cpu::kurbo::Rect::new(b.x0, b.y0, b.x1, b.y1));
            }
        }
        PixelShape::Circle => {
            let c = block_circle(block, style.block_size);
            let disc = vello_cpu::kurbo::Circle::new((c.center.x, c.center.y), c.radius);
            ctx.fill_path(&disc.to_path(CIRCLE_TOLERANCE));
            if let Some(lw) = style.border_width {
                let b = circle_border_path(block, style.block_size, lw);
                let rim = vello_cpu::kurbo::Circle::new((b.center.x, b.center.y), b.radius);
                ctx.set_paint(paint(BORDER_COLOR));
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(lw));
                ctx.stroke_path(&rim.to_path(CIRCLE_TOLERANCE));
            }
        }
    }
}

/// Convert premultiplied pixmap bytes into straight-alpha surface bytes.
fn unpremultiply_into(src: &[u8], dst: &mut [u8]) -> PixelateResult<()> {
    if src.len() != dst.len() {
        return Err(PixelateError::surface(format!(
            "pixmap has {} bytes, surface expects {}",
            src.len(),
            dst.len()
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let a = u32::from(s[3]);
        if a == 0 {
            d.fill(0);
            continue;
        }
        for (dc, &sc) in d[..3].iter_mut().zip(&s[..3]) {
            *dc = ((u32::from(sc) * 255 + a / 2) / a).min(255) as u8;
        }
        d[3] = s[3];
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/antialiased.rs"]
mod tests;
