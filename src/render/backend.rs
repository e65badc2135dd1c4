use crate::{
    foundation::{core::PixelSurface, error::PixelateResult},
    pipeline::sample::BlockSample,
    render::shape::ShapeStyle,
};

/// Paints sampled blocks onto a fresh output surface.
pub trait RenderBackend {
    /// Allocate a `width`×`height` transparent surface and paint `blocks` in order.
    ///
    /// Each block is filled, then its border (if any) is stroked over the fill. Anything that
    /// lands outside the surface is clipped.
    fn render(
        &mut self,
        width: u32,
        height: u32,
        blocks: &[BlockSample],
        style: &ShapeStyle,
    ) -> PixelateResult<PixelSurface>;
}

/// Available backend kinds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Aliased pixel-center coverage; block edges stay crisp.
    #[default]
    Crisp,
    /// Analytic coverage via `vello_cpu`; smooth circle edges.
    Antialiased,
}

/// Create a rendering backend implementation.
pub fn create_backend(kind: BackendKind) -> Box<dyn RenderBackend> {
    match kind {
        BackendKind::Crisp => Box::new(crate::render::crisp::CrispBackend::new()),
        BackendKind::Antialiased => {
            Box::new(crate::render::antialiased::AntialiasedBackend::new())
        }
    }
}
