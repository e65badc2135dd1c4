use crate::{
    assets::source::ImageSource,
    foundation::{core::PixelSurface, error::PixelateResult},
    pipeline::{
        align::{GridExtent, align_grid},
        config::{EngineOpts, PixelationConfig},
        normalize::{normalize, normalized_dimensions},
        sample::sample_blocks,
    },
    render::{backend::create_backend, shape::ShapeStyle},
};

/// Load the image named by `url` and pixelate it with default [`EngineOpts`].
pub fn pixelate(
    source: &dyn ImageSource,
    url: &str,
    config: &PixelationConfig,
) -> PixelateResult<PixelSurface> {
    pixelate_with(source, url, config, &EngineOpts::default())
}

/// Load the image named by `url` and pixelate it.
///
/// The config is validated before the source is touched, so an invalid config never costs a
/// load or an allocation. Load failures propagate unchanged.
#[tracing::instrument(skip(source, opts))]
pub fn pixelate_with(
    source: &dyn ImageSource,
    url: &str,
    config: &PixelationConfig,
    opts: &EngineOpts,
) -> PixelateResult<PixelSurface> {
    config.validate()?;
    opts.validate()?;
    let src = source.load(url)?;
    run(&src, config, opts)
}

/// Pixelate an already-decoded surface.
pub fn pixelate_surface(
    src: &PixelSurface,
    config: &PixelationConfig,
    opts: &EngineOpts,
) -> PixelateResult<PixelSurface> {
    config.validate()?;
    opts.validate()?;
    run(src, config, opts)
}

/// Dimensions a run would produce, without sampling or rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunPlan {
    pub source: (u32, u32),
    pub working: (u32, u32),
    pub extent: GridExtent,
    /// Blocks per axis, trailing partial blocks included.
    pub blocks: (u32, u32),
}

/// Compute the [`RunPlan`] for a `width`×`height` source.
pub fn plan(
    width: u32,
    height: u32,
    config: &PixelationConfig,
    opts: &EngineOpts,
) -> PixelateResult<RunPlan> {
    config.validate()?;
    opts.validate()?;
    let working = normalized_dimensions(width, height, opts.min_resolution);
    let extent = align_grid(working.0, working.1, config.block_size, config.align_pixels);
    Ok(RunPlan {
        source: (width, height),
        working,
        extent,
        blocks: extent.block_counts(config.block_size),
    })
}

fn run(
    src: &PixelSurface,
    config: &PixelationConfig,
    opts: &EngineOpts,
) -> PixelateResult<PixelSurface> {
    let working = normalize(src, opts.min_resolution, opts.interpolation)?;
    let extent = align_grid(
        working.width(),
        working.height(),
        config.block_size,
        config.align_pixels,
    );
    tracing::debug!(
        working_w = working.width(),
        working_h = working.height(),
        loop_w = extent.loop_width,
        loop_h = extent.loop_height,
        aligned = extent.aligned,
        "grid extent"
    );

    let blocks = sample_blocks(&working, extent, config.block_size);
    let style = ShapeStyle::from_config(config);
    let mut backend = create_backend(opts.backend);
    backend.render(extent.loop_width, extent.loop_height, &blocks, &style)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/engine.rs"]
mod tests;
