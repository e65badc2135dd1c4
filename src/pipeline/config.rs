use std::str::FromStr;

use crate::{
    foundation::error::{PixelateError, PixelateResult},
    render::backend::BackendKind,
};

/// Minimum working resolution the normalizer raises small sources to.
pub const MIN_RESOLUTION: u32 = 600;

/// Rendering primitive used for each block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelShape {
    /// Flat rectangle covering the sampled footprint.
    #[default]
    Square,
    /// Disc of diameter `block_size` anchored at the block origin.
    Circle,
}

impl FromStr for PixelShape {
    type Err = PixelateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(Self::Square),
            "circle" => Ok(Self::Circle),
            other => Err(PixelateError::invalid_config(format!(
                "unknown pixel shape '{other}' (expected 'square' or 'circle')"
            ))),
        }
    }
}

/// Per-invocation pixelation settings.
///
/// Passed by reference into each run and never mutated while a run is in flight; callers that
/// toggle settings build a new value and start a new run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixelationConfig {
    /// Block edge length in working-surface pixels. Must be non-zero.
    pub block_size: u32,
    /// Stroke block boundaries (only for blocks larger than 2px).
    #[serde(default)]
    pub draw_borders: bool,
    #[serde(default)]
    pub pixel_shape: PixelShape,
    /// Crop the working surface to whole blocks before sampling.
    #[serde(default)]
    pub align_pixels: bool,
}

impl PixelationConfig {
    /// Square, borderless, unaligned blocks of `block_size`.
    pub fn new(block_size: u32) -> Self {
        Self {
            block_size,
            draw_borders: false,
            pixel_shape: PixelShape::Square,
            align_pixels: false,
        }
    }

    pub fn with_borders(mut self, draw_borders: bool) -> Self {
        self.draw_borders = draw_borders;
        self
    }

    pub fn with_shape(mut self, pixel_shape: PixelShape) -> Self {
        self.pixel_shape = pixel_shape;
        self
    }

    pub fn with_alignment(mut self, align_pixels: bool) -> Self {
        self.align_pixels = align_pixels;
        self
    }

    /// Reject configs the engine cannot run.
    pub fn validate(&self) -> PixelateResult<()> {
        if self.block_size == 0 {
            return Err(PixelateError::invalid_config(
                "block_size must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config.
    ///
    /// Negative or fractional block sizes fail here as [`PixelateError::InvalidConfig`].
    pub fn from_json(s: &str) -> PixelateResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PixelateError::invalid_config(format!("parse config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Resampling filter used when the normalizer resizes a source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Nearest,
    #[default]
    Bilinear,
}

impl Interpolation {
    pub(crate) fn filter(self) -> image::imageops::FilterType {
        match self {
            Self::Nearest => image::imageops::FilterType::Nearest,
            Self::Bilinear => image::imageops::FilterType::Triangle,
        }
    }
}

/// Engine-level knobs that stay fixed across runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineOpts {
    /// Smallest working dimension the normalizer targets.
    pub min_resolution: u32,
    pub interpolation: Interpolation,
    pub backend: BackendKind,
}

impl Default for EngineOpts {
    fn default() -> Self {
        Self {
            min_resolution: MIN_RESOLUTION,
            interpolation: Interpolation::default(),
            backend: BackendKind::default(),
        }
    }
}

impl EngineOpts {
    pub fn validate(&self) -> PixelateResult<()> {
        if self.min_resolution == 0 {
            return Err(PixelateError::invalid_config(
                "min_resolution must be greater than 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/config.rs"]
mod tests;
