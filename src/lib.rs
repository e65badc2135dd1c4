//! Pixelate turns an arbitrary bitmap into block pixel art.
//!
//! A run is a pure pipeline over one decoded image:
//!
//! - acquire a surface through an [`ImageSource`]
//! - normalize it to a minimum working resolution
//! - optionally crop it to whole blocks
//! - sample one alpha-aware average color per block
//! - paint each block as a square or circle, optionally bordered
//!
//! Start with [`pixelate`] or, for surfaces you already decoded, [`pixelate_surface`].
#![forbid(unsafe_code)]

mod assets;
mod export;
mod foundation;
mod pipeline;
mod render;
mod session;

pub use crate::foundation::core::{Circle, PixelSurface, Point, Rect, Rgba8};
pub use crate::foundation::error::{ErrorKind, PixelateError, PixelateResult};

pub use crate::assets::decode::{decode_data_url, decode_image};
pub use crate::assets::source::{ImageSource, LocalSource, MemorySource, SurfaceSource};
pub use crate::export::png::{download_file_name, encode_png, save_png};
pub use crate::export::present::fit_contain;
pub use crate::pipeline::align::{GridExtent, align_grid};
pub use crate::pipeline::config::{
    EngineOpts, Interpolation, MIN_RESOLUTION, PixelShape, PixelationConfig,
};
pub use crate::pipeline::engine::{RunPlan, pixelate, pixelate_surface, pixelate_with, plan};
pub use crate::pipeline::normalize::{normalize, normalized_dimensions};
pub use crate::pipeline::sample::{BlockSample, sample_block, sample_blocks};
pub use crate::render::antialiased::AntialiasedBackend;
pub use crate::render::backend::{BackendKind, RenderBackend, create_backend};
pub use crate::render::crisp::CrispBackend;
pub use crate::render::shape::{
    BORDER_COLOR, ShapeStyle, block_circle, border_line_width, circle_border_path,
    square_border_path, square_rect,
};
pub use crate::session::latest::{LatestRequest, RequestTicket};
