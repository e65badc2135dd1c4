use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{
    assets::decode::{decode_data_url, decode_image},
    foundation::{
        core::PixelSurface,
        error::{PixelateError, PixelateResult},
    },
};

/// Turns a URL into a decoded surface.
///
/// This is the only I/O boundary of the engine. Implementations report every failure
/// (missing file, unsupported scheme, undecodable bytes) as [`PixelateError::Load`]; the engine
/// never retries.
pub trait ImageSource: Send + Sync {
    fn load(&self, url: &str) -> PixelateResult<PixelSurface>;
}

/// Reads `file://` URLs, base64 `data:` URLs and plain filesystem paths.
///
/// Network schemes are refused: fetching remote images is left to the caller, who can hand the
/// bytes over through a [`MemorySource`].
#[derive(Clone, Debug, Default)]
pub struct LocalSource {
    root: Option<PathBuf>,
}

impl LocalSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative plain paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn read_bytes(&self, url: &str) -> PixelateResult<Vec<u8>> {
        match url::Url::parse(url) {
            Ok(u) if u.scheme() == "file" => {
                let path = u
                    .to_file_path()
                    .map_err(|_| PixelateError::load(format!("'{url}' has no local path")))?;
                read_file(&path)
            }
            Ok(u) if u.scheme() == "data" => decode_data_url(url),
            // Single-letter schemes are Windows drive letters.
            Ok(u) if u.scheme().len() > 1 => Err(PixelateError::load(format!(
                "unsupported URL scheme '{}' in '{url}'",
                u.scheme()
            ))),
            _ => read_file(&self.resolve(Path::new(url))),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl ImageSource for LocalSource {
    fn load(&self, url: &str) -> PixelateResult<PixelSurface> {
        let bytes = self.read_bytes(url)?;
        tracing::debug!(url, bytes = bytes.len(), "loaded image bytes");
        decode_image(&bytes)
    }
}

fn read_file(path: &Path) -> PixelateResult<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| PixelateError::load(format!("failed to read '{}': {e}", path.display())))
}

/// URL → encoded bytes the caller already fetched.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    images: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, bytes: Vec<u8>) {
        self.images.insert(url.into(), bytes);
    }

    pub fn with(mut self, url: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(url, bytes);
        self
    }
}

impl ImageSource for MemorySource {
    fn load(&self, url: &str) -> PixelateResult<PixelSurface> {
        let bytes = self
            .images
            .get(url)
            .ok_or_else(|| PixelateError::load(format!("no image registered for '{url}'")))?;
        decode_image(bytes)
    }
}

/// URL → already-decoded surface, e.g. synthetic bitmaps.
#[derive(Clone, Debug, Default)]
pub struct SurfaceSource {
    surfaces: HashMap<String, PixelSurface>,
}

impl SurfaceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, url: impl Into<String>, surface: PixelSurface) {
        self.surfaces.insert(url.into(), surface);
    }

    pub fn with(mut self, url: impl Into<String>, surface: PixelSurface) -> Self {
        self.insert(url, surface);
        self
    }
}

impl ImageSource for SurfaceSource {
    fn load(&self, url: &str) -> PixelateResult<PixelSurface> {
        self.surfaces
            .get(url)
            .cloned()
            .ok_or_else(|| PixelateError::load(format!("no surface registered for '{url}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/source.rs"]
mod tests;
