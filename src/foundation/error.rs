/// Result alias used across the engine.
pub type PixelateResult<T> = Result<T, PixelateError>;

/// Error taxonomy surfaced to callers.
///
/// Every variant is terminal for the invocation that produced it: the engine never retries and
/// never hands back a partial or substitute surface.
#[derive(thiserror::Error, Debug)]
pub enum PixelateError {
    /// The source image could not be fetched or decoded.
    #[error("load error: {0}")]
    Load(String),

    /// The pixelation config was rejected before any work started.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A drawable surface could not be allocated.
    #[error("surface error: {0}")]
    Surface(String),

    /// Anything else, with its context chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Coarse classification of a [`PixelateError`], for picking a fallback UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// See [`PixelateError::Load`].
    Load,
    /// See [`PixelateError::InvalidConfig`].
    InvalidConfig,
    /// See [`PixelateError::Surface`].
    Surface,
    /// See [`PixelateError::Other`].
    Other,
}

impl PixelateError {
    /// Build a [`PixelateError::Load`].
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Build a [`PixelateError::InvalidConfig`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Build a [`PixelateError::Surface`].
    pub fn surface(msg: impl Into<String>) -> Self {
        Self::Surface(msg.into())
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Load(_) => ErrorKind::Load,
            Self::InvalidConfig(_) => ErrorKind::InvalidConfig,
            Self::Surface(_) => ErrorKind::Surface,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}
