pub(crate) mod align;
pub(crate) mod config;
pub(crate) mod engine;
pub(crate) mod normalize;
pub(crate) mod sample;
