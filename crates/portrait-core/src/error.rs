use thiserror::Error;

/// Problems building a [`crate::PortraitConfig`] from loosely typed input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown portrait size `{0}` (expected small, medium, large or fullscreen)")]
    UnknownSize(String),
    #[error("unknown portrait variant `{0}` (expected standard or rainbow)")]
    UnknownVariant(String),
    #[error("portrait `{0}` has no image source")]
    MissingImage(String),
}
