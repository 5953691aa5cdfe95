use std::path::PathBuf;

use strata_noise::NoiseError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldGenError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("seed must be an integer, got `{0}`")]
    InvalidSeed(String),
    #[error(transparent)]
    Noise(#[from] NoiseError),
    #[error("failed to read terrain config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse terrain config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl WorldGenError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        WorldGenError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
