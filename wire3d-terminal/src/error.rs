/// Fatal viewer errors
use std::io;

use wire3d_core::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    /// The terminal could not be set up, read or written
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
