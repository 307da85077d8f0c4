//! Errors reported by this crate.

use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Grid construction with a non-positive width or height.
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: i32, height: i32 },

    /// Grid construction whose cell storage cannot be allocated.
    #[error("grid of {width}x{height} cells is too large to allocate")]
    TooLarge { width: i32, height: i32 },

    #[error("tick rate must be a positive number of ticks per second, got {0}")]
    InvalidTickRate(f32),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
