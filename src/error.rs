//! Error types for yangdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for yangdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for yangdoc library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure reading the module tree exported by the YANG toolchain.
    #[error("Module tree JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A statement fragment referenced a module that was never announced.
    #[error("Module not found: {0}")]
    ModuleNotFound(String),

    /// The requested output format is not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
