//! Error types for SGrid file operations

use sgrid_core::DecodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while opening a grid or reading its properties
#[derive(Error, Debug)]
pub enum SgError {
    /// Header or property file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// I/O error while reading an existing file
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No property with this id is declared in the header
    #[error("property {0} not found in grid")]
    UnknownProperty(String),

    /// The property has no `PROP_FILE` record
    #[error("no file specified for property {0}")]
    NoBackingFile(String),

    /// The property file exists but could not be decoded
    #[error("could not decode {} ({byte_len} bytes): {source}", path.display())]
    Decode {
        path: PathBuf,
        byte_len: u64,
        #[source]
        source: DecodeError,
    },
}

impl SgError {
    /// Map an I/O error on `path`, turning `NotFound` into [`SgError::NotFound`]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Whether the error is a missing header or property file
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type for SGrid file operations
pub type Result<T> = std::result::Result<T, SgError>;
