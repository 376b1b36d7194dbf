//! Error types for FIFO CSR access

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for FIFO CSR operations
pub type Result<T> = std::result::Result<T, FifoError>;

/// Errors that can occur while opening or mapping the CSR block
#[derive(Debug, Error)]
pub enum FifoError {
    /// The memory device backing the CSR window could not be opened
    #[error("Cannot open {path}: {reason}")]
    WindowUnavailable {
        /// Path that was tried (normally /dev/mem)
        path: PathBuf,
        /// Reason for failure
        reason: String,
    },

    /// Mapping the CSR window into the process failed
    #[error("Failed to map CSR window at {base:#x}: {reason}")]
    MapFailed {
        /// Physical base address requested
        base: usize,
        /// Reason for failure
        reason: String,
    },

    /// I/O error during device communication
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

impl FifoError {
    /// Create a window-unavailable error
    pub fn window_unavailable(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::WindowUnavailable {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a map-failed error
    pub fn map_failed(base: usize, reason: impl Into<String>) -> Self {
        Self::MapFailed {
            base,
            reason: reason.into(),
        }
    }
}
