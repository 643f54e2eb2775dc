//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                          │
//! │       │                                                                 │
//! │       ├──► load_catalog(): logged, partition treated as finished       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in console app) ← Printed, never fatal                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a file failed.
    ///
    /// ## When This Occurs
    /// - Data directory cannot be created
    /// - File permissions issue
    /// - Disk full
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The data directory path exists but is a file.
    #[error("Data directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A journal line could not be encoded or decoded.
    #[error("Journal entry error: {0}")]
    Journal(#[from] serde_json::Error),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// True when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound)
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_the_path() {
        let err = StoreError::io(
            "/data/AudioCommodity.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(
            err.to_string(),
            "I/O error on /data/AudioCommodity.txt: denied"
        );
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_not_found_detection() {
        let err = StoreError::io("x", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
    }
}
