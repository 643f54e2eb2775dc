//! # Console Error Type
//!
//! What the controller loop can fail with.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  ValidationError ──► re-prompt, never reaches AppError                  │
//! │                                                                         │
//! │  CoreError ────────► Notice::Rejected, printed as "[ERROR] …"           │
//! │                                                                         │
//! │  StoreError ───────► AppError::Store                                    │
//! │                      • at startup: fatal, exit code 1                   │
//! │                      • persisting at close: printed, not fatal          │
//! │                      • journaling a receipt: printed, not fatal         │
//! │                                                                         │
//! │  stdin at EOF ─────► AppError::InputClosed ──► treated as close         │
//! │                                                                         │
//! │  stdout broken ────► AppError::Io ──► fatal                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use emporium_core::CoreError;
use emporium_store::StoreError;
use thiserror::Error;

/// Console application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Reading from or writing to the console failed.
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    /// A storage operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A domain operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The console input reached end of file.
    #[error("Console input closed")]
    InputClosed,
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;
