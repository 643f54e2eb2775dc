//! # Emporium Console Library
//!
//! The interactive store: configuration, logging, prompting and the
//! controller loop that drives the `emporium-core` state machine.
//!
//! ## Module Organization
//! ```text
//! emporium_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment-driven settings
//! ├── controller.rs   ◄─── Menu loop, notices, receipts
//! ├── capture.rs      ◄─── Prompting for a new commodity
//! ├── prompt.rs       ◄─── Line input with re-prompting
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Streams
//! Menus and listings go to stdout. Logs go to stderr, so the interactive
//! surface stays clean when `RUST_LOG` is raised.

pub mod capture;
pub mod config;
pub mod controller;
pub mod error;
pub mod prompt;

use std::io;

use emporium_store::CatalogStore;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::ConsoleConfig;
pub use controller::StoreController;
pub use error::{AppError, AppResult};

/// Runs the console store on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging ─── tracing-subscriber to stderr, default warn   │
/// │                                                                         │
/// │  2. Load Configuration ─── EMPORIUM_DATA_DIR, EMPORIUM_STORE_NAME,      │
/// │                            EMPORIUM_JOURNAL                             │
/// │                                                                         │
/// │  3. Open the Store ─────── create the data directory if needed          │
/// │                                                                         │
/// │  4. Run the Controller ─── load, loop until close or EOF, save          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> AppResult<()> {
    init_tracing();

    let config = ConsoleConfig::from_env();
    info!(
        data_dir = %config.data_dir.display(),
        store = %config.store_name,
        journal = config.journal_enabled,
        "Starting Emporium console"
    );

    let store = CatalogStore::open(config.store_config())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut controller =
        StoreController::new(store, config.store_name, stdin.lock(), stdout.lock());
    controller.run()?;

    info!("Store closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=info` - Load, save and checkout summaries
/// - `RUST_LOG=debug` - Every event and partition read
/// - Default: WARN (skipped records, journal failures)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // A second call (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
