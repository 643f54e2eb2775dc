//! # emporium-store: Flat-file Persistence for Emporium
//!
//! This crate reads and writes the store's catalog as plain text files, one
//! per commodity variant, and keeps a JSON-lines journal of checkouts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Emporium Data Flow                               │
//! │                                                                         │
//! │  Console controller (startup / checkout / close)                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  emporium-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ CatalogStore  │    │  Repositories │    │  seed (bin)  │  │   │
//! │  │   │  (store.rs)   │    │               │    │              │  │   │
//! │  │   │               │    │ Partition     │    │ demo catalog │  │   │
//! │  │   │ StoreConfig   │◄───│ ReceiptJournal│    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AudioCommodity.txt • SmartphoneCommodity.txt • LaptopCommodity.txt    │
//! │  receipts.jsonl                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store configuration and the catalog load/persist handle
//! - [`repository`] - Partition files and the receipt journal
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use emporium_store::{CatalogStore, StoreConfig};
//!
//! # fn main() -> emporium_store::StoreResult<()> {
//! let store = CatalogStore::open(StoreConfig::new("./data"))?;
//! let catalog = store.load_catalog();
//! // … run the session …
//! store.persist_catalog(&catalog)?;
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{CatalogStore, PersistSummary, StoreConfig};

pub use repository::journal::ReceiptJournal;
pub use repository::partition::PartitionRepository;
