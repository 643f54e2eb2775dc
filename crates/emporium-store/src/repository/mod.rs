//! # Repository Module
//!
//! File-backed repositories for Emporium.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console controller                                                     │
//! │       │                                                                 │
//! │       │  store.load_catalog() / store.persist_catalog(&catalog)        │
//! │       ▼                                                                 │
//! │  CatalogStore                                                           │
//! │       │                                                                 │
//! │       ├── PartitionRepository                                          │
//! │       │   ├── read(variant) / load(variant)                            │
//! │       │   └── write(variant, commodities)                              │
//! │       │                                                                 │
//! │       └── ReceiptJournal                                               │
//! │           ├── append(receipt)                                          │
//! │           └── read_all()                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Text files in the data directory                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`PartitionRepository`] - One flat text file per commodity variant
//! - [`ReceiptJournal`] - JSON-lines checkout history

pub mod journal;
pub mod partition;

pub use journal::ReceiptJournal;
pub use partition::PartitionRepository;
