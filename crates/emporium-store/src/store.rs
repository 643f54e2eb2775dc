//! # Catalog Store
//!
//! Configuration and the handle the console uses for all persistence.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Store Lifecycle                                    │
//! │                                                                         │
//! │  Console startup                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(dir) ← data directory, journal toggle                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogStore::open(config) ← creates the directory if needed           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_catalog()  ──► Audio, Smartphone, Laptop partitions, in order    │
//! │       │                                                                 │
//! │       │  … session runs; each checkout ──► record_receipt()            │
//! │       ▼                                                                 │
//! │  persist_catalog(&catalog) ──► overwrite all three partition files     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use emporium_core::{Catalog, Receipt, Variant, PARTITION_COUNT};
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::{PartitionRepository, ReceiptJournal};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust
/// use emporium_store::StoreConfig;
///
/// let config = StoreConfig::new("./data").journal(false);
/// assert!(!config.journal_enabled);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the partition files and the journal.
    pub data_dir: PathBuf,

    /// Whether confirmed checkouts are appended to the journal.
    /// Default: true
    pub journal_enabled: bool,
}

impl StoreConfig {
    /// Creates a configuration rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            journal_enabled: true,
        }
    }

    /// Sets whether receipts are journaled.
    pub fn journal(mut self, enabled: bool) -> Self {
        self.journal_enabled = enabled;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}

// =============================================================================
// Catalog Store
// =============================================================================

/// Outcome of [`CatalogStore::persist_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersistSummary {
    /// Records written per partition, in variant order.
    pub written: [usize; PARTITION_COUNT],
}

impl PersistSummary {
    /// Records written across all partitions.
    pub fn total(&self) -> usize {
        self.written.iter().sum()
    }
}

/// Main persistence handle.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    config: StoreConfig,
}

impl CatalogStore {
    /// Opens a store, creating the data directory if it does not exist.
    ///
    /// ## Returns
    /// * `Err(NotADirectory)` - the path exists and is a file
    /// * `Err(Io)` - the directory could not be created
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let dir = &config.data_dir;
        if dir.exists() && !dir.is_dir() {
            return Err(StoreError::NotADirectory(dir.clone()));
        }
        fs::create_dir_all(dir).map_err(|err| StoreError::io(dir, err))?;

        info!(
            data_dir = %dir.display(),
            journal = config.journal_enabled,
            "Store opened"
        );
        Ok(CatalogStore { config })
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Data directory.
    pub fn data_dir(&self) -> &Path {
        &self.config.data_dir
    }

    /// Returns the partition repository.
    pub fn partitions(&self) -> PartitionRepository {
        PartitionRepository::new(&self.config.data_dir)
    }

    /// Returns the receipt journal.
    pub fn journal(&self) -> ReceiptJournal {
        ReceiptJournal::new(&self.config.data_dir)
    }

    /// Loads every partition into a fresh catalog.
    ///
    /// Never fails: anything that stops a partition early is logged and the
    /// records read up to that point are kept.
    pub fn load_catalog(&self) -> Catalog {
        let partitions = self.partitions();
        let mut catalog = Catalog::new();

        for variant in Variant::ALL {
            let commodities = partitions.load(variant);
            debug!(%variant, records = commodities.len(), "Partition loaded");
            for commodity in commodities {
                catalog.add(commodity);
            }
        }

        info!(commodities = catalog.len(), "Catalog loaded");
        catalog
    }

    /// Overwrites every partition file with the catalog's contents.
    pub fn persist_catalog(&self, catalog: &Catalog) -> StoreResult<PersistSummary> {
        let partitions = self.partitions();
        let mut written = [0; PARTITION_COUNT];

        for variant in Variant::ALL {
            written[variant.index()] = partitions.write(variant, catalog.partition(variant))?;
        }

        let summary = PersistSummary { written };
        info!(commodities = summary.total(), "Catalog persisted");
        Ok(summary)
    }

    /// Appends a receipt to the journal when journaling is enabled.
    ///
    /// Returns whether anything was written.
    pub fn record_receipt(&self, receipt: &Receipt) -> StoreResult<bool> {
        if !self.config.journal_enabled {
            debug!(receipt = %receipt.id, "Journal disabled, receipt not recorded");
            return Ok(false);
        }
        self.journal().append(receipt)?;
        Ok(true)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
