//! # Partition Repository
//!
//! File operations for the three commodity partitions.
//!
//! ## File Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  <data dir>/                                                            │
//! │  ├── AudioCommodity.txt        one field per line, records back to back │
//! │  ├── SmartphoneCommodity.txt                                            │
//! │  └── LaptopCommodity.txt                                                │
//! │                                                                         │
//! │  read(variant)                                                          │
//! │       │                                                                 │
//! │       ├── file missing      → empty partition                           │
//! │       ├── record truncated  → records before it, stopped_by = Some(..)  │
//! │       └── all good          → every record, stopped_by = None           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use emporium_core::record::{self, DecodedPartition};
use emporium_core::{Commodity, Variant};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

/// File name holding one variant's records.
pub const fn file_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Audio => "AudioCommodity.txt",
        Variant::Smartphone => "SmartphoneCommodity.txt",
        Variant::Laptop => "LaptopCommodity.txt",
    }
}

/// Repository for the per-variant partition files.
#[derive(Debug, Clone)]
pub struct PartitionRepository {
    data_dir: PathBuf,
}

impl PartitionRepository {
    /// Creates a repository rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        PartitionRepository {
            data_dir: data_dir.into(),
        }
    }

    /// Full path of one partition file.
    pub fn path(&self, variant: Variant) -> PathBuf {
        self.data_dir.join(file_name(variant))
    }

    /// Reads and decodes one partition.
    ///
    /// A missing file is an empty partition. Any other I/O failure is
    /// returned; decode failures are reported through
    /// [`DecodedPartition::stopped_by`].
    pub fn read(&self, variant: Variant) -> StoreResult<DecodedPartition> {
        let path = self.path(variant);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(record::decode_all(variant, &text)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "Partition file missing, treating as empty");
                Ok(DecodedPartition::default())
            }
            Err(err) => Err(StoreError::io(&path, err)),
        }
    }

    /// Loads one partition, never failing.
    ///
    /// Whatever stops the read (unreadable file, bad record) is logged and
    /// the records decoded so far are returned.
    pub fn load(&self, variant: Variant) -> Vec<Commodity> {
        match self.read(variant) {
            Ok(DecodedPartition {
                commodities,
                stopped_by,
            }) => {
                if let Some(err) = stopped_by {
                    warn!(
                        %variant,
                        loaded = commodities.len(),
                        error = %err,
                        "Stopped reading partition at a bad record"
                    );
                }
                commodities
            }
            Err(err) => {
                warn!(%variant, error = %err, "Partition file unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Overwrites one partition file with `commodities`.
    ///
    /// Returns the number of records written.
    pub fn write<'a>(
        &self,
        variant: Variant,
        commodities: impl IntoIterator<Item = &'a Commodity>,
    ) -> StoreResult<usize> {
        let path = self.path(variant);
        let commodities: Vec<&Commodity> = commodities.into_iter().collect();
        let text = record::encode_all(commodities.iter().copied());

        fs::write(&path, text).map_err(|err| StoreError::io(&path, err))?;

        debug!(%variant, records = commodities.len(), path = %path.display(), "Partition written");
        Ok(commodities.len())
    }

    /// Directory the partition files live in.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
