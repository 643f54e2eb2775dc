//! # Commodity Catalog
//!
//! The owning collection of everything on sale, partitioned by variant.
//!
//! ## Flattened Addressing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  partitions:   Audio            Smartphone        Laptop                │
//! │               ┌─────┬─────┐    ┌─────┐           ┌─────┬─────┬─────┐    │
//! │               │ A0  │ A1  │    │ S0  │           │ L0  │ L1  │ L2  │    │
//! │               └─────┴─────┘    └─────┘           └─────┴─────┴─────┘    │
//! │  flat index:    0     1          2                 3     4     5        │
//! │  shown as:     #1    #2         #3                #4    #5    #6        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Removing flat index 1 shifts S0 to index 1, L0 to index 2, and so on.
//!
//! ## Handles
//! Every entry gets a [`CommodityId`] when it is added. Ids are never reused,
//! so a cart line pointing at a deleted entry fails to resolve instead of
//! silently pointing at whatever took its place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

use crate::commodity::{Commodity, Variant};
use crate::error::{CoreError, CoreResult};
use crate::PARTITION_COUNT;

/// Stable handle to a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommodityId(u64);

impl CommodityId {
    /// Raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for CommodityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: CommodityId,
    commodity: Commodity,
}

/// Three insertion-ordered partitions of owned commodities.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    partitions: [Vec<Entry>; PARTITION_COUNT],
    next_id: u64,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from commodities in the given order.
    pub fn from_commodities(commodities: impl IntoIterator<Item = Commodity>) -> Self {
        let mut catalog = Catalog::new();
        for commodity in commodities {
            catalog.add(commodity);
        }
        catalog
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends a commodity to its variant partition.
    ///
    /// No uniqueness check happens here. Callers that care about duplicate
    /// names ask [`Catalog::exists`] first.
    pub fn add(&mut self, commodity: Commodity) -> CommodityId {
        let id = CommodityId(self.next_id);
        self.next_id += 1;
        self.partitions[commodity.variant().index()].push(Entry { id, commodity });
        id
    }

    /// Removes the entry at a flattened position and returns it.
    pub fn remove(&mut self, flat_index: usize) -> CoreResult<Commodity> {
        let (variant, offset) = self.locate(flat_index)?;
        let entry = self.partitions[variant.index()].remove(offset);
        Ok(entry.commodity)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// True if any entry in any partition has the same name.
    pub fn exists(&self, commodity: &Commodity) -> bool {
        self.entries().any(|entry| entry.commodity.same_product(commodity))
    }

    /// Entry at a flattened position.
    pub fn get(&self, flat_index: usize) -> Option<&Commodity> {
        self.entry(flat_index).map(|entry| &entry.commodity)
    }

    /// Handle of the entry at a flattened position.
    pub fn id_at(&self, flat_index: usize) -> Option<CommodityId> {
        self.entry(flat_index).map(|entry| entry.id)
    }

    /// Resolves a handle.
    pub fn lookup(&self, id: CommodityId) -> Option<&Commodity> {
        self.entries()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.commodity)
    }

    /// Partition holding the entry at a flattened position.
    pub fn partition_of(&self, flat_index: usize) -> Option<Variant> {
        self.locate(flat_index).ok().map(|(variant, _)| variant)
    }

    /// Number of entries in one partition.
    pub fn partition_len(&self, variant: Variant) -> usize {
        self.partitions[variant.index()].len()
    }

    /// Entries of one partition, in insertion order.
    pub fn partition(&self, variant: Variant) -> impl Iterator<Item = &Commodity> {
        self.partitions[variant.index()]
            .iter()
            .map(|entry| &entry.commodity)
    }

    /// Per-partition sizes, in variant order.
    pub fn capacities(&self) -> [usize; PARTITION_COUNT] {
        Variant::ALL.map(|variant| self.partition_len(variant))
    }

    /// Total entries across all partitions.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    /// True when no partition holds anything.
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Vec::is_empty)
    }

    /// All commodities in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = &Commodity> {
        self.entries().map(|entry| &entry.commodity)
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Names only, grouped under variant headers and numbered from 1.
    pub fn render_names(&self) -> String {
        self.render(|out, commodity| {
            let _ = writeln!(out, "{}", commodity.name());
        })
    }

    /// Full descriptions, grouped under variant headers and numbered from 1.
    pub fn render_details(&self) -> String {
        self.render(|out, commodity| out.push_str(&commodity.describe()))
    }

    fn render(&self, mut item: impl FnMut(&mut String, &Commodity)) -> String {
        let mut out = String::new();
        let mut number = 0;
        for variant in Variant::ALL {
            let partition = &self.partitions[variant.index()];
            if partition.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", variant.label());
            for entry in partition {
                number += 1;
                let _ = writeln!(out, "{}.", number);
                item(&mut out, &entry.commodity);
            }
        }
        out
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.partitions.iter().flatten()
    }

    fn entry(&self, flat_index: usize) -> Option<&Entry> {
        let (variant, offset) = self.locate(flat_index).ok()?;
        self.partitions[variant.index()].get(offset)
    }

    fn locate(&self, flat_index: usize) -> CoreResult<(Variant, usize)> {
        let mut remaining = flat_index;
        for variant in Variant::ALL {
            let len = self.partition_len(variant);
            if remaining < len {
                return Ok((variant, remaining));
            }
            remaining -= len;
        }
        Err(CoreError::IndexOutOfRange {
            index: flat_index,
            len: self.len(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commodity::{AudioSpec, LaptopSpec, SmartphoneSpec};
    use crate::money::Money;

    fn audio(name: &str, price: i64) -> Commodity {
        Commodity::audio(name, Money::from_units(price), "audio", AudioSpec::default())
    }

    fn phone(name: &str) -> Commodity {
        Commodity::smartphone(name, Money::from_units(500), "phone", SmartphoneSpec::default())
    }

    fn laptop(name: &str) -> Commodity {
        Commodity::laptop(name, Money::from_units(900), "laptop", LaptopSpec::default())
    }

    fn mixed() -> Catalog {
        // Inserted out of variant order on purpose.
        Catalog::from_commodities([laptop("L1"), audio("A1", 10), phone("S1"), audio("A2", 20)])
    }

    #[test]
    fn test_flattened_order_follows_variants() {
        let catalog = mixed();
        let names: Vec<&str> = catalog.iter().map(Commodity::name).collect();
        assert_eq!(names, ["A1", "A2", "S1", "L1"]);

        assert_eq!(catalog.partition_of(0), Some(Variant::Audio));
        assert_eq!(catalog.partition_of(2), Some(Variant::Smartphone));
        assert_eq!(catalog.partition_of(3), Some(Variant::Laptop));
        assert_eq!(catalog.partition_of(4), None);
        assert_eq!(catalog.capacities(), [2, 1, 1]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_exists_checks_every_partition() {
        let catalog = mixed();
        assert!(catalog.exists(&audio("S1", 1)));
        assert!(!catalog.exists(&audio("Nope", 1)));
    }

    #[test]
    fn test_duplicate_guard_leaves_existing_entry() {
        let mut catalog = mixed();
        let duplicate = audio("A1", 999);

        if !catalog.exists(&duplicate) {
            catalog.add(duplicate);
        }

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get(0).map(Commodity::price), Some(Money::from_units(10)));
    }

    #[test]
    fn test_remove_shifts_later_indices() {
        let mut catalog = Catalog::from_commodities([audio("A", 1), audio("B", 2), phone("C")]);

        let removed = catalog.remove(0).unwrap();
        assert_eq!(removed.name(), "A");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).map(Commodity::name), Some("B"));
        assert_eq!(catalog.get(1).map(Commodity::name), Some("C"));
    }

    #[test]
    fn test_remove_out_of_range_is_reported() {
        let mut catalog = mixed();
        assert_eq!(
            catalog.remove(4).unwrap_err(),
            CoreError::IndexOutOfRange { index: 4, len: 4 }
        );
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_ids_survive_removal_and_are_not_reused() {
        let mut catalog = Catalog::from_commodities([audio("A", 1), audio("B", 2)]);
        let b = catalog.id_at(1).unwrap();

        catalog.remove(0).unwrap();
        assert_eq!(catalog.id_at(0), Some(b));
        assert_eq!(catalog.lookup(b).map(Commodity::name), Some("B"));

        let c = catalog.add(audio("C", 3));
        assert_ne!(c, b);
        catalog.remove(0).unwrap();
        assert_eq!(catalog.lookup(b), None);
    }

    #[test]
    fn test_is_empty_looks_at_all_partitions() {
        let catalog = Catalog::from_commodities([laptop("Only")]);
        assert!(!catalog.is_empty());
        assert!(Catalog::new().is_empty());
    }

    #[test]
    fn test_render_names_numbers_globally() {
        let text = mixed().render_names();
        assert_eq!(
            text,
            "Audio:\n1.\nA1\n2.\nA2\nSmartphone:\n3.\nS1\nLaptop:\n4.\nL1\n"
        );
    }

    #[test]
    fn test_render_skips_empty_partitions() {
        let catalog = Catalog::from_commodities([laptop("L")]);
        let text = catalog.render_details();
        assert!(text.starts_with("Laptop:\n1.\n* L *\n"));
        assert!(!text.contains("Audio:"));
        assert_eq!(Catalog::new().render_details(), "");
    }
}
