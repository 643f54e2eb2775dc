//! # Shopping Cart
//!
//! Per-session collection of (commodity handle, quantity) lines.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operator Action          Session Event           Cart Change           │
//! │  ───────────────          ─────────────           ───────────           │
//! │                                                                         │
//! │  Start shopping ─────────► StartShopping ────────► reset(capacities)    │
//! │                                                                         │
//! │  Pick item #N ───────────► Purchase(N-1) ────────► add_or_increment()   │
//! │                                                                         │
//! │  Remove line #N ─────────► RemoveCartLine(N-1) ──► remove_line()        │
//! │                                                                         │
//! │  Manager deletes entry ──► DeleteCommodity ──────► prune_missing()      │
//! │                                                                         │
//! │  Checkout ───────────────► ConfirmCheckout ──────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines are grouped by variant like the catalog, so the cart uses the same
//! flattened numbering scheme for "remove line #N".

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::catalog::{Catalog, CommodityId};
use crate::commodity::{Commodity, Variant};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::{MAX_LINE_QUANTITY, PARTITION_COUNT};

/// One line of the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Handle into the catalog.
    pub commodity: CommodityId,
    /// Always at least 1.
    pub quantity: u32,
}

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per commodity name within a partition
/// - Every quantity is in `1..=MAX_LINE_QUANTITY`
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    partitions: [Vec<CartLine>; PARTITION_COUNT],
}

impl ShoppingCart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every partition and reserves room for `capacities` lines.
    pub fn reset(&mut self, capacities: [usize; PARTITION_COUNT]) {
        for (partition, capacity) in self.partitions.iter_mut().zip(capacities) {
            partition.clear();
            partition.reserve(capacity);
        }
    }

    /// Adds one unit of a commodity, merging with an existing line of the
    /// same name.
    ///
    /// ## Returns
    /// - `Ok(quantity)` with the line's new quantity
    /// - `Err(CommodityNotFound)` if the handle does not resolve
    /// - `Err(QuantityTooLarge)` if the line is already at the cap
    pub fn add_or_increment(&mut self, catalog: &Catalog, id: CommodityId) -> CoreResult<u32> {
        let commodity = catalog
            .lookup(id)
            .ok_or(CoreError::CommodityNotFound(id))?;
        let partition = &mut self.partitions[commodity.variant().index()];

        let existing = partition.iter_mut().find(|line| {
            catalog
                .lookup(line.commodity)
                .is_some_and(|held| held.same_product(commodity))
        });

        if let Some(line) = existing {
            if line.quantity >= MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    name: commodity.name().to_string(),
                    max: MAX_LINE_QUANTITY,
                });
            }
            line.quantity += 1;
            return Ok(line.quantity);
        }

        partition.push(CartLine {
            commodity: id,
            quantity: 1,
        });
        Ok(1)
    }

    /// Removes the line at a flattened position.
    pub fn remove_line(&mut self, flat_index: usize) -> CoreResult<CartLine> {
        let mut remaining = flat_index;
        for partition in self.partitions.iter_mut() {
            if remaining < partition.len() {
                return Ok(partition.remove(remaining));
            }
            remaining -= partition.len();
        }
        Err(CoreError::IndexOutOfRange {
            index: flat_index,
            len: self.len(),
        })
    }

    /// Drops lines whose commodity is no longer in the catalog.
    ///
    /// Returns how many lines were dropped.
    pub fn prune_missing(&mut self, catalog: &Catalog) -> usize {
        let before = self.len();
        for partition in self.partitions.iter_mut() {
            partition.retain(|line| catalog.lookup(line.commodity).is_some());
        }
        before - self.len()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.partitions.iter().map(Vec::len).sum()
    }

    /// True when no partition holds a line.
    pub fn is_empty(&self) -> bool {
        self.partitions.iter().all(Vec::is_empty)
    }

    /// Sum of all line quantities.
    pub fn total_quantity(&self) -> u32 {
        self.iter().map(|line| line.quantity).sum()
    }

    /// Lines in flattened order.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine> {
        self.partitions.iter().flatten()
    }

    /// Lines paired with the commodities they point at, in flattened order.
    ///
    /// Lines whose handle no longer resolves are skipped.
    pub fn lines<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = (&'a Commodity, u32)> + 'a {
        self.iter().filter_map(move |line| {
            catalog
                .lookup(line.commodity)
                .map(|commodity| (commodity, line.quantity))
        })
    }

    /// Σ price × quantity over every line.
    pub fn total(&self, catalog: &Catalog) -> Money {
        self.lines(catalog)
            .map(|(commodity, quantity)| commodity.price() * quantity)
            .sum()
    }

    /// Lines grouped under variant headers, numbered from 1, each with its
    /// `× quantity` annotation.
    pub fn render(&self, catalog: &Catalog) -> String {
        let mut out = String::new();
        let mut number = 0;
        for variant in Variant::ALL {
            let partition = &self.partitions[variant.index()];
            if partition.is_empty() {
                continue;
            }
            let _ = writeln!(out, "{}:", variant.label());
            for line in partition {
                let Some(commodity) = catalog.lookup(line.commodity) else {
                    continue;
                };
                number += 1;
                let _ = writeln!(out, "{}.", number);
                out.push_str(&commodity.describe_with_quantity(line.quantity));
            }
        }
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commodity::{AudioSpec, LaptopSpec};

    fn audio(name: &str, price: i64) -> Commodity {
        Commodity::audio(name, Money::from_units(price), "audio", AudioSpec::default())
    }

    fn laptop(name: &str, price: i64) -> Commodity {
        Commodity::laptop(name, Money::from_units(price), "laptop", LaptopSpec::default())
    }

    fn shopping(catalog: &Catalog) -> ShoppingCart {
        let mut cart = ShoppingCart::new();
        cart.reset(catalog.capacities());
        cart
    }

    #[test]
    fn test_same_commodity_twice_merges_into_one_line() {
        let mut catalog = Catalog::new();
        let x = catalog.add(audio("X", 100));
        let mut cart = shopping(&catalog);

        assert_eq!(cart.add_or_increment(&catalog, x).unwrap(), 1);
        assert_eq!(cart.add_or_increment(&catalog, x).unwrap(), 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_quantity(), 2);
        assert_eq!(cart.total(&catalog), Money::from_units(200));
    }

    #[test]
    fn test_total_sums_price_times_quantity() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 30));
        let l = catalog.add(laptop("L", 1000));
        let mut cart = shopping(&catalog);

        cart.add_or_increment(&catalog, l).unwrap();
        cart.add_or_increment(&catalog, a).unwrap();
        cart.add_or_increment(&catalog, a).unwrap();
        cart.add_or_increment(&catalog, a).unwrap();

        assert_eq!(cart.total(&catalog), Money::from_units(1090));
        let names: Vec<&str> = cart.lines(&catalog).map(|(c, _)| c.name()).collect();
        assert_eq!(names, ["A", "L"]);
    }

    #[test]
    fn test_removing_every_line_zeroes_total() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 30));
        let l = catalog.add(laptop("L", 1000));
        let mut cart = shopping(&catalog);
        cart.add_or_increment(&catalog, a).unwrap();
        cart.add_or_increment(&catalog, l).unwrap();

        let removed = cart.remove_line(1).unwrap();
        assert_eq!(removed.commodity, l);
        cart.remove_line(0).unwrap();

        assert!(cart.is_empty());
        assert!(cart.total(&catalog).is_zero());
    }

    #[test]
    fn test_remove_line_out_of_range() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 30));
        let mut cart = shopping(&catalog);
        cart.add_or_increment(&catalog, a).unwrap();

        assert_eq!(
            cart.remove_line(1).unwrap_err(),
            CoreError::IndexOutOfRange { index: 1, len: 1 }
        );
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_reset_clears_lines() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 30));
        let mut cart = shopping(&catalog);
        cart.add_or_increment(&catalog, a).unwrap();

        cart.reset(catalog.capacities());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_cap() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 1));
        let mut cart = shopping(&catalog);
        for _ in 0..MAX_LINE_QUANTITY {
            cart.add_or_increment(&catalog, a).unwrap();
        }

        let err = cart.add_or_increment(&catalog, a).unwrap_err();
        assert!(matches!(err, CoreError::QuantityTooLarge { max: 999, .. }));
        assert_eq!(cart.total_quantity(), MAX_LINE_QUANTITY);
    }

    #[test]
    fn test_prune_after_catalog_delete() {
        let mut catalog = Catalog::new();
        let a = catalog.add(audio("A", 30));
        let b = catalog.add(audio("B", 40));
        let mut cart = shopping(&catalog);
        cart.add_or_increment(&catalog, a).unwrap();
        cart.add_or_increment(&catalog, b).unwrap();

        catalog.remove(0).unwrap();
        assert_eq!(cart.prune_missing(&catalog), 1);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(&catalog), Money::from_units(40));

        assert_eq!(
            cart.add_or_increment(&catalog, a).unwrap_err(),
            CoreError::CommodityNotFound(a)
        );
    }

    #[test]
    fn test_render_shows_quantities() {
        let mut catalog = Catalog::new();
        let x = catalog.add(audio("X", 100));
        let mut cart = shopping(&catalog);
        cart.add_or_increment(&catalog, x).unwrap();
        cart.add_or_increment(&catalog, x).unwrap();

        let text = cart.render(&catalog);
        assert!(text.starts_with("Audio:\n1.\n* X *\n"));
        assert!(text.contains("× 2\n"));
        assert_eq!(text.matches("* X *").count(), 1);
    }
}
