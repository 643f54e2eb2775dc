//! # Checkout Receipts
//!
//! A receipt freezes what was bought at the moment checkout was confirmed.
//!
//! ## Snapshot Pattern
//! The cart only holds handles, and a manager may delete or re-add a
//! commodity later. A receipt therefore copies the name, variant and unit
//! price of every line so the journal stays readable on its own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

use crate::cart::ShoppingCart;
use crate::catalog::Catalog;
use crate::commodity::Variant;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Width of the closing rule under a printed receipt.
const RECEIPT_RULE: &str = "------------------------------";

/// One purchased line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    /// Commodity name at checkout (frozen).
    pub name: String,
    pub variant: Variant,
    /// Unit price at checkout (frozen).
    pub unit_price: Money,
    pub quantity: u32,
    /// unit_price × quantity.
    pub line_total: Money,
}

/// A confirmed checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// UUID v4.
    pub id: Uuid,
    pub issued_at: DateTime<Utc>,
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    /// Snapshots the cart into a receipt stamped with the current time.
    ///
    /// ## Returns
    /// - `Err(EmptyCart)` if there is nothing to buy
    pub fn from_cart(cart: &ShoppingCart, catalog: &Catalog) -> CoreResult<Self> {
        Self::from_cart_at(cart, catalog, Utc::now())
    }

    /// Same as [`Receipt::from_cart`] with an explicit timestamp.
    pub fn from_cart_at(
        cart: &ShoppingCart,
        catalog: &Catalog,
        issued_at: DateTime<Utc>,
    ) -> CoreResult<Self> {
        let lines: Vec<ReceiptLine> = cart
            .lines(catalog)
            .map(|(commodity, quantity)| ReceiptLine {
                name: commodity.name().to_string(),
                variant: commodity.variant(),
                unit_price: commodity.price(),
                quantity,
                line_total: commodity.price() * quantity,
            })
            .collect();

        if lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let total = lines.iter().map(|line| line.line_total).sum();

        Ok(Receipt {
            id: Uuid::new_v4(),
            issued_at,
            lines,
            total,
        })
    }

    /// Total number of units bought.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Console rendering shown after a confirmed checkout.
    pub fn render(&self, store_name: &str) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{} receipt {}", store_name, self.id);
        let _ = writeln!(out, "{}", self.issued_at.format("%Y-%m-%d %H:%M:%S UTC"));
        for line in &self.lines {
            let _ = writeln!(
                out,
                "{} ({}) {} × {} = {}",
                line.name, line.variant, line.unit_price, line.quantity, line.line_total
            );
        }
        let _ = writeln!(out, "Total Amount: {}", self.total);
        let _ = writeln!(out, "Thank you for your coming!");
        let _ = writeln!(out, "{}", RECEIPT_RULE);
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commodity::{AudioSpec, Commodity, SmartphoneSpec};
    use chrono::TimeZone;

    fn stocked() -> (Catalog, ShoppingCart) {
        let mut catalog = Catalog::new();
        let x = catalog.add(Commodity::audio(
            "X",
            Money::from_units(100),
            "",
            AudioSpec::default(),
        ));
        let p = catalog.add(Commodity::smartphone(
            "P",
            Money::from_units(700),
            "",
            SmartphoneSpec::default(),
        ));
        let mut cart = ShoppingCart::new();
        cart.reset(catalog.capacities());
        cart.add_or_increment(&catalog, x).unwrap();
        cart.add_or_increment(&catalog, x).unwrap();
        cart.add_or_increment(&catalog, p).unwrap();
        (catalog, cart)
    }

    #[test]
    fn test_receipt_snapshots_lines_and_total() {
        let (catalog, cart) = stocked();
        let receipt = Receipt::from_cart(&cart, &catalog).unwrap();

        assert_eq!(receipt.lines.len(), 2);
        assert_eq!(receipt.lines[0].name, "X");
        assert_eq!(receipt.lines[0].quantity, 2);
        assert_eq!(receipt.lines[0].line_total, Money::from_units(200));
        assert_eq!(receipt.lines[1].variant, Variant::Smartphone);
        assert_eq!(receipt.total, Money::from_units(900));
        assert_eq!(receipt.total, cart.total(&catalog));
        assert_eq!(receipt.item_count(), 3);
        assert_eq!(receipt.id.get_version_num(), 4);
    }

    #[test]
    fn test_empty_cart_has_no_receipt() {
        let catalog = Catalog::new();
        let cart = ShoppingCart::new();
        assert_eq!(
            Receipt::from_cart(&cart, &catalog).unwrap_err(),
            CoreError::EmptyCart
        );
    }

    #[test]
    fn test_render() {
        let (catalog, cart) = stocked();
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let receipt = Receipt::from_cart_at(&cart, &catalog, at).unwrap();

        let text = receipt.render("Emporium");
        assert!(text.starts_with(&format!("Emporium receipt {}\n", receipt.id)));
        assert!(text.contains("2024-03-01 12:30:00 UTC\n"));
        assert!(text.contains("X (Audio) 100 × 2 = 200\n"));
        assert!(text.contains("Total Amount: 900\nThank you for your coming!\n"));
    }

    #[test]
    fn test_serializes_money_as_plain_numbers() {
        let (catalog, cart) = stocked();
        let receipt = Receipt::from_cart(&cart, &catalog).unwrap();

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["total"], 900);
        assert_eq!(json["lines"][1]["variant"], "smartphone");

        assert_eq!(json["id"], receipt.id.to_string());

        let back: Receipt = serde_json::from_value(json).unwrap();
        assert_eq!(back, receipt);
    }
}
