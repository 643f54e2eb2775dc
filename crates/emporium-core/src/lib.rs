//! # emporium-core: Pure Business Logic for Emporium
//!
//! This crate is the **heart** of the Emporium store simulator. It holds the
//! commodity model, the catalog, the shopping cart and the store state
//! machine as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Emporium Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console (apps/console)                       │   │
//! │  │    Menus ──► Operator capture ──► Cart review ──► Receipt      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Event                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ emporium-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │ commodity │  │  catalog  │  │   cart    │  │  session  │  │   │
//! │  │   │  Audio    │  │ 3 parts   │  │ CartLine  │  │ transition│  │   │
//! │  │   │  Phone    │  │ flat idx  │  │ quantity  │  │  notices  │  │   │
//! │  │   │  Laptop   │  │           │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CONSOLE • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               emporium-store (Flat-file Layer)                  │   │
//! │  │         partition files, record codec I/O, receipt journal      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`commodity`] - The three commodity variants and their display
//! - [`record`] - Per-variant flat text encoding
//! - [`catalog`] - Owning, partitioned commodity collection
//! - [`cart`] - Shopping cart of catalog handles and quantities
//! - [`money`] - Whole-unit money arithmetic
//! - [`receipt`] - Checkout receipts
//! - [`session`] - The store state machine
//! - [`validation`] - Console input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use emporium_core::{Catalog, Commodity, ShoppingCart, AudioSpec, Money};
//!
//! let mut catalog = Catalog::new();
//! let id = catalog.add(Commodity::audio(
//!     "Studio Monitor",
//!     Money::from_units(100),
//!     "Flat response",
//!     AudioSpec { low_freq_hz: 20, high_freq_khz: 20, sensitivity_db: 90, impedance_ohm: 32 },
//! ));
//!
//! let mut cart = ShoppingCart::new();
//! cart.reset(catalog.capacities());
//! cart.add_or_increment(&catalog, id).unwrap();
//! cart.add_or_increment(&catalog, id).unwrap();
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total(&catalog), Money::from_units(200));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod commodity;
pub mod error;
pub mod money;
pub mod receipt;
pub mod record;
pub mod session;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLine, ShoppingCart};
pub use catalog::{Catalog, CommodityId};
pub use commodity::{AudioSpec, Commodity, LaptopSpec, SmartphoneSpec, Variant};
pub use error::{CoreError, CoreResult, RecordError, ValidationError};
pub use money::Money;
pub use receipt::{Receipt, ReceiptLine};
pub use session::{transition, Event, Notice, Role, Session, StoreState, Transition};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of variant partitions in the catalog and the cart.
pub const PARTITION_COUNT: usize = 3;

/// Maximum quantity a single cart line may reach.
///
/// ## Business Reason
/// Guards against a stuck key turning one purchase into thousands.
pub const MAX_LINE_QUANTITY: u32 = 999;

/// Separator printed after every commodity description.
pub const DESCRIPTION_RULE: &str = "----------------------------";
