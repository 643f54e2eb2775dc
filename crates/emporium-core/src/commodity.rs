//! # Commodity Types
//!
//! The three kinds of commodity the store sells, and how each one describes
//! itself.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Commodity                                       │
//! │                                                                         │
//! │   name (identity key) • price (Money) • description                      │
//! │                              │                                          │
//! │            ┌─────────────────┼──────────────────┐                       │
//! │            ▼                 ▼                  ▼                       │
//! │  ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐           │
//! │  │   AudioSpec     │ │ SmartphoneSpec  │ │   LaptopSpec    │           │
//! │  │  ─────────────  │ │  ─────────────  │ │  ─────────────  │           │
//! │  │  low freq  Hz   │ │  screen  inch   │ │  screen  inch   │           │
//! │  │  high freq kHz  │ │  cellular       │ │  os / cpu / gpu │           │
//! │  │  sensitivity dB │ │  camera  pixel  │ │  memory  GB     │           │
//! │  │  impedance Ohm  │ │  chip           │ │  disk    GB     │           │
//! │  │                 │ │  weight  grams  │ │  RGB light      │           │
//! │  │                 │ │  video   hours  │ │                 │           │
//! │  └─────────────────┘ └─────────────────┘ └─────────────────┘           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Two commodities with the same name are the same logical product. The
//! catalog and the cart compare names, never addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;
use crate::DESCRIPTION_RULE;

// =============================================================================
// Variant
// =============================================================================

/// Which partition of the catalog a commodity lives in.
///
/// The declaration order is also the display and flattened-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Headphones, speakers, monitors.
    Audio,
    /// Phones.
    Smartphone,
    /// Portable computers.
    Laptop,
}

impl Variant {
    /// Every variant, in partition order.
    pub const ALL: [Variant; 3] = [Variant::Audio, Variant::Smartphone, Variant::Laptop];

    /// Position of this variant's partition.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Variant::Audio => 0,
            Variant::Smartphone => 1,
            Variant::Laptop => 2,
        }
    }

    /// Inverse of [`Variant::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Header printed above the partition in listings.
    pub const fn label(self) -> &'static str {
        match self {
            Variant::Audio => "Audio",
            Variant::Smartphone => "Smartphone",
            Variant::Laptop => "Laptop",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Variant Specs
// =============================================================================

/// Audio device specifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AudioSpec {
    /// Lowest frequency response in Hz.
    pub low_freq_hz: u32,
    /// Highest frequency response in kHz.
    pub high_freq_khz: u32,
    /// Sensitivity in dB.
    pub sensitivity_db: u32,
    /// Impedance in Ohm.
    pub impedance_ohm: u32,
}

/// Smartphone specifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SmartphoneSpec {
    /// Screen diagonal in inches.
    pub screen_inch: u32,
    /// Free-text cellular and wireless capabilities.
    pub cellular: String,
    /// Camera resolution in pixels.
    pub camera_px: u32,
    /// System-on-chip name.
    pub chip: String,
    /// Weight in grams.
    pub weight_g: u32,
    /// Video playback time in hours.
    pub video_playback_hours: u32,
}

/// Laptop specifications.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LaptopSpec {
    /// Screen diagonal in inches.
    pub screen_inch: u32,
    /// Operating system.
    pub os: String,
    /// Processor.
    pub cpu: String,
    /// Graphics.
    pub gpu: String,
    /// Maximum memory in GB.
    pub max_memory_gb: u32,
    /// Disk size in GB.
    pub disk_gb: u32,
    /// Whether the keyboard has RGB lighting.
    pub has_rgb: bool,
}

/// The variant-specific half of a commodity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Specs {
    Audio(AudioSpec),
    Smartphone(SmartphoneSpec),
    Laptop(LaptopSpec),
}

impl Specs {
    /// The partition these specs belong to.
    pub const fn variant(&self) -> Variant {
        match self {
            Specs::Audio(_) => Variant::Audio,
            Specs::Smartphone(_) => Variant::Smartphone,
            Specs::Laptop(_) => Variant::Laptop,
        }
    }
}

impl From<AudioSpec> for Specs {
    fn from(spec: AudioSpec) -> Self {
        Specs::Audio(spec)
    }
}

impl From<SmartphoneSpec> for Specs {
    fn from(spec: SmartphoneSpec) -> Self {
        Specs::Smartphone(spec)
    }
}

impl From<LaptopSpec> for Specs {
    fn from(spec: LaptopSpec) -> Self {
        Specs::Laptop(spec)
    }
}

// =============================================================================
// Commodity
// =============================================================================

/// A product the store can list, sell and persist.
///
/// ## Ownership
/// The [`Catalog`](crate::catalog::Catalog) owns every commodity for as long
/// as it is on sale. The cart only holds handles into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commodity {
    name: String,
    price: Money,
    description: String,
    specs: Specs,
}

impl Commodity {
    /// Creates a commodity of whichever variant `specs` selects.
    pub fn new(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        specs: impl Into<Specs>,
    ) -> Self {
        Commodity {
            name: name.into(),
            price,
            description: description.into(),
            specs: specs.into(),
        }
    }

    /// Creates an audio commodity.
    pub fn audio(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        spec: AudioSpec,
    ) -> Self {
        Commodity::new(name, price, description, spec)
    }

    /// Creates a smartphone commodity.
    pub fn smartphone(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        spec: SmartphoneSpec,
    ) -> Self {
        Commodity::new(name, price, description, spec)
    }

    /// Creates a laptop commodity.
    pub fn laptop(
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
        spec: LaptopSpec,
    ) -> Self {
        Commodity::new(name, price, description, spec)
    }

    /// The identity key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Variant-specific fields.
    pub fn specs(&self) -> &Specs {
        &self.specs
    }

    /// Which catalog partition this commodity belongs to.
    pub fn variant(&self) -> Variant {
        self.specs.variant()
    }

    /// True when both commodities denote the same logical product.
    pub fn same_product(&self, other: &Commodity) -> bool {
        self.name == other.name
    }

    /// Full multi-line description, ending with a separator rule.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Full description with an extra `× quantity` line before the rule.
    pub fn describe_with_quantity(&self, quantity: u32) -> String {
        QuantityDescription {
            commodity: self,
            quantity,
        }
        .to_string()
    }

    fn write_description(&self, f: &mut fmt::Formatter<'_>, quantity: Option<u32>) -> fmt::Result {
        writeln!(f, "* {} *", self.name)?;
        writeln!(f, "price: {} dollars", self.price)?;

        match &self.specs {
            Specs::Audio(spec) => {
                writeln!(f, "Lowest Frequency Response: {} Hz", spec.low_freq_hz)?;
                writeln!(f, "Highest Frequency Response: {} kHz", spec.high_freq_khz)?;
                writeln!(f, "Sensitivity: {} dB", spec.sensitivity_db)?;
                writeln!(f, "Impedance: {} Ohm", spec.impedance_ohm)?;
            }
            Specs::Smartphone(spec) => {
                writeln!(f, "Screen Size: {} inch", spec.screen_inch)?;
                writeln!(f, "Cellular and Wireless: {}", spec.cellular)?;
                writeln!(f, "Camera: {} pixel", spec.camera_px)?;
                writeln!(f, "Chip: {}", spec.chip)?;
                writeln!(f, "Weight: {} grams", spec.weight_g)?;
                writeln!(f, "Video playback time: {} hours", spec.video_playback_hours)?;
            }
            Specs::Laptop(spec) => {
                writeln!(f, "Screen Size: {} inch", spec.screen_inch)?;
                writeln!(f, "Operating System: {}", spec.os)?;
                writeln!(f, "CPU: {}", spec.cpu)?;
                writeln!(f, "GPU: {}", spec.gpu)?;
                writeln!(f, "Max Memory Size: {} GB", spec.max_memory_gb)?;
                writeln!(f, "Disk Size: {} GB", spec.disk_gb)?;
                writeln!(
                    f,
                    "RGB light: {}",
                    if spec.has_rgb { "yes" } else { "no" }
                )?;
            }
        }

        writeln!(f, "description: {}", self.description)?;
        if let Some(quantity) = quantity {
            writeln!(f, "× {}", quantity)?;
        }
        writeln!(f, "{}", DESCRIPTION_RULE)
    }
}

impl fmt::Display for Commodity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_description(f, None)
    }
}

struct QuantityDescription<'a> {
    commodity: &'a Commodity,
    quantity: u32,
}

impl fmt::Display for QuantityDescription<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.commodity.write_description(f, Some(self.quantity))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
