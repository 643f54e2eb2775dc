//! # Demo Catalog Seeder
//!
//! Writes a small catalog so the console has something to sell.
//!
//! ## Usage
//! ```bash
//! # Seed the current directory
//! cargo run -p emporium-store --bin seed
//!
//! # Seed another directory
//! cargo run -p emporium-store --bin seed -- --data-dir ./data
//!
//! # Replace an existing catalog
//! cargo run -p emporium-store --bin seed -- --force
//! ```

use std::env;

use emporium_core::{
    AudioSpec, Catalog, Commodity, LaptopSpec, Money, SmartphoneSpec,
};
use emporium_store::{CatalogStore, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut data_dir = String::from(".");
    let mut force = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--data-dir" | "-d" => {
                if i + 1 < args.len() {
                    data_dir = args[i + 1].clone();
                    i += 1;
                }
            }
            "--force" | "-f" => force = true,
            "--help" | "-h" => {
                println!("Emporium Demo Catalog Seeder");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --data-dir <PATH>  Directory for the catalog files (default: .)");
                println!("  -f, --force            Overwrite an existing catalog");
                println!("  -h, --help             Show this help message");
                return Ok(());
            }
            other => {
                eprintln!("Ignoring unknown argument: {}", other);
            }
        }
        i += 1;
    }

    println!("Emporium Demo Catalog Seeder");
    println!("============================");
    println!("Data directory: {}", data_dir);
    println!();

    let store = CatalogStore::open(StoreConfig::new(&data_dir))?;

    let existing = store.load_catalog();
    if !existing.is_empty() && !force {
        println!("⚠ Data directory already has {} commodities", existing.len());
        println!("  Skipping seed to avoid overwriting them.");
        println!("  Run again with --force to replace the catalog.");
        return Ok(());
    }

    let catalog = demo_catalog();
    let summary = store.persist_catalog(&catalog)?;

    println!("✓ Audio:      {} commodities", summary.written[0]);
    println!("✓ Smartphone: {} commodities", summary.written[1]);
    println!("✓ Laptop:     {} commodities", summary.written[2]);
    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// The demo catalog.
fn demo_catalog() -> Catalog {
    Catalog::from_commodities([
        Commodity::audio(
            "Studio Monitor Headphones",
            Money::from_units(149),
            "Closed-back headphones for tracking and mixing",
            AudioSpec {
                low_freq_hz: 15,
                high_freq_khz: 28,
                sensitivity_db: 99,
                impedance_ohm: 38,
            },
        ),
        Commodity::audio(
            "Open-back Reference",
            Money::from_units(399),
            "Wide soundstage for critical listening",
            AudioSpec {
                low_freq_hz: 12,
                high_freq_khz: 39,
                sensitivity_db: 97,
                impedance_ohm: 300,
            },
        ),
        Commodity::audio(
            "Wireless Earbuds",
            Money::from_units(99),
            "Noise cancelling with charging case",
            AudioSpec {
                low_freq_hz: 20,
                high_freq_khz: 20,
                sensitivity_db: 105,
                impedance_ohm: 16,
            },
        ),
        Commodity::smartphone(
            "Aurora 15",
            Money::from_units(899),
            "Flagship phone with a triple camera",
            SmartphoneSpec {
                screen_inch: 6,
                cellular: "5G, Wi-Fi 7, Bluetooth 5.3".to_string(),
                camera_px: 48_000_000,
                chip: "A17".to_string(),
                weight_g: 187,
                video_playback_hours: 26,
            },
        ),
        Commodity::smartphone(
            "Nimbus Lite",
            Money::from_units(349),
            "Everyday phone with a two day battery",
            SmartphoneSpec {
                screen_inch: 6,
                cellular: "5G, Wi-Fi 6".to_string(),
                camera_px: 50_000_000,
                chip: "Dimensity 7200".to_string(),
                weight_g: 175,
                video_playback_hours: 30,
            },
        ),
        Commodity::laptop(
            "Forge 16",
            Money::from_units(2199),
            "Gaming laptop with a 240 Hz panel",
            LaptopSpec {
                screen_inch: 16,
                os: "Windows 11".to_string(),
                cpu: "Core i9-14900HX".to_string(),
                gpu: "RTX 4080".to_string(),
                max_memory_gb: 64,
                disk_gb: 2048,
                has_rgb: true,
            },
        ),
        Commodity::laptop(
            "Slate 13",
            Money::from_units(1099),
            "Fanless ultraportable",
            LaptopSpec {
                screen_inch: 13,
                os: "Linux".to_string(),
                cpu: "Ryzen 7 7840U".to_string(),
                gpu: "Radeon 780M".to_string(),
                max_memory_gb: 32,
                disk_gb: 1024,
                has_rgb: false,
            },
        ),
    ])
}
