//! # Console Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`EMPORIUM_*`)
//! 2. Defaults (this file)

use std::path::PathBuf;

use emporium_store::StoreConfig;
use tracing::warn;

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Directory holding the catalog files and the receipt journal.
    pub data_dir: PathBuf,

    /// Store name (banner and receipts).
    pub store_name: String,

    /// Append confirmed checkouts to the journal.
    pub journal_enabled: bool,
}

impl Default for ConsoleConfig {
    /// ## Default Values
    /// - Data directory: the current directory
    /// - Store: "Emporium"
    /// - Journal: enabled
    fn default() -> Self {
        ConsoleConfig {
            data_dir: PathBuf::from("."),
            store_name: "Emporium".to_string(),
            journal_enabled: true,
        }
    }
}

impl ConsoleConfig {
    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `EMPORIUM_DATA_DIR`: catalog and journal directory
    /// - `EMPORIUM_STORE_NAME`: store name
    /// - `EMPORIUM_JOURNAL`: `true`/`false` (also `1`/`0`, `yes`/`no`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ConsoleConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConsoleConfig::default();

        if let Some(dir) = lookup("EMPORIUM_DATA_DIR").filter(|d| !d.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(name) = lookup("EMPORIUM_STORE_NAME").filter(|n| !n.trim().is_empty()) {
            config.store_name = name;
        }

        if let Some(raw) = lookup("EMPORIUM_JOURNAL") {
            match parse_flag(&raw) {
                Some(enabled) => config.journal_enabled = enabled,
                None => warn!(value = %raw, "Ignoring unrecognised EMPORIUM_JOURNAL value"),
            }
        }

        config
    }

    /// Storage settings derived from this configuration.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(&self.data_dir).journal(self.journal_enabled)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ConsoleConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(config.data_dir, PathBuf::from("."));
        assert!(config.journal_enabled);
    }

    #[test]
    fn test_env_overrides() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("EMPORIUM_DATA_DIR", "/srv/store"),
            ("EMPORIUM_STORE_NAME", "Corner Shop"),
            ("EMPORIUM_JOURNAL", "off"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/store"));
        assert_eq!(config.store_name, "Corner Shop");
        assert!(!config.journal_enabled);

        let store = config.store_config();
        assert_eq!(store.data_dir, PathBuf::from("/srv/store"));
        assert!(!store.journal_enabled);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = ConsoleConfig::from_lookup(lookup(&[
            ("EMPORIUM_DATA_DIR", "  "),
            ("EMPORIUM_JOURNAL", "maybe"),
        ]));
        assert_eq!(config, ConsoleConfig::default());
    }
}
