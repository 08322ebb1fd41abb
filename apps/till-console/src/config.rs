//! # Till Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TILL_REGISTER_NAME="Register 2"                                    │
//! │     TILL_JOURNAL_PATH=/var/lib/till/journal.jsonl                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, else $TILL_CONFIG, else                           │
//! │     ~/.config/till/till.toml (Linux)                                   │
//! │     ~/Library/Application Support/com.till.register/till.toml (macOS)  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     Demo catalog, standard best-before schedule, no journal file       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [register]
//! name = "Register 1"
//! journal_path = "journal.jsonl"
//!
//! [pricing]
//! expired_percent = 0
//! tiers = [
//!     { min_days_remaining = 2, percent = 100 },
//!     { min_days_remaining = 1, percent = 65 },
//!     { min_days_remaining = 0, percent = 35 },
//! ]
//!
//! [[products]]
//! barcode = 9234
//! code = "banana"
//! description = "Bananas Fyffes"
//! price = 150
//! perishable = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use till_core::validation::validate_catalog;
use till_core::{Barcode, DiscountSchedule, Money, Product};
use tracing::{debug, info};

use crate::error::AppResult;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "TILL_CONFIG";

// =============================================================================
// Register Settings
// =============================================================================

/// Settings for this register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterSettings {
    /// Human-readable register name, stamped on journal entries.
    #[serde(default = "default_register_name")]
    pub name: String,

    /// Where sold records are appended as JSON lines.
    /// Without it, sold records are only logged.
    #[serde(default)]
    pub journal_path: Option<PathBuf>,
}

fn default_register_name() -> String {
    "Register 1".to_string()
}

impl Default for RegisterSettings {
    fn default() -> Self {
        RegisterSettings {
            name: default_register_name(),
            journal_path: None,
        }
    }
}

// =============================================================================
// Full Configuration
// =============================================================================

/// Complete console configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TillConfig {
    #[serde(default)]
    pub register: RegisterSettings,

    #[serde(default)]
    pub pricing: DiscountSchedule,

    #[serde(default = "demo_products")]
    pub products: Vec<Product>,
}

impl Default for TillConfig {
    fn default() -> Self {
        TillConfig {
            register: RegisterSettings::default(),
            pricing: DiscountSchedule::default(),
            products: demo_products(),
        }
    }
}

/// Catalog used when the config file lists no products.
fn demo_products() -> Vec<Product> {
    vec![
        Product::new("led lamp", "Led Lamp", Money::from_cents(250), Barcode::new(1_234), false),
        Product::new("banana", "Bananas Fyffes", Money::from_cents(150), Barcode::new(9_234), true),
        Product::new("cheese", "Gouda 48+", Money::from_cents(800), Barcode::new(7_687), true),
    ]
}

impl TillConfig {
    /// Loads configuration with the priority described in the module docs.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading till config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML document; missing sections take their defaults.
    pub fn from_toml(contents: &str) -> AppResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Applies `TILL_*` overrides, reading variables through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("TILL_REGISTER_NAME") {
            debug!(name = %name, "Overriding register name from environment");
            self.register.name = name;
        }

        if let Some(path) = lookup("TILL_JOURNAL_PATH") {
            debug!(path = %path, "Overriding journal path from environment");
            self.register.journal_path = Some(PathBuf::from(path));
        }
    }

    /// Validates the pricing schedule and the catalog.
    pub fn validate(&self) -> AppResult<()> {
        self.pricing.validate()?;
        validate_catalog(&self.products)?;
        Ok(())
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "till", "register")
            .map(|dirs| dirs.config_dir().join("till.toml"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = TillConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.products.len(), 3);
        assert_eq!(config.register.name, "Register 1");
        assert_eq!(config.pricing, DiscountSchedule::default());
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = TillConfig::from_toml("").unwrap();
        assert_eq!(config, TillConfig::default());
    }

    #[test]
    fn test_parse_full_toml() {
        let config = TillConfig::from_toml(
            r#"
            [register]
            name = "Express Lane"
            journal_path = "journal.jsonl"

            [pricing]
            expired_percent = 10
            tiers = [
                { min_days_remaining = 3, percent = 100 },
                { min_days_remaining = 0, percent = 50 },
            ]

            [[products]]
            barcode = 42
            code = "milk"
            description = "Whole Milk 1L"
            price = 119
            perishable = true

            [[products]]
            barcode = 43
            code = "soap"
            description = "Hand Soap"
            price = 299
            "#,
        )
        .unwrap();

        assert_eq!(config.register.name, "Express Lane");
        assert_eq!(config.register.journal_path, Some(PathBuf::from("journal.jsonl")));
        assert_eq!(config.pricing.expired_percent, 10);
        assert_eq!(config.pricing.percent_for(1), 50);
        assert_eq!(config.products.len(), 2);
        assert!(config.products[0].perishable);
        assert!(!config.products[1].perishable);
        assert_eq!(config.products[1].price, Money::from_cents(299));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = TillConfig::from_toml("[register\nname = 1").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_rejects_duplicate_barcodes() {
        let config = TillConfig::from_toml(
            r#"
            [[products]]
            barcode = 1
            code = "a"
            description = "A"
            price = 1

            [[products]]
            barcode = 1
            code = "b"
            description = "B"
            price = 2
            "#,
        )
        .unwrap();

        assert!(matches!(config.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_apply_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("TILL_REGISTER_NAME", "Register 7"),
            ("TILL_JOURNAL_PATH", "/tmp/till.jsonl"),
        ]);
        let mut config = TillConfig::default();

        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.register.name, "Register 7");
        assert_eq!(
            config.register.journal_path,
            Some(PathBuf::from("/tmp/till.jsonl"))
        );
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [[products]]
            barcode = 5
            code = "bread"
            description = "Sourdough"
            price = 350
            perishable = true
            "#
        )
        .unwrap();

        let config = TillConfig::load(Some(file.path().to_path_buf())).unwrap();

        assert_eq!(config.products.len(), 1);
        assert_eq!(config.products[0].description, "Sourdough");
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = TillConfig::load(Some(dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config.products, TillConfig::default().products);
    }
}
