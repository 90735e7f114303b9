// Runtime settings, read from the environment (and a `.env` file if present).

use crate::core::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use crate::infra::inventory::DEFAULT_INVENTORY_FILE;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the demo run saves and reloads the stock table.
    pub inventory_file: PathBuf,
    /// Items below this quantity are reported as low.
    pub low_stock_threshold: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from(DEFAULT_INVENTORY_FILE),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Build the config from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset keys use the defaults;
    /// unparseable ones are logged and fall back too.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let inventory_file = lookup("INVENTORY_FILE")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.inventory_file);

        let low_stock_threshold = match lookup("LOW_STOCK_THRESHOLD") {
            Some(raw) => raw.trim().parse::<i64>().unwrap_or_else(|e| {
                tracing::warn!(
                    "Invalid LOW_STOCK_THRESHOLD {:?} ({}), using {}",
                    raw,
                    e,
                    defaults.low_stock_threshold
                );
                defaults.low_stock_threshold
            }),
            None => defaults.low_stock_threshold,
        };

        Self {
            inventory_file,
            low_stock_threshold,
        }
    }
}
