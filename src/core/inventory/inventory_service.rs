// The inventory store: a single ordered table of item quantities.
//
// Nothing in here knows about JSON files or the console. Persistence goes
// through the `StockFile` port and reporting hands back plain lines, so the
// entry point (or a test) decides where they end up.

use super::inventory_models::{RemoveOutcome, StockMap, DEFAULT_ITEM_NAME};
use super::inventory_store::{StockFile, StoreError};
use chrono::Local;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("Invalid input types for add: {item}, {quantity}")]
    InvalidInput { item: String, quantity: String },

    #[error("Attempted to remove non-existent item: {0}")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

// ============================================================================
// CORE STORE
// ============================================================================

/// In-memory stock table.
///
/// Quantities are signed: `add` never refuses a negative amount, so an item can
/// sit at zero or below until someone removes from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    stock: StockMap,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `quantity` of `item`, creating the entry at 0 first if needed.
    /// Returns the new quantity.
    ///
    /// When a log sink is given, a timestamped audit line is pushed onto it.
    pub fn add(&mut self, item: &str, quantity: i64, log_sink: Option<&mut Vec<String>>) -> i64 {
        let entry = self.stock.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(quantity);
        let new_quantity = *entry;

        if let Some(sink) = log_sink {
            let now = Local::now().format("%Y-%m-%d %H:%M:%S%.6f");
            sink.push(format!("{now}: Added {quantity} of {item}"));
        }
        tracing::info!(item, quantity, "Added {} of {}", quantity, item);

        new_quantity
    }

    /// Type-checked `add` for dynamically typed input.
    ///
    /// `item` has to be a JSON string and `quantity` a JSON integer. Anything
    /// else is rejected without touching the table.
    pub fn add_untyped(
        &mut self,
        item: &Value,
        quantity: &Value,
        log_sink: Option<&mut Vec<String>>,
    ) -> Result<i64, InventoryError> {
        match (item.as_str(), quantity.as_i64()) {
            (Some(item), Some(quantity)) => Ok(self.add(item, quantity, log_sink)),
            _ => {
                let item = render_value(item);
                let quantity = render_value(quantity);
                tracing::warn!("Invalid input types for add: {}, {}", item, quantity);
                Err(InventoryError::InvalidInput { item, quantity })
            }
        }
    }

    #[allow(dead_code)]
    /// `add` with no arguments: registers the `"default"` item at +0.
    pub fn add_default(&mut self) -> i64 {
        self.add(DEFAULT_ITEM_NAME, 0, None)
    }

    /// Take `quantity` of `item` out of stock.
    ///
    /// The decrement is unconditional. If the result is zero or below the
    /// entry is dropped; the other entries keep their order.
    pub fn remove(&mut self, item: &str, quantity: i64) -> Result<RemoveOutcome, InventoryError> {
        let Some(current) = self.stock.get_mut(item) else {
            tracing::warn!(item, "Attempted to remove non-existent item: {}", item);
            return Err(InventoryError::NotFound(item.to_string()));
        };

        *current = current.saturating_sub(quantity);
        if *current > 0 {
            return Ok(RemoveOutcome::Remaining(*current));
        }

        self.stock.shift_remove(item);
        tracing::info!(item, "Removed {} from stock", item);
        Ok(RemoveOutcome::Removed)
    }

    /// Stored quantity of `item`, 0 when it isn't tracked.
    pub fn quantity(&self, item: &str) -> i64 {
        self.stock.get(item).copied().unwrap_or(0)
    }

    #[allow(dead_code)]
    pub fn contains(&self, item: &str) -> bool {
        self.stock.contains_key(item)
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.stock.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.stock.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.stock.iter().map(|(item, qty)| (item.as_str(), *qty))
    }

    /// Names of items whose quantity is strictly below `threshold`.
    pub fn low_stock_items(&self, threshold: i64) -> Vec<String> {
        self.stock
            .iter()
            .filter(|(_, qty)| **qty < threshold)
            .map(|(item, _)| item.clone())
            .collect()
    }

    /// Replace the whole table with what `file` holds.
    ///
    /// A missing file is not an error: the table is cleared and a warning is
    /// logged. Any other failure leaves the table as it was.
    pub fn load(&mut self, file: &impl StockFile) -> Result<(), InventoryError> {
        match file.read()? {
            Some(stock) => {
                tracing::debug!(path = %file.location().display(), items = stock.len(), "Loaded stock");
                self.stock = stock;
            }
            None => {
                tracing::warn!(
                    "File not found: {}. Starting with empty stock.",
                    file.location().display()
                );
                self.stock.clear();
            }
        }
        Ok(())
    }

    /// Write the whole table to `file`, overwriting it.
    pub fn save(&self, file: &impl StockFile) -> Result<(), InventoryError> {
        file.write(&self.stock)?;
        tracing::debug!(path = %file.location().display(), items = self.stock.len(), "Saved stock");
        Ok(())
    }

    /// Header line followed by one `<item> -> <quantity>` line per entry.
    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.stock.len() + 1);
        lines.push("Items Report".to_string());
        lines.extend(self.iter().map(|(item, qty)| format!("{item} -> {qty}")));
        lines
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.report().join("\n"))
    }
}

impl From<StockMap> for Inventory {
    fn from(stock: StockMap) -> Self {
        Self { stock }
    }
}

/// Strings print bare, everything else as JSON.
fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
