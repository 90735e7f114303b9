use super::inventory_models::StockMap;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Where an [`Inventory`](super::Inventory) is loaded from and saved to.
///
/// The core never touches the filesystem itself; the infra layer decides the
/// on-disk format.
pub trait StockFile {
    /// Path shown in log messages.
    fn location(&self) -> &Path;

    /// Read the whole stock table.
    /// Returns `Ok(None)` only when there is nothing to read yet (file missing).
    fn read(&self) -> Result<Option<StockMap>, StoreError>;

    /// Replace whatever was stored with `stock`.
    fn write(&self, stock: &StockMap) -> Result<(), StoreError>;
}
