pub mod inventory_models;
pub mod inventory_service;
pub mod inventory_store;

pub use inventory_models::{RemoveOutcome, StockMap, DEFAULT_LOW_STOCK_THRESHOLD};
pub use inventory_service::{Inventory, InventoryError};
pub use inventory_store::{StockFile, StoreError};
