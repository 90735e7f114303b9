pub mod json_store;

pub use json_store::{JsonStockFile, DEFAULT_INVENTORY_FILE};
