use crate::core::inventory::{StockFile, StockMap, StoreError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// File used when nothing else is configured.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// Stock table stored as a single JSON object: `{ "item": quantity, ... }`.
///
/// Keys are written in inventory order with four-space indentation. Writes
/// truncate the file in place, so a crash mid-write can leave it corrupt.
pub struct JsonStockFile {
    path: PathBuf,
}

impl JsonStockFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonStockFile {
    fn default() -> Self {
        Self::new(DEFAULT_INVENTORY_FILE)
    }
}

impl StockFile for JsonStockFile {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Option<StockMap>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let stock: StockMap = serde_json::from_str(&text)?;
        Ok(Some(stock))
    }

    fn write(&self, stock: &StockMap) -> Result<(), StoreError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        let mut ser =
            serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
        stock.serialize(&mut ser)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::inventory::{Inventory, InventoryError};
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_json_persistence_roundtrip() {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_owned();
        drop(tmp);

        let mut inventory = Inventory::new();
        inventory.add("zucchini", 3, None);
        inventory.add("apple", 10, None);
        inventory.add("banana", -2, None);
        inventory.save(&JsonStockFile::new(path.clone())).unwrap();

        // Reload from file
        let mut reloaded = Inventory::new();
        reloaded.load(&JsonStockFile::new(path)).unwrap();
        assert_eq!(reloaded, inventory);

        let order: Vec<(&str, i64)> = reloaded.iter().collect();
        assert_eq!(order, vec![("zucchini", 3), ("apple", 10), ("banana", -2)]);
    }

    #[test]
    fn test_write_uses_four_space_indent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let mut stock = StockMap::new();
        stock.insert("apple".to_string(), 7);
        stock.insert("banana".to_string(), -2);
        JsonStockFile::new(&path).write(&stock).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "{\n    \"apple\": 7,\n    \"banana\": -2\n}");
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{\"old\": 1, \"older\": 2, \"oldest\": 3}").unwrap();

        let file = JsonStockFile::new(&path);
        let inventory = Inventory::from(StockMap::from([("new".to_string(), 1)]));
        inventory.save(&file).unwrap();

        let stock = file.read().unwrap().unwrap();
        assert_eq!(stock.len(), 1);
        assert_eq!(stock.get("new"), Some(&1));
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let file = JsonStockFile::new(dir.path().join("absent.json"));
        assert!(file.read().unwrap().is_none());

        let mut inventory = Inventory::new();
        inventory.add("apple", 1, None);
        inventory.load(&file).unwrap();
        assert!(inventory.is_empty());
    }

    #[test]
    fn test_reads_any_integer_object() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"b": 2,"a":-1,   "c": 0}"#).unwrap();

        let stock = JsonStockFile::new(&path).read().unwrap().unwrap();
        let keys: Vec<&str> = stock.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let mut inventory = Inventory::new();
        inventory.add("apple", 1, None);
        let err = inventory.load(&JsonStockFile::new(&path)).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::Store(StoreError::Serialization(_))
        ));
        assert_eq!(inventory.quantity("apple"), 1);
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let file = JsonStockFile::new(dir.path().join("nope").join("inventory.json"));
        let err = Inventory::new().save(&file).unwrap_err();
        assert!(matches!(err, InventoryError::Store(StoreError::Io(_))));
    }

    #[test]
    fn test_default_path() {
        assert_eq!(
            JsonStockFile::default().location(),
            Path::new(DEFAULT_INVENTORY_FILE)
        );
    }
}
