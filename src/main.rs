// Entry point for the stock ledger.
//
// **Architecture Overview:**
// - `core/` = Business logic (the inventory table and its persistence port)
// - `infra/` = Implementations of core traits (the JSON stock file)
// - `config.rs` = Settings pulled from the environment
//
// This file's job is to:
// 1. Initialize logging and load configuration
// 2. Wire the inventory to its stock file (dependency injection)
// 3. Run the sample session and print the results

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

mod config;

use crate::config::AppConfig;
use crate::core::inventory::Inventory;
use crate::infra::inventory::JsonStockFile;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Timestamped log lines on stderr; stdout is kept for the report.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables from .env file (if it exists)
    dotenv::dotenv().ok();
    let config = AppConfig::from_env();

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================
    // The inventory is owned here and handed out by reference; the stock file
    // is the only thing that knows about paths and JSON.

    let stock_file = JsonStockFile::new(&config.inventory_file);
    let mut inventory = Inventory::new();

    run_session(&mut inventory, &stock_file, config.low_stock_threshold)?;
    Ok(())
}

/// The sample session: a few adds and removes (two of them rejected), a
/// save/load round trip, then the report.
fn run_session(
    inventory: &mut Inventory,
    stock_file: &JsonStockFile,
    low_stock_threshold: i64,
) -> anyhow::Result<()> {
    inventory.add("apple", 10, None);
    inventory.add("banana", -2, None);
    // Rejected and logged; the session carries on.
    let _ = inventory.add_untyped(&json!(123), &json!("ten"), None);

    let _ = inventory.remove("apple", 3);
    let _ = inventory.remove("orange", 1);

    println!("Apple stock: {}", inventory.quantity("apple"));
    println!(
        "Low items: {:?}",
        inventory.low_stock_items(low_stock_threshold)
    );

    inventory.save(stock_file)?;
    inventory.load(stock_file)?;

    for line in inventory.report() {
        println!("{line}");
    }
    Ok(())
}
