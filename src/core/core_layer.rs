// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "inventory/mod.rs"]
pub mod inventory;
