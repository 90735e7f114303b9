use indexmap::IndexMap;

/// Item name -> quantity, iterated in insertion order.
pub type StockMap = IndexMap<String, i64>;

/// Threshold used when the caller has no opinion on what "low" means.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Item name used by [`Inventory::add_default`](super::Inventory::add_default).
pub const DEFAULT_ITEM_NAME: &str = "default";

/// What happened to an entry after a successful removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The entry is still stocked with this quantity.
    Remaining(i64),
    /// The quantity hit zero or below and the entry was dropped.
    Removed,
}
