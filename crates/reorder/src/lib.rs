//! `paperdesk-reorder` — supplier reordering decisions.
//!
//! The engine reads projected stock and cash, decides whether an item needs
//! replenishing, gates the purchase on available cash, and commits the
//! StockOrder to the ledger. Check and act run inside one serialized
//! section so two concurrent evaluations can never both spend the same cash.

pub mod delivery;
pub mod engine;

pub use delivery::{estimate_delivery, lead_time_days};
pub use engine::{LowStockItem, ReorderEngine, ReorderOutcome, REORDER_TARGET_MULTIPLIER};
