//! `paperdesk-catalog` — the item catalog.
//!
//! The catalog is owned by a setup/initialization collaborator and is
//! **read-only** to the rest of the core: no price updates, no stock fields.
//! Stock is never stored here; it is always projected from the ledger.

pub mod catalog;
pub mod item;
pub mod standard;

pub use catalog::Catalog;
pub use item::{Category, Item};
pub use standard::standard_catalog;
