//! `paperdesk-reporting` — the as-of-date financial snapshot.

pub mod report;

pub use report::{generate_report, FinancialReport, InventoryLine, TopSeller, TOP_SELLER_LIMIT};
