//! `paperdesk` — the external call surface of the paper-distribution core.
//!
//! The [`Desk`] facade wires the catalog, ledger, pricing, quote history,
//! reorder engine, and reporter behind direct typed function calls. There
//! is no network protocol here; an orchestration layer out of scope for
//! this crate is the intended consumer.

mod services;

#[cfg(test)]
mod integration_tests;

pub use services::{Desk, ItemDetails, SaleLine, SaleOutcome, CUSTOMER_DELIVERY_DAYS};

pub use paperdesk_catalog::{standard_catalog, Catalog, Category, Item};
pub use paperdesk_core::{parse_iso_date, DomainError, DomainResult};
pub use paperdesk_ledger::{
    InMemoryLedgerStore, LedgerStore, Transaction, TransactionId, TransactionKind,
};
pub use paperdesk_pricing::{DiscountBreakdown, OrderSize};
pub use paperdesk_quotes::{NewQuote, QuoteRecord};
pub use paperdesk_reorder::{LowStockItem, ReorderOutcome};
pub use paperdesk_reporting::FinancialReport;
