//! `paperdesk-ledger` — the append-only transaction log and its projections.
//!
//! The ledger is the sole source of truth for inventory and cash. Stock and
//! cash are **derived** reads computed by aggregating the log as of a date;
//! no cached "current stock" field is ever authoritative.

pub mod projector;
pub mod store;
pub mod transaction;

pub use projector::{project_cash, project_inventory, project_stock, sales_by_item, SalesTotals};
pub use store::{InMemoryLedgerStore, LedgerStore, LedgerStoreError};
pub use transaction::{PendingTransaction, Transaction, TransactionId, TransactionKind};
