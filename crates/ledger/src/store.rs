use std::sync::RwLock;

use chrono::NaiveDate;
use thiserror::Error;

use paperdesk_core::DomainError;

use crate::transaction::{PendingTransaction, Transaction, TransactionId};

/// Storage-layer failure surfaced to the caller. The core never retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerStoreError {
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<LedgerStoreError> for DomainError {
    fn from(err: LedgerStoreError) -> Self {
        match err {
            LedgerStoreError::Storage(msg) => DomainError::StorageFailure(msg),
        }
    }
}

/// Append-only transaction log.
///
/// Contract:
/// - `append` is atomic: a row is fully committed or not at all, and receives
///   a strictly increasing identifier. Id assignment and durability are
///   serialized by the store, not by callers.
/// - Reads may run in parallel with each other and with writes; a read racing
///   a write dated on or before its cutoff either observes the row or not,
///   and both outcomes are individually consistent. Torn rows must never be
///   observable.
pub trait LedgerStore: Send + Sync {
    /// Commit one transaction, assigning the next monotonic id.
    fn append(&self, pending: PendingTransaction) -> Result<Transaction, LedgerStoreError>;

    /// All transactions with `date <= as_of`, in id order.
    fn load_through(&self, as_of: NaiveDate) -> Result<Vec<Transaction>, LedgerStoreError>;

    /// Number of committed transactions.
    fn count(&self) -> Result<u64, LedgerStoreError>;
}

/// In-memory append-only ledger.
///
/// Intended for tests/dev and the demo binary; a relational store is assumed
/// behind the same trait in production, not built here.
#[derive(Debug, Default)]
pub struct InMemoryLedgerStore {
    rows: RwLock<Vec<Transaction>>,
}

impl InMemoryLedgerStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryLedgerStore {
    fn append(&self, pending: PendingTransaction) -> Result<Transaction, LedgerStoreError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| LedgerStoreError::Storage("lock poisoned".to_string()))?;

        // Ids start at 1 and increase by exactly one per committed row.
        let id = TransactionId(rows.len() as u64 + 1);
        let committed = pending.commit(id);

        tracing::debug!(
            id = %committed.id,
            item = %committed.item_name,
            kind = %committed.kind,
            quantity = committed.quantity,
            total_price = %committed.total_price,
            date = %committed.date,
            "transaction committed"
        );

        rows.push(committed.clone());
        Ok(committed)
    }

    fn load_through(&self, as_of: NaiveDate) -> Result<Vec<Transaction>, LedgerStoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| LedgerStoreError::Storage("lock poisoned".to_string()))?;

        Ok(rows.iter().filter(|t| t.date <= as_of).cloned().collect())
    }

    fn count(&self) -> Result<u64, LedgerStoreError> {
        let rows = self
            .rows
            .read()
            .map_err(|_| LedgerStoreError::Storage("lock poisoned".to_string()))?;

        Ok(rows.len() as u64)
    }
}
