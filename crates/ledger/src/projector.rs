//! Point-in-time projections over the ledger.
//!
//! Every function here is a pure aggregation of the append-only log as of a
//! cutoff date (`date <= as_of`). Projections are deterministic: repeated
//! calls against the same ledger state and date return identical results.
//! Complexity is linear in ledger size per call; no incremental running
//! totals are maintained.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use paperdesk_core::DomainResult;

use crate::store::LedgerStore;
use crate::transaction::{Transaction, TransactionKind};

fn signed_units(t: &Transaction) -> i64 {
    match t.kind {
        TransactionKind::StockOrder => i64::from(t.quantity),
        TransactionKind::Sale => -i64::from(t.quantity),
    }
}

fn clamp_stock(net: i64) -> u32 {
    net.clamp(0, i64::from(u32::MAX)) as u32
}

/// Snapshot of every item with strictly positive projected stock.
///
/// Depleted and never-stocked items are omitted, not reported as zero.
pub fn project_inventory<S: LedgerStore + ?Sized>(
    store: &S,
    as_of: NaiveDate,
) -> DomainResult<BTreeMap<String, u32>> {
    let mut net: BTreeMap<String, i64> = BTreeMap::new();
    for t in store.load_through(as_of)? {
        *net.entry(t.item_name.clone()).or_default() += signed_units(&t);
    }

    Ok(net
        .into_iter()
        .filter(|&(_, units)| units > 0)
        .map(|(name, units)| (name, clamp_stock(units)))
        .collect())
}

/// Projected stock for one item, clamped at zero.
///
/// Unknown items and net-negative aggregations both project as 0. The ledger
/// itself permits a Sale with no prior matching StockOrder (no referential
/// stock check at write time); the oversold state collapses to 0 here.
pub fn project_stock<S: LedgerStore + ?Sized>(
    store: &S,
    item_name: &str,
    as_of: NaiveDate,
) -> DomainResult<u32> {
    let net: i64 = store
        .load_through(as_of)?
        .iter()
        .filter(|t| t.item_name == item_name)
        .map(signed_units)
        .sum();

    Ok(clamp_stock(net))
}

/// Cash balance: total Sale revenue minus total StockOrder spend.
///
/// Unclamped; the balance may be negative. The reorder engine's cash gate is
/// what prevents overspending, not this projection.
pub fn project_cash<S: LedgerStore + ?Sized>(
    store: &S,
    as_of: NaiveDate,
) -> DomainResult<Decimal> {
    let mut balance = Decimal::ZERO;
    for t in store.load_through(as_of)? {
        match t.kind {
            TransactionKind::Sale => balance += t.total_price,
            TransactionKind::StockOrder => balance -= t.total_price,
        }
    }
    Ok(balance)
}

/// Per-item sales totals as of a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTotals {
    pub item_name: String,
    pub total_units: u64,
    pub total_revenue: Decimal,
}

/// Units sold and revenue per item (Sale transactions only), in name order.
pub fn sales_by_item<S: LedgerStore + ?Sized>(
    store: &S,
    as_of: NaiveDate,
) -> DomainResult<Vec<SalesTotals>> {
    let mut totals: BTreeMap<String, (u64, Decimal)> = BTreeMap::new();
    for t in store.load_through(as_of)? {
        if t.kind == TransactionKind::Sale {
            let entry = totals.entry(t.item_name.clone()).or_default();
            entry.0 += u64::from(t.quantity);
            entry.1 += t.total_price;
        }
    }

    Ok(totals
        .into_iter()
        .map(|(item_name, (total_units, total_revenue))| SalesTotals {
            item_name,
            total_units,
            total_revenue,
        })
        .collect())
}
