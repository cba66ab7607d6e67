use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_catalog::Catalog;
use paperdesk_core::{DomainError, DomainResult};
use paperdesk_ledger::{
    project_cash, project_inventory, project_stock, LedgerStore, PendingTransaction,
    TransactionId, TransactionKind,
};

use crate::delivery::lead_time_days;

/// Replenishment target as a multiple of the minimum stock level.
pub const REORDER_TARGET_MULTIPLIER: u32 = 2;

/// Result of one reorder evaluation.
///
/// Every path is a reportable outcome. In particular, insufficient cash is
/// `Blocked`, not an error: the business answer "we cannot afford it" is as
/// legitimate as "we ordered".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReorderOutcome {
    /// Stock at or above the minimum; nothing to do.
    Sufficient {
        current_stock: u32,
        min_stock_level: u32,
    },
    /// A StockOrder was committed to the ledger.
    Ordered {
        transaction_id: TransactionId,
        quantity: u32,
        cost: Decimal,
        eta: NaiveDate,
    },
    /// Low on stock but the purchase would overdraw available cash.
    Blocked { required: Decimal, available: Decimal },
    /// Low on stock but the computed reorder quantity is zero, so there is
    /// nothing to buy.
    Skipped,
}

/// An item whose projected stock sits below its minimum level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub item_name: String,
    pub current_stock: u32,
    pub min_stock_level: u32,
    pub shortage: u32,
    pub unit_price: Decimal,
}

/// Cash-gated reorder decision engine.
///
/// Decisions read projected state and conditionally append to the ledger.
/// The read and the write happen inside one serialized section (`gate`), so
/// two concurrent evaluations cannot both pass the cash check against the
/// same balance.
pub struct ReorderEngine<S: LedgerStore> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    gate: Mutex<()>,
}

impl<S: LedgerStore> ReorderEngine<S> {
    pub fn new(catalog: Arc<Catalog>, store: Arc<S>) -> Self {
        Self {
            catalog,
            store,
            gate: Mutex::new(()),
        }
    }

    /// Evaluate one item and, if warranted and affordable, commit the
    /// replenishment StockOrder dated `as_of`.
    pub fn evaluate(&self, item_name: &str, as_of: NaiveDate) -> DomainResult<ReorderOutcome> {
        let _guard = self
            .gate
            .lock()
            .map_err(|_| DomainError::storage("lock poisoned"))?;
        self.evaluate_locked(item_name, as_of)
    }

    /// Sweep the whole catalog under a single serialized section, returning
    /// the items that needed attention (everything except `Sufficient`).
    ///
    /// Orders committed earlier in the sweep reduce the cash available to
    /// later items; the catalog's name order decides who spends first.
    pub fn evaluate_all(&self, as_of: NaiveDate) -> DomainResult<Vec<(String, ReorderOutcome)>> {
        let _guard = self
            .gate
            .lock()
            .map_err(|_| DomainError::storage("lock poisoned"))?;

        let mut outcomes = Vec::new();
        for item in self.catalog.items() {
            let outcome = self.evaluate_locked(item.name(), as_of)?;
            if !matches!(outcome, ReorderOutcome::Sufficient { .. }) {
                outcomes.push((item.name().to_string(), outcome));
            }
        }
        Ok(outcomes)
    }

    fn evaluate_locked(&self, item_name: &str, as_of: NaiveDate) -> DomainResult<ReorderOutcome> {
        let item = self
            .catalog
            .get(item_name)
            .ok_or_else(|| DomainError::item_not_found(item_name))?;

        let current_stock = project_stock(self.store.as_ref(), item.name(), as_of)?;
        let min_stock_level = item.min_stock_level();

        if current_stock >= min_stock_level {
            return Ok(ReorderOutcome::Sufficient {
                current_stock,
                min_stock_level,
            });
        }

        let target = min_stock_level.saturating_mul(REORDER_TARGET_MULTIPLIER);
        let quantity = target.saturating_sub(current_stock);
        if quantity == 0 {
            return Ok(ReorderOutcome::Skipped);
        }

        let cost = (item.unit_price() * Decimal::from(quantity)).round_dp(2);
        let available = project_cash(self.store.as_ref(), as_of)?;
        if cost > available {
            tracing::warn!(
                item = item.name(),
                %cost,
                %available,
                "reorder blocked by insufficient cash"
            );
            return Ok(ReorderOutcome::Blocked {
                required: cost,
                available,
            });
        }

        let pending = PendingTransaction::new(
            item.name(),
            TransactionKind::StockOrder,
            i64::from(quantity),
            cost,
            as_of,
        )?;
        let committed = self.store.append(pending)?;

        let eta = as_of
            .checked_add_days(Days::new(lead_time_days(quantity)))
            .unwrap_or(as_of);

        tracing::info!(
            item = item.name(),
            id = %committed.id,
            quantity,
            %cost,
            %eta,
            "replenishment ordered"
        );

        Ok(ReorderOutcome::Ordered {
            transaction_id: committed.id,
            quantity,
            cost,
            eta,
        })
    }

    /// Items below their minimum stock level as of a date, worst shortage
    /// first (ties in name order).
    pub fn low_stock(&self, as_of: NaiveDate) -> DomainResult<Vec<LowStockItem>> {
        let inventory = project_inventory(self.store.as_ref(), as_of)?;

        let mut low: Vec<LowStockItem> = self
            .catalog
            .items()
            .filter_map(|item| {
                let current_stock = inventory.get(item.name()).copied().unwrap_or(0);
                let shortage = item.min_stock_level().checked_sub(current_stock)?;
                if shortage == 0 {
                    return None;
                }
                Some(LowStockItem {
                    item_name: item.name().to_string(),
                    current_stock,
                    min_stock_level: item.min_stock_level(),
                    shortage,
                    unit_price: item.unit_price(),
                })
            })
            .collect();

        low.sort_by(|a, b| {
            b.shortage
                .cmp(&a.shortage)
                .then_with(|| a.item_name.cmp(&b.item_name))
        });
        Ok(low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperdesk_catalog::{Category, Item};
    use paperdesk_ledger::InMemoryLedgerStore;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_items([
                Item::new("A4 paper", Category::Paper, dec!(2), 50).unwrap(),
                Item::new("Cardstock", Category::Paper, dec!(0.15), 100).unwrap(),
            ])
            .unwrap(),
        )
    }

    fn seed(store: &InMemoryLedgerStore, item: &str, kind: TransactionKind, qty: i64, total: Decimal) {
        let pending = PendingTransaction::new(item, kind, qty, total, date(1)).unwrap();
        store.append(pending).unwrap();
    }

    #[test]
    fn orders_up_to_twice_the_minimum_when_cash_allows() {
        let store = Arc::new(InMemoryLedgerStore::new());
        // A4 stock 10; a Cardstock sale funds the cash balance at 1000.
        seed(&store, "A4 paper", TransactionKind::StockOrder, 10, dec!(0));
        seed(&store, "Cardstock", TransactionKind::Sale, 500, dec!(1000));

        let engine = ReorderEngine::new(catalog(), Arc::clone(&store));
        let outcome = engine.evaluate("A4 paper", date(2)).unwrap();

        // min 50, stock 10: order 2*50 - 10 = 90 units at $2 = $180.
        match outcome {
            ReorderOutcome::Ordered {
                quantity,
                cost,
                eta,
                ..
            } => {
                assert_eq!(quantity, 90);
                assert_eq!(cost, dec!(180));
                // 90 units: 1-day lead time.
                assert_eq!(eta, date(3));
            }
            other => panic!("expected Ordered, got {other:?}"),
        }

        assert_eq!(
            project_stock(store.as_ref(), "A4 paper", date(2)).unwrap(),
            100
        );
        assert_eq!(project_cash(store.as_ref(), date(2)).unwrap(), dec!(820));
    }

    #[test]
    fn blocks_without_writing_when_cash_is_short() {
        let store = Arc::new(InMemoryLedgerStore::new());
        // Stock ends at 5 and cash at 50; replenishing to 100 needs $190.
        seed(&store, "A4 paper", TransactionKind::StockOrder, 10, dec!(0));
        seed(&store, "A4 paper", TransactionKind::Sale, 5, dec!(50));

        let engine = ReorderEngine::new(catalog(), Arc::clone(&store));
        let before = store.count().unwrap();

        let outcome = engine.evaluate("A4 paper", date(2)).unwrap();
        assert_eq!(
            outcome,
            ReorderOutcome::Blocked {
                required: dec!(190),
                available: dec!(50),
            }
        );

        // No ledger write on the blocked path.
        assert_eq!(store.count().unwrap(), before);
    }

    #[test]
    fn sufficient_stock_is_a_no_op() {
        let store = Arc::new(InMemoryLedgerStore::new());
        seed(&store, "A4 paper", TransactionKind::StockOrder, 80, dec!(160));

        let engine = ReorderEngine::new(catalog(), Arc::clone(&store));
        let outcome = engine.evaluate("A4 paper", date(2)).unwrap();
        assert_eq!(
            outcome,
            ReorderOutcome::Sufficient {
                current_stock: 80,
                min_stock_level: 50,
            }
        );
        assert_eq!(store.count().unwrap(), 1);
    }

    #[test]
    fn unknown_item_is_an_error() {
        let store = Arc::new(InMemoryLedgerStore::new());
        let engine = ReorderEngine::new(catalog(), store);
        let err = engine.evaluate("Vellum", date(1)).unwrap_err();
        assert_eq!(err, DomainError::item_not_found("Vellum"));
    }

    #[test]
    fn low_stock_sorts_worst_shortage_first() {
        let store = Arc::new(InMemoryLedgerStore::new());
        // A4 paper at 40/50 (shortage 10), Cardstock at 0/100 (shortage 100).
        seed(&store, "A4 paper", TransactionKind::StockOrder, 40, dec!(80));

        let engine = ReorderEngine::new(catalog(), store);
        let low = engine.low_stock(date(2)).unwrap();

        assert_eq!(low.len(), 2);
        assert_eq!(low[0].item_name, "Cardstock");
        assert_eq!(low[0].shortage, 100);
        assert_eq!(low[0].current_stock, 0);
        assert_eq!(low[1].item_name, "A4 paper");
        assert_eq!(low[1].shortage, 10);
        assert_eq!(low[1].unit_price, dec!(2));
    }

    #[test]
    fn sweep_spends_cash_in_catalog_order() {
        let store = Arc::new(InMemoryLedgerStore::new());
        // Cash 200: enough for A4 paper's $180 order (after which $20
        // remains, short of Cardstock's $30 order).
        seed(&store, "A4 paper", TransactionKind::Sale, 100, dec!(200));

        let engine = ReorderEngine::new(catalog(), Arc::clone(&store));
        let outcomes = engine.evaluate_all(date(2)).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].0, "A4 paper");
        assert!(matches!(
            outcomes[0].1,
            ReorderOutcome::Ordered { quantity: 100, .. }
        ));
        assert_eq!(outcomes[1].0, "Cardstock");
        assert!(matches!(outcomes[1].1, ReorderOutcome::Blocked { .. }));
    }
}
