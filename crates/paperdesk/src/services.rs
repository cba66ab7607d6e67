use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_catalog::{Catalog, Category, Item};
use paperdesk_core::{DomainError, DomainResult};
use paperdesk_ledger::{
    project_cash, project_inventory, project_stock, InMemoryLedgerStore, LedgerStore,
    PendingTransaction, TransactionId, TransactionKind,
};
use paperdesk_pricing::{apply_bulk_discount, DiscountBreakdown, OrderSize};
use paperdesk_quotes::{NewQuote, QuoteHistory, QuoteRecord};
use paperdesk_reorder::{estimate_delivery, LowStockItem, ReorderEngine, ReorderOutcome};
use paperdesk_reporting::{generate_report, FinancialReport};

/// Customer-facing delivery promise, distinct from supplier lead time.
pub const CUSTOMER_DELIVERY_DAYS: u64 = 4;

/// One requested line of a customer sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleLine {
    pub item_name: String,
    pub quantity: u32,
    /// Total amount charged for this line, after any discounting.
    pub total_price: Decimal,
}

/// Result of a sale batch. A batch commits in full or not at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleOutcome {
    Completed {
        transaction_ids: Vec<TransactionId>,
        total: Decimal,
    },
    /// First line that failed the availability check; nothing was written.
    Rejected {
        item_name: String,
        requested: u32,
        available: u32,
    },
}

/// Catalog and stock view for a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetails {
    pub item_name: String,
    pub category: Category,
    pub unit_price: Decimal,
    pub min_stock_level: u32,
    pub current_stock: u32,
}

/// The paper desk: catalog + ledger + pricing + quotes + reorder + reporting
/// behind one typed call surface.
pub struct Desk<S: LedgerStore = InMemoryLedgerStore> {
    catalog: Arc<Catalog>,
    store: Arc<S>,
    quotes: QuoteHistory,
    reorder: ReorderEngine<S>,
    // Serializes sale-batch check-then-act, like the reorder engine's gate.
    sale_gate: Mutex<()>,
}

impl Desk<InMemoryLedgerStore> {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_store(catalog, Arc::new(InMemoryLedgerStore::new()))
    }
}

impl<S: LedgerStore> Desk<S> {
    pub fn with_store(catalog: Catalog, store: Arc<S>) -> Self {
        let catalog = Arc::new(catalog);
        let reorder = ReorderEngine::new(Arc::clone(&catalog), Arc::clone(&store));
        Self {
            catalog,
            store,
            quotes: QuoteHistory::new(),
            reorder,
            sale_gate: Mutex::new(()),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // --- projections -----------------------------------------------------

    /// Every item with strictly positive stock as of the date.
    pub fn project_inventory(&self, as_of: NaiveDate) -> DomainResult<BTreeMap<String, u32>> {
        project_inventory(self.store.as_ref(), as_of)
    }

    /// Stock for one item, clamped at zero. Unknown items project as 0; no
    /// catalog check happens on reads.
    pub fn project_stock(&self, item_name: &str, as_of: NaiveDate) -> DomainResult<u32> {
        project_stock(self.store.as_ref(), item_name, as_of)
    }

    /// Cash balance as of the date; may be negative.
    pub fn project_cash(&self, as_of: NaiveDate) -> DomainResult<Decimal> {
        project_cash(self.store.as_ref(), as_of)
    }

    pub fn transaction_count(&self) -> DomainResult<u64> {
        Ok(self.store.count()?)
    }

    // --- ledger writes ---------------------------------------------------

    /// Append one transaction to the ledger.
    ///
    /// The kind tag must be exactly `stock_orders` or `sales`. The item must
    /// exist in the catalog; this referential check applies to writes only.
    /// Oversold sales are still accepted and clamp at read time.
    pub fn record_transaction(
        &self,
        item_name: &str,
        kind: &str,
        quantity: i64,
        total_price: Decimal,
        date: NaiveDate,
    ) -> DomainResult<TransactionId> {
        let kind: TransactionKind = kind.parse()?;
        if !self.catalog.contains(item_name) {
            return Err(DomainError::item_not_found(item_name));
        }

        let pending = PendingTransaction::new(item_name, kind, quantity, total_price, date)?;
        let committed = self.store.append(pending)?;
        tracing::info!(
            id = %committed.id,
            item = item_name,
            %kind,
            quantity,
            %total_price,
            "transaction recorded"
        );
        Ok(committed.id)
    }

    /// Commit a customer sale batch, all-or-nothing.
    ///
    /// Every line is checked against projected stock (with earlier lines in
    /// the batch counted against later ones) before anything is written. The
    /// first shortfall rejects the whole batch.
    pub fn process_sale(&self, lines: &[SaleLine], date: NaiveDate) -> DomainResult<SaleOutcome> {
        if lines.is_empty() {
            return Err(DomainError::invalid_argument(
                "a sale requires at least one line",
            ));
        }

        let _guard = self
            .sale_gate
            .lock()
            .map_err(|_| DomainError::storage("lock poisoned"))?;

        let mut reserved: BTreeMap<&str, u32> = BTreeMap::new();
        for line in lines {
            if !self.catalog.contains(&line.item_name) {
                return Err(DomainError::item_not_found(&line.item_name));
            }
            let stock = project_stock(self.store.as_ref(), &line.item_name, date)?;
            let already = reserved.get(line.item_name.as_str()).copied().unwrap_or(0);
            let available = stock.saturating_sub(already);
            if line.quantity > available {
                tracing::warn!(
                    item = %line.item_name,
                    requested = line.quantity,
                    available,
                    "sale rejected for insufficient stock"
                );
                return Ok(SaleOutcome::Rejected {
                    item_name: line.item_name.clone(),
                    requested: line.quantity,
                    available,
                });
            }
            *reserved.entry(line.item_name.as_str()).or_default() += line.quantity;
        }

        let mut transaction_ids = Vec::with_capacity(lines.len());
        let mut total = Decimal::ZERO;
        for line in lines {
            let pending = PendingTransaction::new(
                &line.item_name,
                TransactionKind::Sale,
                i64::from(line.quantity),
                line.total_price,
                date,
            )?;
            let committed = self.store.append(pending)?;
            transaction_ids.push(committed.id);
            total += line.total_price;
        }

        tracing::info!(lines = lines.len(), %total, "sale completed");
        Ok(SaleOutcome::Completed {
            transaction_ids,
            total,
        })
    }

    // --- pricing and quoting ---------------------------------------------

    /// Catalog unit price for an item.
    pub fn base_price(&self, item_name: &str) -> DomainResult<Decimal> {
        self.catalog.base_price(item_name)
    }

    /// Tiered bulk discount from a free-form size tag; unrecognized tags
    /// take the small rate.
    pub fn apply_bulk_discount(
        &self,
        order_size_tag: &str,
        base_price: Decimal,
    ) -> DomainResult<DiscountBreakdown> {
        apply_bulk_discount(base_price, OrderSize::from_tag_lenient(order_size_tag))
    }

    pub fn record_quote(&self, quote: NewQuote) -> DomainResult<u64> {
        self.quotes.insert(quote)
    }

    /// Past quotes matching every keyword, newest first.
    pub fn search_quote_history(
        &self,
        keywords: &[&str],
        limit: i64,
    ) -> DomainResult<Vec<QuoteRecord>> {
        self.quotes.search(keywords, limit)
    }

    // --- reordering and delivery -----------------------------------------

    /// One cash-gated reorder decision; may commit a StockOrder.
    pub fn evaluate_reorder(
        &self,
        item_name: &str,
        as_of: NaiveDate,
    ) -> DomainResult<ReorderOutcome> {
        self.reorder.evaluate(item_name, as_of)
    }

    /// Sweep the catalog, reordering whatever is low and affordable.
    pub fn auto_reorder(&self, as_of: NaiveDate) -> DomainResult<Vec<(String, ReorderOutcome)>> {
        self.reorder.evaluate_all(as_of)
    }

    pub fn low_stock(&self, as_of: NaiveDate) -> DomainResult<Vec<LowStockItem>> {
        self.reorder.low_stock(as_of)
    }

    /// Supplier delivery estimate. An unparseable order date falls back to
    /// `processing_date` rather than failing.
    pub fn estimate_delivery_date(
        &self,
        order_date_text: &str,
        quantity: u32,
        processing_date: NaiveDate,
    ) -> NaiveDate {
        estimate_delivery(order_date_text, quantity, processing_date)
    }

    /// Date promised to the customer: a flat offset from the order date.
    pub fn customer_delivery_date(&self, order_date: NaiveDate) -> NaiveDate {
        order_date
            .checked_add_days(Days::new(CUSTOMER_DELIVERY_DAYS))
            .unwrap_or(order_date)
    }

    // --- views and reporting ---------------------------------------------

    /// Catalog fields plus projected stock for one item.
    pub fn item_details(&self, item_name: &str, as_of: NaiveDate) -> DomainResult<ItemDetails> {
        let item = self
            .catalog
            .get(item_name)
            .ok_or_else(|| DomainError::item_not_found(item_name))?;
        let current_stock = project_stock(self.store.as_ref(), item.name(), as_of)?;

        Ok(ItemDetails {
            item_name: item.name().to_string(),
            category: item.category(),
            unit_price: item.unit_price(),
            min_stock_level: item.min_stock_level(),
            current_stock,
        })
    }

    /// Case-insensitive substring search over catalog item names.
    pub fn search_items(&self, keyword: &str) -> Vec<&Item> {
        self.catalog.search(keyword)
    }

    /// Financial snapshot as of the date.
    pub fn generate_report(&self, as_of: NaiveDate) -> DomainResult<FinancialReport> {
        generate_report(&self.catalog, self.store.as_ref(), as_of)
    }
}
