use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_catalog::Catalog;
use paperdesk_core::DomainResult;
use paperdesk_ledger::{project_cash, project_inventory, sales_by_item, LedgerStore};

/// How many top sellers the report lists.
pub const TOP_SELLER_LIMIT: usize = 5;

/// One catalog item's position in the inventory summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryLine {
    pub item_name: String,
    pub current_stock: u32,
    pub unit_price: Decimal,
    /// `current_stock * unit_price`.
    pub stock_value: Decimal,
}

/// A best-selling item by units moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopSeller {
    pub item_name: String,
    pub total_units: u64,
    pub total_revenue: Decimal,
}

/// Point-in-time financial snapshot derived entirely from the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub as_of: NaiveDate,
    /// May be negative; never clamped.
    pub cash_balance: Decimal,
    /// Sum of `stock_value` across the inventory summary.
    pub inventory_value: Decimal,
    pub total_assets: Decimal,
    /// One line per catalog item, in name order. Items with zero projected
    /// stock appear with a zero line rather than being omitted.
    pub inventory_summary: Vec<InventoryLine>,
    /// Best sellers by units, then revenue, then name; at most
    /// [`TOP_SELLER_LIMIT`] entries.
    pub top_selling: Vec<TopSeller>,
}

/// Build the snapshot: cash and stock are projected from the ledger as of
/// the date, then valued at catalog unit prices.
///
/// Ledger rows for items absent from the catalog still count toward cash but
/// carry no price, so they are left out of the inventory valuation.
pub fn generate_report<S: LedgerStore + ?Sized>(
    catalog: &Catalog,
    store: &S,
    as_of: NaiveDate,
) -> DomainResult<FinancialReport> {
    let cash_balance = project_cash(store, as_of)?;
    let stock = project_inventory(store, as_of)?;

    let inventory_summary: Vec<InventoryLine> = catalog
        .items()
        .map(|item| {
            let current_stock = stock.get(item.name()).copied().unwrap_or(0);
            let stock_value = (item.unit_price() * Decimal::from(current_stock)).round_dp(2);
            InventoryLine {
                item_name: item.name().to_string(),
                current_stock,
                unit_price: item.unit_price(),
                stock_value,
            }
        })
        .collect();

    let inventory_value: Decimal = inventory_summary.iter().map(|line| line.stock_value).sum();
    let total_assets = cash_balance + inventory_value;

    let mut top_selling: Vec<TopSeller> = sales_by_item(store, as_of)?
        .into_iter()
        .map(|totals| TopSeller {
            item_name: totals.item_name,
            total_units: totals.total_units,
            total_revenue: totals.total_revenue,
        })
        .collect();
    top_selling.sort_by(|a, b| {
        b.total_units
            .cmp(&a.total_units)
            .then_with(|| b.total_revenue.cmp(&a.total_revenue))
            .then_with(|| a.item_name.cmp(&b.item_name))
    });
    top_selling.truncate(TOP_SELLER_LIMIT);

    tracing::debug!(
        %as_of,
        %cash_balance,
        %inventory_value,
        %total_assets,
        "financial report generated"
    );

    Ok(FinancialReport {
        as_of,
        cash_balance,
        inventory_value,
        total_assets,
        inventory_summary,
        top_selling,
    })
}
