use chrono::NaiveDate;
use rust_decimal_macros::dec;

use paperdesk_catalog::{standard_catalog, Catalog, Category, Item};
use paperdesk_core::DomainError;
use paperdesk_quotes::NewQuote;
use paperdesk_reorder::ReorderOutcome;

use crate::services::{Desk, SaleLine, SaleOutcome};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
}

fn desk() -> Desk {
    Desk::new(standard_catalog().unwrap())
}

fn quote(request: &str, explanation: &str, day: u32) -> NewQuote {
    NewQuote {
        original_request: request.to_string(),
        explanation: explanation.to_string(),
        total_amount: dec!(250),
        job_type: "printing services".to_string(),
        order_size: "medium".to_string(),
        event_type: "trade show".to_string(),
        order_date: date(day),
    }
}

#[test]
fn stock_is_a_pure_projection_of_the_ledger() {
    let desk = desk();
    desk.record_transaction("A4 paper", "stock_orders", 1000, dec!(50), date(1))
        .unwrap();
    desk.record_transaction("A4 paper", "sales", 300, dec!(45), date(3))
        .unwrap();
    desk.record_transaction("A4 paper", "sales", 200, dec!(30), date(5))
        .unwrap();

    // max(0, orders - sales) at each cutoff.
    assert_eq!(desk.project_stock("A4 paper", date(1)).unwrap(), 1000);
    assert_eq!(desk.project_stock("A4 paper", date(3)).unwrap(), 700);
    assert_eq!(desk.project_stock("A4 paper", date(5)).unwrap(), 500);

    // Cash mirrors the same rows with signs flipped.
    assert_eq!(desk.project_cash(date(5)).unwrap(), dec!(25));
}

#[test]
fn writes_check_the_catalog_but_reads_do_not() {
    let desk = desk();

    let err = desk
        .record_transaction("Vellum", "stock_orders", 10, dec!(5), date(1))
        .unwrap_err();
    assert_eq!(err, DomainError::item_not_found("Vellum"));

    // Reads of unknown names are simply zero.
    assert_eq!(desk.project_stock("Vellum", date(1)).unwrap(), 0);
}

#[test]
fn invalid_kind_tags_are_rejected_not_defaulted() {
    let desk = desk();
    let err = desk
        .record_transaction("A4 paper", "purchase", 10, dec!(5), date(1))
        .unwrap_err();
    assert_eq!(
        err,
        DomainError::InvalidTransactionKind("purchase".to_string())
    );
    assert_eq!(desk.transaction_count().unwrap(), 0);
}

#[test]
fn large_discount_on_a_round_figure() {
    let desk = desk();
    let breakdown = desk.apply_bulk_discount("large", dec!(1000)).unwrap();

    assert_eq!(breakdown.discount_rate, dec!(0.15));
    assert_eq!(breakdown.discount_amount, dec!(150));
    assert_eq!(breakdown.final_price, dec!(850));
}

#[test]
fn quote_search_requires_every_keyword() {
    let desk = desk();
    desk.record_quote(quote(
        "500 sheets of glossy paper plus cardstock inserts",
        "Bundled glossy and cardstock pricing",
        10,
    ))
    .unwrap();
    desk.record_quote(quote(
        "Cardstock business cards",
        "Standard cardstock rate",
        12,
    ))
    .unwrap();
    desk.record_quote(quote("Glossy posters", "Glossy large-format rate", 14))
        .unwrap();

    let found = desk
        .search_quote_history(&["glossy", "cardstock"], 5)
        .unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, 1);

    // Recency ordering over a single-keyword match.
    let found = desk.search_quote_history(&["glossy"], 5).unwrap();
    let ids: Vec<u64> = found.iter().map(|record| record.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn reorder_commits_when_cash_covers_the_target() {
    let catalog = Catalog::from_items([
        Item::new("A4 paper", Category::Paper, dec!(2), 50).unwrap(),
        Item::new("Cardstock", Category::Paper, dec!(0.15), 100).unwrap(),
    ])
    .unwrap();
    let desk = Desk::new(catalog);

    desk.record_transaction("A4 paper", "stock_orders", 10, dec!(0), date(1))
        .unwrap();
    desk.record_transaction("Cardstock", "sales", 500, dec!(1000), date(1))
        .unwrap();

    let outcome = desk.evaluate_reorder("A4 paper", date(2)).unwrap();
    match outcome {
        ReorderOutcome::Ordered { quantity, cost, .. } => {
            assert_eq!(quantity, 90);
            assert_eq!(cost, dec!(180));
        }
        other => panic!("expected Ordered, got {other:?}"),
    }

    assert_eq!(desk.project_stock("A4 paper", date(2)).unwrap(), 100);
}

#[test]
fn reorder_blocks_without_touching_the_ledger_when_cash_is_short() {
    let catalog =
        Catalog::from_items([Item::new("A4 paper", Category::Paper, dec!(2), 50).unwrap()])
            .unwrap();
    let desk = Desk::new(catalog);

    desk.record_transaction("A4 paper", "stock_orders", 10, dec!(0), date(1))
        .unwrap();
    desk.record_transaction("A4 paper", "sales", 5, dec!(50), date(1))
        .unwrap();

    let count_before = desk.transaction_count().unwrap();
    let stock_before = desk.project_stock("A4 paper", date(2)).unwrap();

    let outcome = desk.evaluate_reorder("A4 paper", date(2)).unwrap();
    assert!(matches!(outcome, ReorderOutcome::Blocked { .. }));

    assert_eq!(desk.transaction_count().unwrap(), count_before);
    assert_eq!(
        desk.project_stock("A4 paper", date(2)).unwrap(),
        stock_before
    );
}

#[test]
fn delivery_estimates_step_with_quantity() {
    let desk = desk();
    let processing = date(20);

    assert_eq!(
        desk.estimate_delivery_date("2025-04-01", 10, processing),
        date(1)
    );
    assert_eq!(
        desk.estimate_delivery_date("2025-04-01", 11, processing),
        date(2)
    );
    assert_eq!(
        desk.estimate_delivery_date("2025-04-01", 1000, processing),
        date(5)
    );
    assert_eq!(
        desk.estimate_delivery_date("2025-04-01", 1001, processing),
        date(8)
    );

    assert_eq!(desk.customer_delivery_date(date(1)), date(5));
}

#[test]
fn sale_batches_are_all_or_nothing() {
    let desk = desk();
    desk.record_transaction("A4 paper", "stock_orders", 100, dec!(5), date(1))
        .unwrap();
    desk.record_transaction("Cardstock", "stock_orders", 20, dec!(3), date(1))
        .unwrap();

    let count_before = desk.transaction_count().unwrap();
    let outcome = desk
        .process_sale(
            &[
                SaleLine {
                    item_name: "A4 paper".to_string(),
                    quantity: 50,
                    total_price: dec!(3),
                },
                SaleLine {
                    item_name: "Cardstock".to_string(),
                    quantity: 30,
                    total_price: dec!(5),
                },
            ],
            date(2),
        )
        .unwrap();

    // Second line exceeds stock: nothing from the batch lands.
    assert_eq!(
        outcome,
        SaleOutcome::Rejected {
            item_name: "Cardstock".to_string(),
            requested: 30,
            available: 20,
        }
    );
    assert_eq!(desk.transaction_count().unwrap(), count_before);

    // Two lines of the same item share the available stock.
    let outcome = desk
        .process_sale(
            &[
                SaleLine {
                    item_name: "A4 paper".to_string(),
                    quantity: 60,
                    total_price: dec!(4),
                },
                SaleLine {
                    item_name: "A4 paper".to_string(),
                    quantity: 60,
                    total_price: dec!(4),
                },
            ],
            date(2),
        )
        .unwrap();
    assert!(matches!(outcome, SaleOutcome::Rejected { available: 40, .. }));

    let outcome = desk
        .process_sale(
            &[SaleLine {
                item_name: "A4 paper".to_string(),
                quantity: 100,
                total_price: dec!(6.50),
            }],
            date(2),
        )
        .unwrap();
    match outcome {
        SaleOutcome::Completed {
            transaction_ids,
            total,
        } => {
            assert_eq!(transaction_ids.len(), 1);
            assert_eq!(total, dec!(6.50));
        }
        other => panic!("expected Completed, got {other:?}"),
    }
    assert_eq!(desk.project_stock("A4 paper", date(2)).unwrap(), 0);
}

#[test]
fn report_composes_projections_and_catalog_prices() {
    let desk = desk();
    desk.record_transaction("A4 paper", "stock_orders", 1000, dec!(50), date(1))
        .unwrap();
    desk.record_transaction("Cardstock", "stock_orders", 200, dec!(30), date(1))
        .unwrap();
    desk.record_transaction("A4 paper", "sales", 400, dec!(95), date(2))
        .unwrap();
    desk.record_transaction("Cardstock", "sales", 100, dec!(40), date(2))
        .unwrap();

    let report = desk.generate_report(date(2)).unwrap();

    assert_eq!(report.cash_balance, dec!(55));
    // A4 600*0.05 + Cardstock 100*0.15.
    assert_eq!(report.inventory_value, dec!(45));
    assert_eq!(report.total_assets, dec!(100));
    assert_eq!(
        report.inventory_summary.len(),
        standard_catalog().unwrap().len()
    );

    assert_eq!(report.top_selling.len(), 2);
    assert_eq!(report.top_selling[0].item_name, "A4 paper");
    assert_eq!(report.top_selling[0].total_units, 400);
}

#[test]
fn low_stock_and_sweep_share_one_cash_pool() {
    let catalog = Catalog::from_items([
        Item::new("A4 paper", Category::Paper, dec!(2), 50).unwrap(),
        Item::new("Cardstock", Category::Paper, dec!(0.15), 100).unwrap(),
    ])
    .unwrap();
    let desk = Desk::new(catalog);

    // Cash 200; A4's order costs 200, leaving nothing for Cardstock's 30.
    desk.record_transaction("A4 paper", "sales", 100, dec!(200), date(1))
        .unwrap();

    let low = desk.low_stock(date(2)).unwrap();
    assert_eq!(low.len(), 2);
    assert_eq!(low[0].item_name, "Cardstock");

    let outcomes = desk.auto_reorder(date(2)).unwrap();
    assert!(matches!(
        outcomes[0].1,
        ReorderOutcome::Ordered { quantity: 100, .. }
    ));
    assert!(matches!(outcomes[1].1, ReorderOutcome::Blocked { .. }));
}

#[test]
fn item_details_and_search_cover_the_catalog_surface() {
    let desk = desk();
    desk.record_transaction("Glossy paper", "stock_orders", 250, dec!(50), date(1))
        .unwrap();

    let details = desk.item_details("Glossy paper", date(1)).unwrap();
    assert_eq!(details.current_stock, 250);
    assert_eq!(details.unit_price, dec!(0.20));
    assert_eq!(details.min_stock_level, 100);

    let hits = desk.search_items("banner");
    assert_eq!(hits.len(), 2);

    assert!(desk.item_details("Vellum", date(1)).is_err());
}
