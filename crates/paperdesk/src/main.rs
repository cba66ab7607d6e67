use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use paperdesk::{standard_catalog, Desk, NewQuote, ReorderOutcome, SaleLine, SaleOutcome};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, day).expect("valid demo date")
}

fn main() -> Result<()> {
    paperdesk_observability::init();

    let desk = Desk::new(standard_catalog()?);

    // Opening stock orders. Cash goes negative first; the spend is recovered
    // through the sales below.
    for (item, quantity) in [
        ("A4 paper", 2000i64),
        ("Glossy paper", 800),
        ("Cardstock", 600),
        ("Paper plates", 300),
    ] {
        let unit = desk.base_price(item)?;
        desk.record_transaction(
            item,
            "stock_orders",
            quantity,
            unit * Decimal::from(quantity),
            date(1),
        )?;
    }
    tracing::info!(cash = %desk.project_cash(date(1))?, "opening stock purchased");

    // Quote a glossy flyer job: base price, bulk discount, clean final figure.
    let base = desk.base_price("Glossy paper")? * Decimal::from(500);
    let breakdown = desk.apply_bulk_discount("medium", base)?;
    tracing::info!(
        base = %breakdown.base_price,
        rate = %breakdown.discount_rate,
        quoted = %breakdown.final_price,
        "glossy flyer job quoted"
    );

    desk.record_quote(NewQuote {
        original_request: "500 sheets of glossy paper for trade show flyers".to_string(),
        explanation: "Medium bulk rate applied to the glossy sheet price".to_string(),
        total_amount: breakdown.final_price,
        job_type: "printing services".to_string(),
        order_size: "medium".to_string(),
        event_type: "trade show".to_string(),
        order_date: date(2),
    })?;

    // The sale itself, promised to the customer four days out.
    let outcome = desk.process_sale(
        &[SaleLine {
            item_name: "Glossy paper".to_string(),
            quantity: 500,
            total_price: breakdown.final_price,
        }],
        date(2),
    )?;
    if let SaleOutcome::Completed { total, .. } = &outcome {
        tracing::info!(%total, delivery = %desk.customer_delivery_date(date(2)), "sale completed");
    }

    // More trade over the week.
    desk.record_transaction("A4 paper", "sales", 1500, Decimal::new(9500, 2), date(3))?;
    desk.record_transaction("Cardstock", "sales", 550, Decimal::new(12000, 2), date(4))?;
    desk.record_transaction("Paper plates", "sales", 280, Decimal::new(4500, 2), date(4))?;

    // Pull up how similar jobs were quoted before.
    for record in desk.search_quote_history(&["glossy"], 3)? {
        tracing::info!(id = record.id, amount = %record.total_amount, "prior glossy quote");
    }

    // Replenish whatever the week's sales drained, cash permitting.
    for (item, outcome) in desk.auto_reorder(date(5))? {
        match outcome {
            ReorderOutcome::Ordered {
                quantity,
                cost,
                eta,
                ..
            } => tracing::info!(item, quantity, %cost, %eta, "reordered"),
            ReorderOutcome::Blocked {
                required,
                available,
            } => tracing::warn!(item, %required, %available, "reorder blocked"),
            ReorderOutcome::Skipped => tracing::info!(item, "reorder skipped"),
            ReorderOutcome::Sufficient { .. } => {}
        }
    }

    let report = desk.generate_report(date(5))?;
    println!("financial snapshot as of {}", report.as_of);
    println!("  cash balance:    {}", report.cash_balance);
    println!("  inventory value: {}", report.inventory_value);
    println!("  total assets:    {}", report.total_assets);
    println!("  top sellers:");
    for seller in &report.top_selling {
        println!(
            "    {:<14} {:>6} units  {:>10} revenue",
            seller.item_name, seller.total_units, seller.total_revenue
        );
    }

    Ok(())
}
