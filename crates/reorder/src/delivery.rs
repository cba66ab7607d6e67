use chrono::{Days, NaiveDate};

use paperdesk_core::parse_iso_date;

/// Supplier lead time in days as a step function of order quantity.
pub fn lead_time_days(quantity: u32) -> u64 {
    match quantity {
        0..=10 => 0,
        11..=100 => 1,
        101..=1000 => 4,
        _ => 7,
    }
}

/// Estimated arrival date for a supplier order.
///
/// `order_date_text` is parsed as ISO `YYYY-MM-DD` (a trailing `T...` time
/// component is tolerated). Malformed input does not fail the estimate: the
/// engine falls back to `processing_date` so a delivery promise can always
/// be made, and logs the substitution.
pub fn estimate_delivery(
    order_date_text: &str,
    quantity: u32,
    processing_date: NaiveDate,
) -> NaiveDate {
    let order_date = match parse_iso_date(order_date_text) {
        Ok(date) => date,
        Err(_) => {
            tracing::warn!(
                text = order_date_text,
                fallback = %processing_date,
                "unparseable order date, estimating from processing date"
            );
            processing_date
        }
    };

    order_date
        .checked_add_days(Days::new(lead_time_days(quantity)))
        .unwrap_or(order_date)
}
