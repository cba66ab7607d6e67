use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A stored historical quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// Insertion-order identifier assigned by the history, starting at 1.
    pub id: u64,
    /// Verbatim customer request text.
    pub original_request: String,
    /// How the quoted amount was arrived at.
    pub explanation: String,
    pub total_amount: Decimal,
    /// Free-form job classification, e.g. "printing services".
    pub job_type: String,
    /// Free-form size tag as classified at quote time ("small" etc.).
    pub order_size: String,
    /// Occasion the job was for, e.g. "trade show".
    pub event_type: String,
    pub order_date: NaiveDate,
}

/// A quote about to be recorded; the history assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuote {
    pub original_request: String,
    pub explanation: String,
    pub total_amount: Decimal,
    pub job_type: String,
    pub order_size: String,
    pub event_type: String,
    pub order_date: NaiveDate,
}

impl NewQuote {
    pub(crate) fn into_record(self, id: u64) -> QuoteRecord {
        QuoteRecord {
            id,
            original_request: self.original_request,
            explanation: self.explanation,
            total_amount: self.total_amount,
            job_type: self.job_type,
            order_size: self.order_size,
            event_type: self.event_type,
            order_date: self.order_date,
        }
    }
}
