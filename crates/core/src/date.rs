//! Calendar-date parsing.
//!
//! All business dates are plain calendar dates; time-of-day carries no
//! meaning in the ledger.

use chrono::NaiveDate;

use crate::error::{DomainError, DomainResult};

/// Parse an ISO `YYYY-MM-DD` calendar date.
///
/// A trailing `T...` time component is ignored, so datetime-shaped input like
/// `2025-04-01T09:30:00` resolves to its date part. Anything else fails with
/// [`DomainError::InvalidDate`]; callers that want the permissive
/// fall-back-to-today behavior (supplier ETA only) handle the error themselves.
pub fn parse_iso_date(text: &str) -> DomainResult<NaiveDate> {
    let date_part = match text.split_once('T') {
        Some((date, _)) => date,
        None => text,
    };

    NaiveDate::parse_from_str(date_part.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::invalid_date(text))
}
