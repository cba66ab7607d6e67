use std::sync::RwLock;

use paperdesk_core::{DomainError, DomainResult};

use crate::record::{NewQuote, QuoteRecord};

/// Append-only store of historical quotes with keyword search.
#[derive(Debug, Default)]
pub struct QuoteHistory {
    rows: RwLock<Vec<QuoteRecord>>,
}

impl QuoteHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quote and return its assigned id (insertion order, from 1).
    pub fn insert(&self, quote: NewQuote) -> DomainResult<u64> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| DomainError::storage("lock poisoned"))?;

        let id = rows.len() as u64 + 1;
        tracing::debug!(id, job_type = %quote.job_type, "quote recorded");
        rows.push(quote.into_record(id));
        Ok(id)
    }

    pub fn len(&self) -> DomainResult<usize> {
        let rows = self
            .rows
            .read()
            .map_err(|_| DomainError::storage("lock poisoned"))?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Keyword search over past quotes.
    ///
    /// A record matches when EVERY keyword appears (case-insensitively) in
    /// its request text or its explanation; each keyword may match either
    /// field. Results come back newest order date first, ties broken by
    /// ascending id, truncated to `limit`.
    ///
    /// An empty keyword set, a blank keyword, or a non-positive limit is an
    /// argument error, not an empty result.
    pub fn search(&self, keywords: &[&str], limit: i64) -> DomainResult<Vec<QuoteRecord>> {
        if keywords.is_empty() {
            return Err(DomainError::invalid_argument(
                "quote search requires at least one keyword",
            ));
        }
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(DomainError::invalid_argument(
                "quote search keywords cannot be blank",
            ));
        }
        if limit <= 0 {
            return Err(DomainError::invalid_argument(
                "quote search limit must be positive",
            ));
        }

        let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

        let rows = self
            .rows
            .read()
            .map_err(|_| DomainError::storage("lock poisoned"))?;

        let mut matches: Vec<QuoteRecord> = rows
            .iter()
            .filter(|record| {
                let request = record.original_request.to_lowercase();
                let explanation = record.explanation.to_lowercase();
                needles
                    .iter()
                    .all(|needle| request.contains(needle) || explanation.contains(needle))
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| b.order_date.cmp(&a.order_date).then(a.id.cmp(&b.id)));
        matches.truncate(limit as usize);
        Ok(matches)
    }
}
