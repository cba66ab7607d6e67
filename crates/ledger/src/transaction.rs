use core::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_core::{DomainError, DomainResult};

/// Kind of ledger entry.
///
/// Exactly two kinds exist. Constructing one from any other tag is an error,
/// never a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Purchase from a supplier: increases stock, decreases cash.
    #[serde(rename = "stock_orders")]
    StockOrder,
    /// Sale to a customer: decreases stock, increases cash.
    #[serde(rename = "sales")]
    Sale,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StockOrder => "stock_orders",
            Self::Sale => "sales",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stock_orders" => Ok(Self::StockOrder),
            "sales" => Ok(Self::Sale),
            other => Err(DomainError::InvalidTransactionKind(other.to_string())),
        }
    }
}

impl core::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Monotonic, store-assigned transaction identifier.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TransactionId(pub u64);

impl core::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A validated transaction not yet assigned an id.
///
/// The ledger store assigns identifiers during append; this is the
/// pre-commit shape callers construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransaction {
    pub item_name: String,
    pub kind: TransactionKind,
    pub quantity: u32,
    /// Total amount for the whole transaction, NOT a unit price.
    pub total_price: Decimal,
    pub date: NaiveDate,
}

impl PendingTransaction {
    /// Validate and build a pending transaction.
    ///
    /// `quantity` must be strictly positive; `total_price` must not be
    /// negative. No referential stock check happens here: a Sale with no
    /// prior matching StockOrder is accepted and clamps to zero at read time.
    pub fn new(
        item_name: impl Into<String>,
        kind: TransactionKind,
        quantity: i64,
        total_price: Decimal,
        date: NaiveDate,
    ) -> DomainResult<Self> {
        let item_name = item_name.into();
        if item_name.trim().is_empty() {
            return Err(DomainError::invalid_argument(
                "transaction item name cannot be empty",
            ));
        }
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        let quantity =
            u32::try_from(quantity).map_err(|_| DomainError::InvalidQuantity(quantity))?;
        if total_price < Decimal::ZERO {
            return Err(DomainError::InvalidPrice(total_price));
        }

        Ok(Self {
            item_name,
            kind,
            quantity,
            total_price,
            date,
        })
    }

    pub(crate) fn commit(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            item_name: self.item_name,
            kind: self.kind,
            quantity: self.quantity,
            total_price: self.total_price,
            date: self.date,
        }
    }
}

/// A committed ledger entry. Immutable once written; the ledger is
/// append-only and has no update or delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub item_name: String,
    pub kind: TransactionKind,
    pub quantity: u32,
    /// Total amount for the whole transaction, NOT a unit price.
    pub total_price: Decimal,
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    #[test]
    fn kind_parses_exactly_two_tags() {
        assert_eq!(
            "stock_orders".parse::<TransactionKind>().unwrap(),
            TransactionKind::StockOrder
        );
        assert_eq!(
            "sales".parse::<TransactionKind>().unwrap(),
            TransactionKind::Sale
        );

        for bad in ["purchase", "SALES", "stock_order", ""] {
            let err = bad.parse::<TransactionKind>().unwrap_err();
            assert_eq!(err, DomainError::InvalidTransactionKind(bad.to_string()));
        }
    }

    #[test]
    fn non_positive_quantity_is_rejected() {
        for quantity in [0, -5] {
            let err = PendingTransaction::new(
                "A4 paper",
                TransactionKind::Sale,
                quantity,
                dec!(10),
                date(),
            )
            .unwrap_err();
            assert_eq!(err, DomainError::InvalidQuantity(quantity));
        }
    }

    #[test]
    fn negative_total_price_is_rejected() {
        let err =
            PendingTransaction::new("A4 paper", TransactionKind::Sale, 10, dec!(-1), date())
                .unwrap_err();
        assert_eq!(err, DomainError::InvalidPrice(dec!(-1)));
    }

    #[test]
    fn zero_total_price_is_allowed() {
        // Giveaways / samples: quantity moves, no cash does.
        let pending =
            PendingTransaction::new("A4 paper", TransactionKind::Sale, 10, dec!(0), date())
                .unwrap();
        assert_eq!(pending.total_price, dec!(0));
    }
}
