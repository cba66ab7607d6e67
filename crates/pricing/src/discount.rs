use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_core::{DomainError, DomainResult};

use crate::rounding::round_to_multiple_of_five;

/// Order-size tier driving the bulk discount rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSize {
    Small,
    Medium,
    Large,
}

impl OrderSize {
    /// Flat discount rate for the tier.
    pub fn discount_rate(self) -> Decimal {
        match self {
            // 5%, 10%, 15%
            Self::Small => Decimal::new(5, 2),
            Self::Medium => Decimal::new(10, 2),
            Self::Large => Decimal::new(15, 2),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    /// Lenient tag parse for caller-supplied classifications.
    ///
    /// Trims and lowercases; any unrecognized tag falls back to `Small`, the
    /// most conservative discount, rather than failing the quote.
    pub fn from_tag_lenient(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "medium" => Self::Medium,
            "large" => Self::Large,
            "small" => Self::Small,
            other => {
                if !other.is_empty() {
                    tracing::warn!(tag = other, "unrecognized order size, assuming small");
                }
                Self::Small
            }
        }
    }
}

impl core::fmt::Display for OrderSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full arithmetic trace of one discount application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    pub base_price: Decimal,
    pub order_size: OrderSize,
    pub discount_rate: Decimal,
    /// Rounded to cents.
    pub discount_amount: Decimal,
    /// Always a multiple of 5.
    pub final_price: Decimal,
}

/// Apply the tier's flat discount to a non-negative base price.
///
/// The discount amount is rounded to cents; the final price is base minus
/// discount, then rounded to the nearest multiple of 5 (ties away from
/// zero) so quotes present as clean figures. On small bases the rounding
/// can push the final price above the base price; that is the rounding
/// policy working as documented, not a bug.
pub fn apply_bulk_discount(
    base_price: Decimal,
    order_size: OrderSize,
) -> DomainResult<DiscountBreakdown> {
    if base_price < Decimal::ZERO {
        return Err(DomainError::InvalidPrice(base_price));
    }

    let discount_rate = order_size.discount_rate();
    let discount_amount = (base_price * discount_rate).round_dp(2);
    let final_price = round_to_multiple_of_five(base_price - discount_amount);

    Ok(DiscountBreakdown {
        base_price,
        order_size,
        discount_rate,
        discount_amount,
        final_price,
    })
}
