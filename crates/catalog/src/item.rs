use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use paperdesk_core::{DomainError, DomainResult};

/// Catalog category for a stocked item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Paper,
    Product,
    LargeFormat,
    Specialty,
}

/// Catalog entry.
///
/// Identity is the exact, case-sensitive item name. Entries are immutable
/// after creation; prices are effectively static for this core (no
/// price-update operation exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    category: Category,
    unit_price: Decimal,
    min_stock_level: u32,
}

impl Item {
    /// Build a validated catalog entry.
    ///
    /// The unit price must be strictly positive; `min_stock_level` may be
    /// zero (an item nobody bothers to replenish).
    pub fn new(
        name: impl Into<String>,
        category: Category,
        unit_price: Decimal,
        min_stock_level: u32,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("item name cannot be empty"));
        }
        if unit_price <= Decimal::ZERO {
            return Err(DomainError::InvalidPrice(unit_price));
        }

        Ok(Self {
            name,
            category,
            unit_price,
            min_stock_level,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn min_stock_level(&self) -> u32 {
        self.min_stock_level
    }
}
