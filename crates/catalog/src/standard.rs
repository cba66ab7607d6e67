//! The standard paper-supplies price list.
//!
//! Deterministic seed catalog used by the demo binary and tests. Prices are
//! per sheet for paper types and per unit otherwise.

use rust_decimal::Decimal;

use paperdesk_core::DomainResult;

use crate::catalog::Catalog;
use crate::item::{Category, Item};

/// Default minimum stock levels by category.
const MIN_STOCK_PAPER: u32 = 100;
const MIN_STOCK_PRODUCT: u32 = 50;
const MIN_STOCK_LARGE_FORMAT: u32 = 10;
const MIN_STOCK_SPECIALTY: u32 = 25;

/// (name, category, unit price in cents).
const STANDARD_ITEMS: &[(&str, Category, i64)] = &[
    // Paper types
    ("A4 paper", Category::Paper, 5),
    ("Letter-sized paper", Category::Paper, 6),
    ("Cardstock", Category::Paper, 15),
    ("Colored paper", Category::Paper, 10),
    ("Glossy paper", Category::Paper, 20),
    ("Matte paper", Category::Paper, 18),
    ("Recycled paper", Category::Paper, 8),
    ("Eco-friendly paper", Category::Paper, 12),
    ("Poster paper", Category::Paper, 25),
    ("Banner paper", Category::Paper, 30),
    ("Kraft paper", Category::Paper, 10),
    ("Construction paper", Category::Paper, 7),
    ("Wrapping paper", Category::Paper, 15),
    ("Glitter paper", Category::Paper, 22),
    ("Decorative paper", Category::Paper, 18),
    ("Letterhead paper", Category::Paper, 12),
    ("Legal-size paper", Category::Paper, 8),
    ("Crepe paper", Category::Paper, 5),
    ("Photo paper", Category::Paper, 25),
    ("Uncoated paper", Category::Paper, 6),
    ("Butcher paper", Category::Paper, 10),
    ("Heavyweight paper", Category::Paper, 20),
    ("Standard copy paper", Category::Paper, 4),
    ("Bright-colored paper", Category::Paper, 12),
    ("Patterned paper", Category::Paper, 15),
    // Product types
    ("Paper plates", Category::Product, 10),
    ("Paper cups", Category::Product, 8),
    ("Paper napkins", Category::Product, 2),
    ("Disposable cups", Category::Product, 10),
    ("Table covers", Category::Product, 150),
    ("Envelopes", Category::Product, 5),
    ("Sticky notes", Category::Product, 3),
    ("Notepads", Category::Product, 200),
    ("Invitation cards", Category::Product, 50),
    ("Flyers", Category::Product, 15),
    ("Party streamers", Category::Product, 5),
    ("Decorative adhesive tape (washi tape)", Category::Product, 20),
    ("Paper party bags", Category::Product, 25),
    ("Name tags with lanyards", Category::Product, 75),
    ("Presentation folders", Category::Product, 50),
    // Large-format items
    ("Large poster paper (24x36 inches)", Category::LargeFormat, 100),
    ("Rolls of banner paper (36-inch width)", Category::LargeFormat, 250),
    // Specialty papers
    ("100 lb cover stock", Category::Specialty, 50),
    ("80 lb text paper", Category::Specialty, 40),
    ("250 gsm cardstock", Category::Specialty, 30),
    ("220 gsm poster paper", Category::Specialty, 35),
];

fn default_min_stock(category: Category) -> u32 {
    match category {
        Category::Paper => MIN_STOCK_PAPER,
        Category::Product => MIN_STOCK_PRODUCT,
        Category::LargeFormat => MIN_STOCK_LARGE_FORMAT,
        Category::Specialty => MIN_STOCK_SPECIALTY,
    }
}

/// Build the full standard catalog.
pub fn standard_catalog() -> DomainResult<Catalog> {
    let mut catalog = Catalog::new();
    for &(name, category, cents) in STANDARD_ITEMS {
        let item = Item::new(
            name,
            category,
            Decimal::new(cents, 2),
            default_min_stock(category),
        )?;
        catalog.insert(item)?;
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn standard_catalog_is_complete_and_priced() {
        let catalog = standard_catalog().unwrap();
        assert_eq!(catalog.len(), STANDARD_ITEMS.len());
        assert_eq!(catalog.base_price("A4 paper").unwrap(), dec!(0.05));
        assert_eq!(catalog.base_price("Notepads").unwrap(), dec!(2.00));
        assert_eq!(
            catalog
                .get("Rolls of banner paper (36-inch width)")
                .unwrap()
                .min_stock_level(),
            MIN_STOCK_LARGE_FORMAT
        );
    }
}
