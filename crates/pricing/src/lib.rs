//! `paperdesk-pricing` — bulk discounts and quote-amount rounding.

pub mod discount;
pub mod rounding;

pub use discount::{apply_bulk_discount, DiscountBreakdown, OrderSize};
pub use rounding::round_to_multiple_of_five;
