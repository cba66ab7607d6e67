use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest multiple of 5, ties away from zero.
///
/// Used to present quote totals as clean figures: 12.5 rounds to 15,
/// -12.5 to -15, 11.99 to 10.
pub fn round_to_multiple_of_five(value: Decimal) -> Decimal {
    let five = Decimal::from(5);
    (value / five).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero) * five
}
