//! Total Computation

use rust_decimal::Decimal;

use crate::items::LineItem;

/// Number of decimal places carried by cart money values.
pub const MONEY_SCALE: u32 = 2;

/// Calculates the cart total as Σ `price × quantity` over all line items.
///
/// Fixed-point decimal arithmetic throughout, rounded to [`MONEY_SCALE`]
/// places, so the same items always produce the same total. An empty item
/// list totals zero.
#[must_use]
pub fn cart_total(items: &[LineItem]) -> Decimal {
    items
        .iter()
        .map(LineItem::line_total)
        .sum::<Decimal>()
        .round_dp(MONEY_SCALE)
}
