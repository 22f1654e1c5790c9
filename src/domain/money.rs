//! Currency formatting for replies.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount as dollars: `$` prefix, thousands separators, exactly two
/// decimal places.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let fixed = format!("{:.2}", rounded.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Add two amounts, capping at [`Decimal::MAX`] instead of overflowing.
///
/// Sale amounts come straight from chat text, so a few absurd posts can
/// exceed the representable range when summed.
#[must_use]
pub fn add_capped(total: Decimal, amount: Decimal) -> Decimal {
    total.checked_add(amount).unwrap_or(Decimal::MAX)
}

/// Sum amounts with [`add_capped`].
#[must_use]
pub fn sum_capped(amounts: impl IntoIterator<Item = Decimal>) -> Decimal {
    amounts.into_iter().fold(Decimal::ZERO, add_capped)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
