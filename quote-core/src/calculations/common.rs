//! Common helpers shared by the pricing and summary code.
//!
//! Prices are whole rupees, but the markup can produce fractions, so
//! display formatting rounds to two places and drops trailing zeros.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount with comma thousands separators and at most two
/// fraction digits, e.g. `961224` becomes `"961,224"`.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use quote_core::calculations::common::format_amount;
///
/// assert_eq!(format_amount(dec!(961224.0)), "961,224");
/// assert_eq!(format_amount(dec!(1234.5)), "1,234.5");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_half_up(value).normalize();
    let digits = rounded.abs().to_string();
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits.as_str(), None),
    };

    let mut out = String::with_capacity(digits.len() + whole.len() / 3 + 1);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats an amount prefixed by a currency label, e.g. `"PKR 961,224"`.
pub fn format_currency(
    currency: &str,
    value: Decimal,
) -> String {
    format!("{currency} {}", format_amount(value))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        assert_eq!(round_half_up(dec!(10.005)), dec!(10.01));
    }

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(dec!(10.004)), dec!(10.00));
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(873840)), "873,840");
        assert_eq!(format_amount(dec!(1234567)), "1,234,567");
    }

    #[test]
    fn format_amount_leaves_small_values_alone() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(999)), "999");
    }

    #[test]
    fn format_amount_drops_trailing_zero_fraction() {
        assert_eq!(format_amount(dec!(961224.00)), "961,224");
    }

    #[test]
    fn format_amount_keeps_significant_fraction() {
        assert_eq!(format_amount(dec!(38500.50)), "38,500.5");
        assert_eq!(format_amount(dec!(1000.126)), "1,000.13");
    }

    #[test]
    fn format_amount_handles_negative_values() {
        assert_eq!(format_amount(dec!(-1500)), "-1,500");
    }

    #[test]
    fn format_currency_prefixes_label() {
        assert_eq!(format_currency("PKR", dec!(135000)), "PKR 135,000");
    }
}
