//! US-locale display formatting for engine outputs.
//!
//! Rounding is half away from zero. A negative value keeps its sign even
//! when it rounds to zero (`-$0`), as browser number formatting does.

use rust_decimal::{Decimal, RoundingStrategy};

/// Default decimals for [`format_percent`].
pub const DEFAULT_PERCENT_DECIMALS: u32 = 2;

/// Default decimals for [`format_number`].
pub const DEFAULT_NUMBER_DECIMALS: u32 = 0;

/// Whole US dollars with thousands separators: `$1,597`, `-$1,235`.
pub fn format_currency(value: Decimal) -> String {
    let (negative, body) = grouped(value, 0);
    if negative {
        format!("-${body}")
    } else {
        format!("${body}")
    }
}

/// Fixed-decimal percentage without grouping: `7.10%`.
pub fn format_percent(value: Decimal, decimals: u32) -> String {
    let (negative, digits) = rounded_digits(value, decimals);
    let sign = if negative { "-" } else { "" };
    format!("{sign}{digits}%")
}

/// Thousands-separated number with exactly `decimals` fraction digits.
pub fn format_number(value: Decimal, decimals: u32) -> String {
    let (negative, body) = grouped(value, decimals);
    if negative {
        format!("-{body}")
    } else {
        body
    }
}

/// Round to `decimals` places and render the magnitude with a fixed scale.
fn rounded_digits(value: Decimal, decimals: u32) -> (bool, String) {
    let mut rounded = value.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);
    let negative = value.is_sign_negative() && !value.is_zero();
    (negative, rounded.abs().to_string())
}

fn grouped(value: Decimal, decimals: u32) -> (bool, String) {
    let (negative, digits) = rounded_digits(value, decimals);
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits.as_str(), None),
    };

    let mut body = String::with_capacity(digits.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            body.push(',');
        }
        body.push(ch);
    }
    if let Some(frac) = frac_part {
        body.push('.');
        body.push_str(frac);
    }

    (negative, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency() {
        assert_eq!(format_currency(dec!(1596.73)), "$1,597");
        assert_eq!(format_currency(dec!(240000)), "$240,000");
        assert_eq!(format_currency(dec!(999.49)), "$999");
        assert_eq!(format_currency(dec!(1234567.5)), "$1,234,568");
        assert_eq!(format_currency(Decimal::ZERO), "$0");
    }

    #[test]
    fn test_currency_negative() {
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,235");
        assert_eq!(format_currency(dec!(-0.4)), "-$0");
    }

    #[test]
    fn test_small_negatives_keep_sign() {
        assert_eq!(format_percent(dec!(-0.001), 2), "-0.00%");
        assert_eq!(format_number(dec!(-0.2), 0), "-0");
        assert_eq!(format_number(dec!(0.2), 0), "0");
    }

    #[test]
    fn test_percent() {
        assert_eq!(format_percent(dec!(7.1), DEFAULT_PERCENT_DECIMALS), "7.10%");
        assert_eq!(format_percent(dec!(3.1003), 1), "3.1%");
        assert_eq!(format_percent(dec!(0.83333), 2), "0.83%");
        assert_eq!(format_percent(dec!(12.345), 2), "12.35%");
        assert_eq!(format_percent(dec!(-4.5), 0), "-5%");
        assert_eq!(format_percent(dec!(1250), 0), "1250%");
    }

    #[test]
    fn test_number() {
        assert_eq!(format_number(dec!(1234567.891), DEFAULT_NUMBER_DECIMALS), "1,234,568");
        assert_eq!(format_number(dec!(1234.5), 2), "1,234.50");
        assert_eq!(format_number(dec!(12), 0), "12");
        assert_eq!(format_number(dec!(-98765.4321), 1), "-98,765.4");
        assert_eq!(format_number(dec!(100000), 0), "100,000");
    }
}
