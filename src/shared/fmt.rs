//! Money and count formatting for dashboard tiles and order totals.

use rust_decimal::{Decimal, RoundingStrategy};

/// Insert thousands separators into a plain `-?digits(.digits)?` string.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let grouped = integer
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|c| std::str::from_utf8(c).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",");

    match fraction {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

/// Format a monetary amount as `$1,234.50` (two decimals, half-up).
pub fn usd(amount: &Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.2}", rounded.abs());
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${}", group_thousands(&body))
    } else {
        format!("${}", group_thousands(&body))
    }
}

/// Format a count with thousands separators.
pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567.89"), "1,234,567.89");
        assert_eq!(group_thousands("-1234.5"), "-1,234.5");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(&Decimal::ZERO), "$0.00");
        assert_eq!(usd(&Decimal::new(30, 0)), "$30.00");
        assert_eq!(usd(&Decimal::new(123450, 2)), "$1,234.50");
        assert_eq!(usd(&Decimal::new(1005, 3)), "$1.01");
        assert_eq!(usd(&Decimal::new(-500, 2)), "-$5.00");
    }

    #[test]
    fn test_count() {
        assert_eq!(count(42), "42");
        assert_eq!(count(1_000_000), "1,000,000");
    }
}
