//! Currency amounts as integer cents.
//!
//! All balances and transaction amounts in this crate are `i64` cents so
//! that deposits and withdrawals are exact: no two-decimal dollar value
//! ever drifts through floating-point rounding.

use thiserror::Error;

/// Largest amount a single form submission accepts: $1,000,000.00.
pub const MAX_AMOUNT: i64 = 100_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("Please enter an amount")]
    Empty,
    #[error("'{0}' is not a valid amount")]
    Invalid(String),
    #[error("Amounts are limited to two decimal places")]
    TooPrecise,
    #[error("Amount must be greater than zero")]
    NotPositive,
    #[error("Amount exceeds the $1,000,000.00 limit")]
    TooLarge,
}

/// Parse a user-entered dollar amount ("500", "500.5", "500.00") into cents.
pub fn parse_amount(input: &str) -> Result<i64, AmountError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AmountError::Empty);
    }
    // Checked up front: "-0.50" would otherwise slip through as dollars "-0".
    if trimmed.starts_with('-') {
        return Err(AmountError::NotPositive);
    }

    let (dollars_part, cents_part) = match trimmed.split_once('.') {
        Some((dollars, cents)) => (dollars, Some(cents)),
        None => (trimmed, None),
    };

    let dollars: i64 = dollars_part
        .parse()
        .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;

    let cents = match cents_part {
        None | Some("") => 0,
        Some(fraction) => {
            if !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(AmountError::Invalid(trimmed.to_string()));
            }
            if fraction.len() > 2 {
                return Err(AmountError::TooPrecise);
            }
            let digits: i64 = fraction
                .parse()
                .map_err(|_| AmountError::Invalid(trimmed.to_string()))?;
            if fraction.len() == 1 {
                digits * 10
            } else {
                digits
            }
        }
    };

    let total = dollars
        .checked_mul(100)
        .and_then(|d| d.checked_add(cents))
        .ok_or(AmountError::TooLarge)?;

    if total <= 0 {
        return Err(AmountError::NotPositive);
    }
    if total > MAX_AMOUNT {
        return Err(AmountError::TooLarge);
    }
    Ok(total)
}

/// Format cents as a grouped decimal string: 1250075 -> "12,500.75".
pub fn format_cents(cents: i64) -> String {
    let negative = cents < 0;
    let cents = cents.unsigned_abs();
    let dollars = cents / 100;
    let remainder = cents % 100;

    let digits = dollars.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{:02}", sign, grouped, remainder)
}

/// Format cents with a leading dollar sign: 1250075 -> "$12,500.75".
pub fn format_usd(cents: i64) -> String {
    format!("${}", format_cents(cents))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_dollars() {
        assert_eq!(parse_amount("500"), Ok(50_000));
        assert_eq!(parse_amount(" 25 "), Ok(2_500));
    }

    #[test]
    fn test_parse_decimal_amounts() {
        assert_eq!(parse_amount("500.00"), Ok(50_000));
        assert_eq!(parse_amount("500.5"), Ok(50_050));
        assert_eq!(parse_amount("0.01"), Ok(1));
        assert_eq!(parse_amount("120.50"), Ok(12_050));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_amount(""), Err(AmountError::Empty));
        assert_eq!(parse_amount("   "), Err(AmountError::Empty));
        assert_eq!(
            parse_amount("abc"),
            Err(AmountError::Invalid("abc".to_string()))
        );
        assert_eq!(
            parse_amount("12.3.4"),
            Err(AmountError::Invalid("12.3.4".to_string()))
        );
        assert_eq!(parse_amount("1.999"), Err(AmountError::TooPrecise));
        assert_eq!(parse_amount("0"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("0.00"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("-5"), Err(AmountError::NotPositive));
        // A negative sign on a zero integer part is still negative.
        assert_eq!(parse_amount("-0.50"), Err(AmountError::NotPositive));
        assert_eq!(parse_amount(" -0.01 "), Err(AmountError::NotPositive));
        assert_eq!(parse_amount("1000000.01"), Err(AmountError::TooLarge));
    }

    #[test]
    fn test_parse_is_exact_for_two_decimal_values() {
        // 5280.42 + 500.00 must come out to exactly 5780.42.
        let balance = parse_amount("5280.42").unwrap();
        let deposit = parse_amount("500.00").unwrap();
        assert_eq!(balance + deposit, parse_amount("5780.42").unwrap());
    }

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(1_250_075), "12,500.75");
        assert_eq!(format_cents(475_025), "4,750.25");
        assert_eq!(format_cents(3_500_000), "35,000.00");
        assert_eq!(format_cents(1), "0.01");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-12_050), "-120.50");
        assert_eq!(format_cents(100_000_000), "1,000,000.00");
        assert_eq!(format_cents(i64::MIN), "-92,233,720,368,547,758.08");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(525_125), "$5,251.25");
    }
}
