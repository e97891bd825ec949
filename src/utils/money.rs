//! Currency display and parsing. Display only: computed values stay Decimal
//! throughout the core.

use num_format::{Locale, ToFormattedString};
use rust_decimal::Decimal;

use crate::errors::{AppError, AppResult};

/// Format a monetary amount with thousands grouping, two decimal places and
/// the configured currency symbol: `$1,742.50`, negative as `-$120.00`.
pub fn format_currency(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded < Decimal::ZERO;
    let abs = rounded.abs();

    let text = format!("{:.2}", abs);
    let (int_digits, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let grouped = int_digits
        .parse::<i64>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_digits.to_string());

    format!(
        "{}{}{}.{}",
        if negative { "-" } else { "" },
        symbol,
        grouped,
        cents
    )
}

/// Parse a CLI amount argument into a Decimal.
pub fn parse_amount(s: &str) -> AppResult<Decimal> {
    s.trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidAmount(s.to_string()))
}
