use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes Swedish-formatted numbers: drops whitespace (including the
/// no-break space used as thousands separator) and turns the decimal comma
/// into a point.
fn normalize_decimal_input(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Parses a string into a [`Decimal`].
///
/// Accepts `"8,44"`, `"8.44"` and `"130 000"`. Empty or whitespace-only
/// input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Groups the integer digits in threes with a space, Swedish style.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a decimal with `dp` decimals, space-grouped thousands and a
/// decimal comma: `1234.5` with `dp = 2` becomes `"1 234,50"`.
pub fn format_swedish(
    value: Decimal,
    dp: u32,
) -> String {
    let rounded = value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let plain = format!("{:.*}", dp as usize, rounded.abs());
    match plain.split_once('.') {
        Some((int, frac)) => format!("{sign}{},{frac}", group_thousands(int)),
        None => format!("{sign}{}", group_thousands(&plain)),
    }
}

/// Money in kronor with öre: `"12 345,67 kr"`.
pub fn format_kronor(value: Decimal) -> String {
    format!("{} kr", format_swedish(value, 2))
}
