use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;
use url::form_urlencoded;

use crate::utils::parse_decimal;

/// Ordered key/value pairs of a share link's query string.
///
/// Lookups never fail: a missing, empty or unparseable value yields the
/// caller's default, and malformed values are logged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareParams {
    pairs: Vec<(String, String)>,
}

impl ShareParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a query string; a leading `?` is ignored.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs = form_urlencoded::parse(query.as_bytes())
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        Self { pairs }
    }

    /// Serializes the pairs in insertion order, without a leading `?`.
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends a pair, replacing an earlier value for the same key in place.
    pub fn push(
        &mut self,
        key: &str,
        value: impl Display,
    ) -> &mut Self {
        let value = value.to_string();
        match self.pairs.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key.to_string(), value)),
        }
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First non-empty value for `key`.
    pub fn get(
        &self,
        key: &str,
    ) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(
        &self,
        key: &str,
    ) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Parses `key` with [`FromStr`], or returns `default`.
    pub fn get_or<T: FromStr>(
        &self,
        key: &str,
        default: T,
    ) -> T
    where
        T::Err: Display,
    {
        let Some(raw) = self.get(key) else {
            return default;
        };
        match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                warn!(key, value = raw, "ignoring malformed share value: {e}");
                default
            }
        }
    }

    /// Like [`ShareParams::get_or`] for decimals, accepting Swedish
    /// formatting (`8,44`, `130 000`).
    pub fn decimal_or(
        &self,
        key: &str,
        default: Decimal,
    ) -> Decimal {
        let Some(raw) = self.get(key) else {
            return default;
        };
        parse_decimal(raw).unwrap_or_else(|e| {
            warn!(key, value = raw, "ignoring malformed share value: {e}");
            default
        })
    }

    /// Booleans as `true`/`false` or `1`/`0`.
    pub fn bool_or(
        &self,
        key: &str,
        default: bool,
    ) -> bool {
        let Some(raw) = self.get(key) else {
            return default;
        };
        match raw.trim() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => {
                warn!(key, value = other, "ignoring malformed share value");
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn from_query_strips_question_mark_and_decodes() {
        let params = ShareParams::from_query("?a=1&b=hej%20d%C3%A5&c=x+y");

        assert_eq!(params.get("a"), Some("1"));
        assert_eq!(params.get("b"), Some("hej då"));
        assert_eq!(params.get("c"), Some("x y"));
    }

    #[test]
    fn to_query_keeps_insertion_order() {
        let mut params = ShareParams::new();
        params.push("years", 9).push("loanAmount", 130_000).push("years", 10);

        assert_eq!(params.to_query(), "years=10&loanAmount=130000");
    }

    #[test]
    fn to_query_escapes_reserved_characters() {
        let mut params = ShareParams::new();
        params.push("start", "2026-03-01T20:00:00+00:00");

        let query = params.to_query();

        assert_eq!(query, "start=2026-03-01T20%3A00%3A00%2B00%3A00");
        assert_eq!(ShareParams::from_query(&query), params);
    }

    #[test]
    fn get_or_falls_back_on_missing_empty_and_malformed() {
        let params = ShareParams::from_query("a=&b=abc&c=7");

        assert_eq!(params.get_or("a", 1u32), 1);
        assert_eq!(params.get_or("b", 2u32), 2);
        assert_eq!(params.get_or("c", 3u32), 7);
        assert_eq!(params.get_or("d", 4u32), 4);
    }

    #[test]
    fn get_or_rejects_negative_for_unsigned() {
        let params = ShareParams::from_query("years=-3");

        assert_eq!(params.get_or("years", 9u32), 9);
    }

    #[test]
    fn contains_sees_empty_values() {
        let params = ShareParams::from_query("loanAmount=");

        assert!(params.contains("loanAmount"));
        assert_eq!(params.get("loanAmount"), None);
    }

    #[test]
    fn decimal_or_accepts_swedish_formatting() {
        let params = ShareParams::from_query("r=8%2C44&p=130+000&x=mycket");

        assert_eq!(params.decimal_or("r", dec!(1)), dec!(8.44));
        assert_eq!(params.decimal_or("p", dec!(1)), dec!(130000));
        assert_eq!(params.decimal_or("x", dec!(1)), dec!(1));
    }

    #[test]
    fn bool_or_accepts_words_and_digits() {
        let params = ShareParams::from_query("a=true&b=0&c=ja");

        assert!(params.bool_or("a", false));
        assert!(!params.bool_or("b", true));
        assert!(params.bool_or("c", true));
    }
}
