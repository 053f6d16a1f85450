//! Icelandic-locale price numerals

use crate::error::{ExtractError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Comma decimal separator, no sign, no grouping
static NUMERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:,[0-9]+)?$").unwrap());

/// Unit suffixes vendors append to prices
const UNIT_SUFFIXES: &[&str] = &["kr.", "kr", "ISK"];

/// Parse a price such as `"201,1"` or `"209,9 kr."` into ISK.
///
/// Every extractor goes through here so all providers round identically.
pub fn parse_price(text: &str) -> Result<f64> {
    let stripped = strip_decorations(text);
    if !NUMERAL.is_match(stripped) {
        return Err(malformed(text));
    }
    let value: f64 = stripped.replace(',', ".").parse().map_err(|_| malformed(text))?;
    if !value.is_finite() {
        return Err(malformed(text));
    }
    Ok(value)
}

fn strip_decorations(text: &str) -> &str {
    let mut rest = text.trim();
    for suffix in UNIT_SUFFIXES {
        if let Some(number) = rest.strip_suffix(suffix) {
            rest = number.trim_end();
            break;
        }
    }
    rest
}

fn malformed(text: &str) -> ExtractError {
    ExtractError::MalformedPrice {
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_decimal() {
        assert_eq!(parse_price("201,1").unwrap(), 201.1);
        assert_eq!(parse_price("189,9").unwrap(), 189.9);
        assert_eq!(parse_price("123,47").unwrap(), 123.47);
    }

    #[test]
    fn test_integer_without_fraction() {
        assert_eq!(parse_price("205").unwrap(), 205.0);
    }

    #[test]
    fn test_unit_suffix_stripped() {
        assert_eq!(parse_price("123,4 kr.").unwrap(), 123.4);
        assert_eq!(parse_price("209,9kr.").unwrap(), 209.9);
        assert_eq!(parse_price("  199,0 kr \n").unwrap(), 199.0);
        assert_eq!(parse_price("210,5 ISK").unwrap(), 210.5);
    }

    #[test]
    fn test_matches_period_substitution() {
        for text in ["0,1", "1,05", "215,3", "999,99", "12"] {
            let expected: f64 = text.replace(',', ".").parse().unwrap();
            assert_eq!(parse_price(text).unwrap(), expected, "{}", text);
        }
    }

    #[test]
    fn test_rejects_other_strings() {
        let bad = [
            "", " ", "kr.", "abc", "201.1", "-201,1", "201,", ",5", "1,2,3", "201,1 USD",
            "2 01,1", "NaN", "inf",
        ];
        for text in bad {
            let err = parse_price(text).unwrap_err();
            assert!(
                matches!(err, ExtractError::MalformedPrice { .. }),
                "expected MalformedPrice for {:?}",
                text
            );
        }
    }
}
