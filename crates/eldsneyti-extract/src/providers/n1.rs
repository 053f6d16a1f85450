//! N1: one form POST per fuel type, each answering a quoted numeral

use crate::discount::DiscountPolicy;
use crate::error::Result;
use crate::numeric::parse_price;
use crate::result::PriceRecord;

pub(crate) fn parse(bensin95: &str, diesel: &str, policy: &DiscountPolicy) -> Result<PriceRecord> {
    let bensin95 = parse_price(unquote(bensin95))?;
    let diesel = parse_price(unquote(diesel))?;
    Ok(PriceRecord::with_policy(bensin95, diesel, policy))
}

/// The endpoint answers with a JSON string such as `"201,1"`
fn unquote(body: &str) -> &str {
    body.trim().trim_matches('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_bodies() {
        let policy = DiscountPolicy::Fixed { amount: 3.0 };
        let record = parse("\"211,4\"", "\"203,9\"\n", &policy).unwrap();
        assert_eq!(record.bensin95, 211.4);
        assert_eq!(record.diesel, 203.9);
        assert_eq!(record.bensin95_discount, Some(211.4 - 3.0));
        assert_eq!(record.diesel_discount, Some(203.9 - 3.0));
    }

    #[test]
    fn test_unquoted_body_still_parses() {
        let record = parse("211,4", "203,9", &DiscountPolicy::Fixed { amount: 3.0 }).unwrap();
        assert_eq!(record.bensin95, 211.4);
    }
}
