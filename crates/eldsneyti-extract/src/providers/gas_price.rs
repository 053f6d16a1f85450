//! Olís and ÓB: prices and discounted prices as spans of `#gas-price`

use crate::discount::DiscountPolicy;
use crate::document::Markup;
use crate::error::Result;
use crate::numeric::parse_price;
use crate::provider::Provider;
use crate::result::PriceRecord;

/// Selectors for bensin95, diesel and their discounted prices
struct Layout {
    bensin95: &'static str,
    diesel: &'static str,
    bensin95_discount: &'static str,
    diesel_discount: &'static str,
}

const OLIS: Layout = Layout {
    bensin95: "#gas-price > span:nth-of-type(1)",
    diesel: "#gas-price > span:nth-of-type(2)",
    bensin95_discount: "#gas-price > span:nth-of-type(4)",
    diesel_discount: "#gas-price > span:nth-of-type(5)",
};

const OB: Layout = Layout {
    bensin95: "#gas-price > span:nth-of-type(1)",
    diesel: "#gas-price > span:nth-of-type(2)",
    bensin95_discount: "#gas-price > span:nth-of-type(3)",
    diesel_discount: "#gas-price > span:nth-of-type(4)",
};

pub(crate) fn parse(provider: Provider, text: &str, policy: &DiscountPolicy) -> Result<PriceRecord> {
    let layout = if provider == Provider::Ob { &OB } else { &OLIS };
    let markup = Markup::parse(provider, text);

    let bensin95 = parse_price(&markup.text_at(layout.bensin95)?)?;
    let diesel = parse_price(&markup.text_at(layout.diesel)?)?;

    if !policy.is_published() {
        return Ok(PriceRecord::with_policy(bensin95, diesel, policy));
    }
    Ok(PriceRecord::with_published(
        bensin95,
        diesel,
        parse_price(&markup.text_at(layout.bensin95_discount)?)?,
        parse_price(&markup.text_at(layout.diesel_discount)?)?,
    ))
}
