//! Skeljungur and Orkan share one page, one price block each

use crate::discount::DiscountPolicy;
use crate::document::Markup;
use crate::error::Result;
use crate::numeric::parse_price;
use crate::provider::Provider;
use crate::result::PriceRecord;

macro_rules! price_block {
    ($block:literal, $cell:literal) => {
        concat!(
            "#st-container > div > div > div > div > div:nth-of-type(2) > div > div",
            " > div:nth-of-type(1) > div:nth-of-type(1) > div:nth-of-type(1) > section > div",
            " > div:nth-of-type(2) > div:nth-of-type(",
            $block,
            ") > div:nth-of-type(",
            $cell,
            ") > h2"
        )
    };
}

const SKELJUNGUR_BENSIN95: &str = price_block!("1", "2");
const SKELJUNGUR_DIESEL: &str = price_block!("1", "4");
const ORKAN_BENSIN95: &str = price_block!("2", "2");
const ORKAN_DIESEL: &str = price_block!("2", "4");

pub(crate) fn parse(provider: Provider, text: &str, policy: &DiscountPolicy) -> Result<PriceRecord> {
    let (bensin95, diesel) = match provider {
        Provider::Orkan => (ORKAN_BENSIN95, ORKAN_DIESEL),
        _ => (SKELJUNGUR_BENSIN95, SKELJUNGUR_DIESEL),
    };
    let markup = Markup::parse(provider, text);

    // Prices read like "209,9 kr."
    let bensin95 = parse_price(&markup.text_at(bensin95)?)?;
    let diesel = parse_price(&markup.text_at(diesel)?)?;

    Ok(PriceRecord::with_policy(bensin95, diesel, policy))
}
