//! Dælan: JSON array of `{description, price}` entries

use crate::discount::DiscountPolicy;
use crate::error::{ExtractError, Result};
use crate::numeric::parse_price;
use crate::provider::Provider;
use crate::result::PriceRecord;
use serde::Deserialize;

const BENSIN95_LABEL: &str = "Bensín";
const DIESEL_LABEL: &str = "Dísel";

#[derive(Debug, Deserialize)]
struct FuelEntry {
    description: String,
    price: String,
}

pub(crate) fn parse(text: &str, policy: &DiscountPolicy) -> Result<PriceRecord> {
    let entries: Vec<FuelEntry> = serde_json::from_str(text)
        .map_err(|e| ExtractError::payload(Provider::Daelan, format!("invalid JSON: {}", e)))?;

    let (bensin95, diesel) = match entries.as_slice() {
        [first, second, ..] => (first, second),
        _ => {
            return Err(ExtractError::payload(
                Provider::Daelan,
                format!("expected at least 2 entries, got {}", entries.len()),
            ))
        }
    };
    expect_label(bensin95, BENSIN95_LABEL)?;
    expect_label(diesel, DIESEL_LABEL)?;

    Ok(PriceRecord::with_policy(
        parse_price(&bensin95.price)?,
        parse_price(&diesel.price)?,
        policy,
    ))
}

fn expect_label(entry: &FuelEntry, label: &str) -> Result<()> {
    if entry.description.trim() == label {
        Ok(())
    } else {
        Err(ExtractError::payload(
            Provider::Daelan,
            format!("expected `{}` entry, found `{}`", label, entry.description),
        ))
    }
}
