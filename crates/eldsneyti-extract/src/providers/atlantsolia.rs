//! Atlantsolía: one table row per station

use crate::discount::DiscountPolicy;
use crate::document::{child_elements, element_text, row_cells, station_name, Markup};
use crate::error::{ExtractError, Result};
use crate::numeric::parse_price;
use crate::provider::Provider;
use crate::result::{PriceMap, PriceRecord};
use eldsneyti_config::StationTable;
use tracing::debug;

pub(crate) const TABLE_BODY: &str =
    "#content > div > div > div > div:nth-of-type(2) > div > div > table > tbody";

pub(crate) fn parse(text: &str, stations: &StationTable, policy: &DiscountPolicy) -> Result<PriceMap> {
    let markup = Markup::parse(Provider::Atlantsolia, text);
    let body = markup.select_one(TABLE_BODY)?;

    let mut prices = PriceMap::new();
    let mut unknown = Vec::new();

    for row in child_elements(&body) {
        if row.value().name() != "tr" {
            continue;
        }
        let cells = row_cells(&row);
        if cells.iter().all(|cell| cell.value().name() == "th") {
            continue;
        }
        if cells.len() < 3 {
            return Err(ExtractError::shape_changed(
                Provider::Atlantsolia,
                format!("{} > tr > td:nth-of-type(3)", TABLE_BODY),
            ));
        }

        let name = station_name(&cells[0]);
        let bensin95 = parse_price(&element_text(&cells[1]))?;
        let diesel = parse_price(&element_text(&cells[2]))?;

        match stations.resolve(&name) {
            Some(key) => {
                debug!("Atlantsolía {} ({}): {} / {}", name, key, bensin95, diesel);
                prices.insert(key.clone(), PriceRecord::with_policy(bensin95, diesel, policy));
            }
            None => unknown.push(name),
        }
    }

    if !unknown.is_empty() {
        return Err(ExtractError::UnknownStation {
            provider: Provider::Atlantsolia,
            names: unknown,
            resolved: prices,
        });
    }

    Ok(prices)
}
