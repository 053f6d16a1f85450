//! Orkan X: station table with gaps.
//!
//! Some stations are listed without one or both prices. A missing price is
//! filled with the highest price any other station lists for that fuel, so a
//! gap never reads as cheaper than what the customer may actually pay.

use crate::discount::DiscountPolicy;
use crate::document::{element_text, row_cells, selector, station_name, Markup};
use crate::error::{ExtractError, Result};
use crate::numeric::parse_price;
use crate::provider::Provider;
use crate::result::{PriceMap, PriceRecord};
use eldsneyti_config::StationTable;
use tracing::{debug, warn};

pub(crate) const TABLE: &str = "#content > div > div:nth-of-type(2) > div > table";

/// First cell of the header row
const HEADER_LABEL: &str = "Orkan X";

struct Row {
    name: String,
    bensin95: Option<f64>,
    diesel: Option<f64>,
}

pub(crate) fn parse(text: &str, stations: &StationTable, policy: &DiscountPolicy) -> Result<PriceMap> {
    let rows = read_rows(text)?;
    let fallback = Fallback::from_rows(&rows)?;
    build(rows, &fallback, stations, policy)
}

fn read_rows(text: &str) -> Result<Vec<Row>> {
    let markup = Markup::parse(Provider::OrkanX, text);
    let table = markup.select_one(TABLE)?;
    let tr = selector("tr")?;

    let mut rows = Vec::new();
    for row in table.select(&tr) {
        let cells = row_cells(&row);
        if cells.is_empty() || is_header(&cells) {
            continue;
        }
        if cells.len() < 3 {
            return Err(ExtractError::shape_changed(
                Provider::OrkanX,
                format!("{} tr > td:nth-of-type(3)", TABLE),
            ));
        }
        rows.push(Row {
            name: station_name(&cells[0]),
            bensin95: optional_price(&element_text(&cells[1]))?,
            diesel: optional_price(&element_text(&cells[2]))?,
        });
    }
    Ok(rows)
}

fn is_header(cells: &[scraper::ElementRef<'_>]) -> bool {
    element_text(&cells[0]) == HEADER_LABEL || cells.iter().all(|cell| cell.value().name() == "th")
}

fn optional_price(text: &str) -> Result<Option<f64>> {
    if text.is_empty() {
        Ok(None)
    } else {
        parse_price(text).map(Some)
    }
}

/// Highest listed price per fuel type
struct Fallback {
    bensin95: f64,
    diesel: f64,
}

impl Fallback {
    /// First pass: maxima over the rows that list the price
    fn from_rows(rows: &[Row]) -> Result<Self> {
        let bensin95 = highest(rows.iter().filter_map(|row| row.bensin95));
        let diesel = highest(rows.iter().filter_map(|row| row.diesel));

        match (bensin95, diesel) {
            (Some(bensin95), Some(diesel)) => Ok(Self { bensin95, diesel }),
            (None, _) => Err(ExtractError::shape_changed(
                Provider::OrkanX,
                format!("{} tr > td:nth-of-type(2) (no station lists bensin95)", TABLE),
            )),
            (_, None) => Err(ExtractError::shape_changed(
                Provider::OrkanX,
                format!("{} tr > td:nth-of-type(3) (no station lists diesel)", TABLE),
            )),
        }
    }
}

fn highest(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |max, value| match max {
        Some(max) if max >= value => Some(max),
        _ => Some(value),
    })
}

/// Second pass: resolve stations and fill gaps from the maxima
fn build(
    rows: Vec<Row>,
    fallback: &Fallback,
    stations: &StationTable,
    policy: &DiscountPolicy,
) -> Result<PriceMap> {
    let mut prices = PriceMap::new();
    let mut unknown = Vec::new();

    for row in rows {
        let Some(key) = stations.resolve(&row.name) else {
            unknown.push(row.name);
            continue;
        };

        let bensin95 = row.bensin95.unwrap_or_else(|| {
            warn!("Orkan X {} lists no bensin95, using {}", row.name, fallback.bensin95);
            fallback.bensin95
        });
        let diesel = row.diesel.unwrap_or_else(|| {
            warn!("Orkan X {} lists no diesel, using {}", row.name, fallback.diesel);
            fallback.diesel
        });

        debug!("Orkan X {} ({}): {} / {}", row.name, key, bensin95, diesel);
        prices.insert(key.clone(), PriceRecord::with_policy(bensin95, diesel, policy));
    }

    if !unknown.is_empty() {
        return Err(ExtractError::UnknownStation {
            provider: Provider::OrkanX,
            names: unknown,
            resolved: prices,
        });
    }

    Ok(prices)
}
