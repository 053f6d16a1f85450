//! Canonical price records

use crate::discount::DiscountPolicy;
use eldsneyti_config::StationKey;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Prices for one station, or one vendor nationwide, in ISK per litre
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub bensin95: f64,
    pub diesel: f64,
    /// `None` when the vendor has no discount scheme
    pub bensin95_discount: Option<f64>,
    pub diesel_discount: Option<f64>,
}

impl PriceRecord {
    /// Record whose discounts are derived from the base prices
    pub fn with_policy(bensin95: f64, diesel: f64, policy: &DiscountPolicy) -> Self {
        Self {
            bensin95,
            diesel,
            bensin95_discount: policy.apply(bensin95),
            diesel_discount: policy.apply(diesel),
        }
    }

    /// Record whose discounted prices are published next to the base prices
    pub fn with_published(
        bensin95: f64,
        diesel: f64,
        bensin95_discount: f64,
        diesel_discount: f64,
    ) -> Self {
        Self {
            bensin95,
            diesel,
            bensin95_discount: Some(bensin95_discount),
            diesel_discount: Some(diesel_discount),
        }
    }

    pub fn has_discount(&self) -> bool {
        self.bensin95_discount.is_some() && self.diesel_discount.is_some()
    }
}

/// Per-station prices. Ordered by key so repeated runs serialize identically.
pub type PriceMap = BTreeMap<StationKey, PriceRecord>;

/// What one provider extraction yields
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProviderPrices {
    /// One price for the whole vendor
    Global(PriceRecord),
    /// Prices keyed by station
    PerStation(PriceMap),
}

impl ProviderPrices {
    pub fn as_global(&self) -> Option<&PriceRecord> {
        match self {
            ProviderPrices::Global(record) => Some(record),
            ProviderPrices::PerStation(_) => None,
        }
    }

    pub fn as_per_station(&self) -> Option<&PriceMap> {
        match self {
            ProviderPrices::Global(_) => None,
            ProviderPrices::PerStation(map) => Some(map),
        }
    }

    /// Number of records carried
    pub fn len(&self) -> usize {
        match self {
            ProviderPrices::Global(_) => 1,
            ProviderPrices::PerStation(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_discounts_serialize_as_null() {
        let record = PriceRecord::with_policy(201.1, 189.9, &DiscountPolicy::None);
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "bensin95": 201.1,
                "diesel": 189.9,
                "bensin95_discount": null,
                "diesel_discount": null,
            })
        );
        assert!(!record.has_discount());
    }

    #[test]
    fn test_global_serializes_as_plain_record() {
        let record = PriceRecord::with_published(210.0, 200.0, 205.0, 195.0);
        let prices = ProviderPrices::Global(record);
        let json = serde_json::to_value(&prices).unwrap();
        assert_eq!(json["bensin95_discount"], 205.0);
        assert_eq!(prices.len(), 1);
        assert!(prices.as_per_station().is_none());
    }
}
