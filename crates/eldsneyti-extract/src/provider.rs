//! The closed set of fuel vendors

use crate::discount::{DiscountPolicy, Precision};
use crate::document::RawDocument;
use crate::error::{ExtractError, Result};
use crate::providers;
use crate::result::ProviderPrices;
use eldsneyti_config::{DiscountTable, StaticTables};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A fuel vendor whose public price listing is extracted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provider {
    Atlantsolia,
    N1,
    Daelan,
    Olis,
    Ob,
    Skeljungur,
    Orkan,
    OrkanX,
}

/// Where and how a provider's raw document is fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// One GET returning the whole document
    Page { url: &'static str },
    /// Priming GET for session cookies, then one form POST per fuel type
    FormPerFuel {
        priming_url: &'static str,
        endpoint: &'static str,
        bensin95_form: &'static str,
        diesel_form: &'static str,
    },
}

impl Provider {
    pub const ALL: [Provider; 8] = [
        Provider::Atlantsolia,
        Provider::N1,
        Provider::Daelan,
        Provider::Olis,
        Provider::Ob,
        Provider::Skeljungur,
        Provider::Orkan,
        Provider::OrkanX,
    ];

    /// Stable identifier used on the command line and in JSON output
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Atlantsolia => "atlantsolia",
            Provider::N1 => "n1",
            Provider::Daelan => "daelan",
            Provider::Olis => "olis",
            Provider::Ob => "ob",
            Provider::Skeljungur => "skeljungur",
            Provider::Orkan => "orkan",
            Provider::OrkanX => "orkan-x",
        }
    }

    /// Brand name as the vendor writes it
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Atlantsolia => "Atlantsolía",
            Provider::N1 => "N1",
            Provider::Daelan => "Dælan",
            Provider::Olis => "Olís",
            Provider::Ob => "ÓB",
            Provider::Skeljungur => "Skeljungur",
            Provider::Orkan => "Orkan",
            Provider::OrkanX => "Orkan X",
        }
    }

    /// Whether prices are published per station rather than nationwide
    pub fn is_per_station(&self) -> bool {
        matches!(self, Provider::Atlantsolia | Provider::OrkanX)
    }

    pub fn source(&self) -> Source {
        match self {
            Provider::Atlantsolia => Source::Page {
                url: "http://atlantsolia.is/stodvarverd.aspx",
            },
            Provider::N1 => Source::FormPerFuel {
                priming_url: "https://www.n1.is/eldsneyti/",
                endpoint: "https://www.n1.is/umbraco/api/fuel/GetSingleFuelPrice",
                bensin95_form: "fuelType=95+Oktan",
                diesel_form: "fuelType=D%C3%ADsel",
            },
            Provider::Daelan => Source::Page {
                url: "https://www.n1.is/umbraco/api/Fuel/GetFuelPriceForDaelan",
            },
            Provider::Olis => Source::Page {
                url: "http://www.olis.is/solustadir/thjonustustodvar/eldsneytisverd/",
            },
            Provider::Ob => Source::Page {
                url: "http://www.ob.is/eldsneytisverd/",
            },
            Provider::Skeljungur | Provider::Orkan => Source::Page {
                url: "http://www.skeljungur.is/einstaklingar/eldsneytisverd/",
            },
            Provider::OrkanX => Source::Page {
                url: "http://www.orkan.is/Orkan-X/Stodvar",
            },
        }
    }

    /// The provider's discount rule, with constants taken from `discounts`
    pub fn discount_policy(&self, discounts: &DiscountTable) -> DiscountPolicy {
        match self {
            Provider::Daelan | Provider::OrkanX => DiscountPolicy::None,
            Provider::Olis | Provider::Ob => DiscountPolicy::Published,
            Provider::N1 => DiscountPolicy::Fixed {
                amount: discounts.n1,
            },
            Provider::Skeljungur => DiscountPolicy::Fixed {
                amount: discounts.skeljungur,
            },
            Provider::Orkan => DiscountPolicy::MinimumTier {
                amount: discounts.orkan_minimum,
                precision: Precision::Exact,
            },
            Provider::Atlantsolia => DiscountPolicy::MinimumTier {
                amount: discounts.atlantsolia_minimum,
                precision: Precision::TruncatedTenths,
            },
        }
    }

    /// Turn an already fetched document into canonical prices
    pub fn parse(&self, document: &RawDocument, tables: &StaticTables) -> Result<ProviderPrices> {
        let policy = self.discount_policy(&tables.discounts);
        debug!("Extracting {} with {:?}", self, policy);

        let prices = match self {
            Provider::Atlantsolia => ProviderPrices::PerStation(providers::atlantsolia::parse(
                document.body(*self)?,
                &tables.stations.atlantsolia,
                &policy,
            )?),
            Provider::OrkanX => ProviderPrices::PerStation(providers::orkan_x::parse(
                document.body(*self)?,
                &tables.stations.orkan_x,
                &policy,
            )?),
            Provider::N1 => {
                let (bensin95, diesel) = document.per_fuel(*self)?;
                ProviderPrices::Global(providers::n1::parse(bensin95, diesel, &policy)?)
            }
            Provider::Daelan => {
                ProviderPrices::Global(providers::daelan::parse(document.body(*self)?, &policy)?)
            }
            Provider::Olis | Provider::Ob => ProviderPrices::Global(providers::gas_price::parse(
                *self,
                document.body(*self)?,
                &policy,
            )?),
            Provider::Skeljungur | Provider::Orkan => ProviderPrices::Global(
                providers::skeljungur::parse(*self, document.body(*self)?, &policy)?,
            ),
        };

        debug!("Extracted {} record(s) for {}", prices.len(), self);
        Ok(prices)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Provider {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Provider::ALL
            .into_iter()
            .find(|provider| provider.as_str() == wanted)
            .ok_or_else(|| ExtractError::UnknownProvider(s.to_string()))
    }
}
