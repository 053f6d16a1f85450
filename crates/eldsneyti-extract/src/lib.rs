//! # Eldsneyti Extract
//!
//! Current bensin95 and diesel prices from Icelandic fuel vendors, normalized
//! into one canonical [`PriceRecord`].
//!
//! Each [`Provider`] knows where its prices are published, what its document
//! looks like and which [`DiscountPolicy`] it applies. Extraction itself is a
//! pure function of an already fetched [`RawDocument`] and the
//! [`StaticTables`]; fetching lives behind the `web` feature.
//!
//! ## Features
//!
//! - **Per-provider extractors**: HTML tables, HTML price blocks, a JSON API
//!   and a form-POST endpoint
//! - **Station identity**: per-station prices keyed by [`StationKey`] from a
//!   declarative relation table
//! - **Fail fast**: layout changes surface as errors, never as wrong prices
//!
//! ## Example
//!
//! ```rust
//! use eldsneyti_extract::{Provider, RawDocument, StaticTables};
//!
//! let tables = StaticTables::builtin().unwrap();
//! let payload = r#"[{"description":"Bensín","price":"201,1"},
//!                   {"description":"Dísel","price":"189,9"}]"#;
//! let prices = Provider::Daelan
//!     .parse(&RawDocument::body_of(payload), &tables)
//!     .unwrap();
//! assert_eq!(prices.as_global().unwrap().bensin95, 201.1);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────────┐
//! │ WebFetcher  │ ──► │   Provider   │ ──► │ ProviderPrices  │
//! │ (HTTP/form) │     │ (parse +     │     │ (record or map) │
//! └─────────────┘     │  discount)   │     └─────────────────┘
//!                     └──────────────┘
//!                            ▲
//!                            │
//!                     ┌──────────────┐
//!                     │ StaticTables │
//!                     └──────────────┘
//! ```

pub mod config;
pub mod discount;
pub mod document;
pub mod error;
pub mod numeric;
pub mod provider;
pub mod result;

mod providers;

#[cfg(feature = "web")]
pub mod web;

pub use config::FetchConfig;
pub use discount::{DiscountPolicy, Precision};
pub use document::RawDocument;
pub use error::{ExtractError, Result};
pub use numeric::parse_price;
pub use provider::{Provider, Source};
pub use result::{PriceMap, PriceRecord, ProviderPrices};

pub use eldsneyti_config::{DiscountTable, StaticTables, StationKey, StationTable};

#[cfg(feature = "web")]
pub use web::WebFetcher;

/// Anything that can hand over a provider's raw document
#[cfg(feature = "web")]
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    /// Retrieve the document(s) the provider's extractor expects
    async fn fetch(&self, provider: Provider) -> Result<RawDocument>;
}

/// Fetch one provider's document and extract its prices
#[cfg(feature = "web")]
pub async fn fetch_prices<S>(
    source: &S,
    provider: Provider,
    tables: &StaticTables,
) -> Result<ProviderPrices>
where
    S: DocumentSource + ?Sized,
{
    let document = source.fetch(provider).await?;
    provider.parse(&document, tables)
}
