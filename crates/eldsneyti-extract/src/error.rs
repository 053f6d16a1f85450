//! Error types for price extraction

use crate::provider::Provider;
use crate::result::PriceMap;
use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while fetching or extracting prices
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Numeral did not parse after stripping known decorations
    #[error("Malformed price: {text:?}")]
    MalformedPrice { text: String },

    /// Station display names missing from the relation table.
    ///
    /// `resolved` holds the stations that did map, so they are not lost.
    #[error("Unknown {provider} station(s): {}", .names.join(", "))]
    UnknownStation {
        provider: Provider,
        names: Vec<String>,
        resolved: PriceMap,
    },

    /// Payload labels, ordering or kind differ from what the provider publishes
    #[error("Unexpected {provider} payload: {detail}")]
    UnexpectedPayloadShape { provider: Provider, detail: String },

    /// An expected node is missing from the document
    #[error("{provider} document changed: nothing matches `{selector}`")]
    DocumentShapeChanged { provider: Provider, selector: String },

    /// Unrecognized provider identifier
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Invalid CSS selector
    #[error("Parse error: {0}")]
    Parse(String),

    /// Network error during fetch
    #[cfg(feature = "web")]
    #[error("Network error: {0}")]
    Network(String),

    /// HTTP error response
    #[cfg(feature = "web")]
    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// Timeout error
    #[cfg(feature = "web")]
    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid URL
    #[cfg(feature = "web")]
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ExtractError {
    pub(crate) fn shape_changed(provider: Provider, selector: impl Into<String>) -> Self {
        ExtractError::DocumentShapeChanged {
            provider,
            selector: selector.into(),
        }
    }

    pub(crate) fn payload(provider: Provider, detail: impl Into<String>) -> Self {
        ExtractError::UnexpectedPayloadShape {
            provider,
            detail: detail.into(),
        }
    }
}

#[cfg(feature = "web")]
impl From<reqwest::Error> for ExtractError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ExtractError::Http {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            ExtractError::Network(err.to_string())
        }
    }
}

#[cfg(feature = "web")]
impl From<url::ParseError> for ExtractError {
    fn from(err: url::ParseError) -> Self {
        ExtractError::InvalidUrl(err.to_string())
    }
}
