//! Fetching provider documents over HTTP

use crate::config::FetchConfig;
use crate::document::RawDocument;
use crate::error::{ExtractError, Result};
use crate::provider::{Provider, Source};
use crate::DocumentSource;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, ORIGIN, REFERER};
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Fetches raw provider documents with one shared cookie-aware client
pub struct WebFetcher {
    config: FetchConfig,
    client: Client,
}

impl WebFetcher {
    /// Create a new web fetcher with the given configuration
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .cookie_store(true)
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    async fn get(&self, url: &str) -> Result<String> {
        let url = Url::parse(url)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        self.body(response).await
    }

    /// XHR-style form POST, as the vendor's own page sends it
    async fn post_form(&self, endpoint: &str, referer: &str, form: &'static str) -> Result<String> {
        let url = Url::parse(endpoint)?;
        let origin = url.origin().ascii_serialization();
        debug!("POST {} ({})", url, form);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, &self.config.accept_language)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header(ORIGIN, origin)
            .header(REFERER, referer)
            .header("X-Requested-With", "XMLHttpRequest")
            .body(form)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;

        self.body(response).await
    }

    async fn body(&self, response: Response) -> Result<String> {
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::Http {
                status: status.as_u16(),
                message: status.to_string(),
            });
        }
        response.text().await.map_err(|e| self.request_error(e))
    }

    fn request_error(&self, err: reqwest::Error) -> ExtractError {
        if err.is_timeout() {
            ExtractError::Timeout(self.config.timeout_secs)
        } else {
            err.into()
        }
    }
}

#[async_trait::async_trait]
impl DocumentSource for WebFetcher {
    async fn fetch(&self, provider: Provider) -> Result<RawDocument> {
        let document = match provider.source() {
            Source::Page { url } => RawDocument::Body(self.get(url).await?),
            Source::FormPerFuel {
                priming_url,
                endpoint,
                bensin95_form,
                diesel_form,
            } => {
                // Sets the session cookies the endpoint expects
                self.get(priming_url).await?;
                let bensin95 = self.post_form(endpoint, priming_url, bensin95_form).await?;
                let diesel = self.post_form(endpoint, priming_url, diesel_form).await?;
                RawDocument::PerFuel { bensin95, diesel }
            }
        };

        debug!("Fetched {} bytes for {}", document.len(), provider);
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_config() {
        let fetcher = WebFetcher::new(FetchConfig::default().with_timeout(5)).unwrap();
        assert_eq!(fetcher.config().timeout_secs, 5);
    }

    #[test]
    fn test_every_source_url_parses() {
        for provider in Provider::ALL {
            match provider.source() {
                Source::Page { url } => {
                    Url::parse(url).unwrap();
                }
                Source::FormPerFuel {
                    priming_url,
                    endpoint,
                    ..
                } => {
                    Url::parse(priming_url).unwrap();
                    Url::parse(endpoint).unwrap();
                }
            }
        }
    }
}
