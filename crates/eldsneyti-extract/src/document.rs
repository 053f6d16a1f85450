//! Raw fetched documents and markup queries

use crate::error::{ExtractError, Result};
use crate::provider::Provider;
use scraper::{ElementRef, Html, Selector};

/// A document as returned by the fetcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawDocument {
    /// Markup or JSON text from a single request
    Body(String),
    /// One response body per fuel type
    PerFuel { bensin95: String, diesel: String },
}

impl RawDocument {
    pub fn body_of(text: impl Into<String>) -> Self {
        RawDocument::Body(text.into())
    }

    pub(crate) fn body(&self, provider: Provider) -> Result<&str> {
        match self {
            RawDocument::Body(text) => Ok(text),
            RawDocument::PerFuel { .. } => Err(ExtractError::payload(
                provider,
                "expected a single document, got one per fuel type",
            )),
        }
    }

    pub(crate) fn per_fuel(&self, provider: Provider) -> Result<(&str, &str)> {
        match self {
            RawDocument::PerFuel { bensin95, diesel } => Ok((bensin95, diesel)),
            RawDocument::Body(_) => Err(ExtractError::payload(
                provider,
                "expected one document per fuel type, got a single document",
            )),
        }
    }

    /// Total size in bytes
    pub fn len(&self) -> usize {
        match self {
            RawDocument::Body(text) => text.len(),
            RawDocument::PerFuel { bensin95, diesel } => bensin95.len() + diesel.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parsed HTML owned by one provider's extraction
pub(crate) struct Markup {
    provider: Provider,
    html: Html,
}

impl Markup {
    pub(crate) fn parse(provider: Provider, text: &str) -> Self {
        Self {
            provider,
            html: Html::parse_document(text),
        }
    }

    /// First element matching `css`, or `DocumentShapeChanged`
    pub(crate) fn select_one(&self, css: &str) -> Result<ElementRef<'_>> {
        let selector = selector(css)?;
        self.html
            .select(&selector)
            .next()
            .ok_or_else(|| ExtractError::shape_changed(self.provider, css))
    }

    /// Trimmed text of the first element matching `css`
    pub(crate) fn text_at(&self, css: &str) -> Result<String> {
        self.select_one(css).map(|element| element_text(&element))
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ExtractError::Parse(format!("invalid selector `{}`: {:?}", css, e)))
}

/// All text below `element`, trimmed
pub(crate) fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Element children of `element`, in document order
pub(crate) fn child_elements<'a>(element: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// Table cells of a row, `th` or `td`
pub(crate) fn row_cells<'a>(row: &ElementRef<'a>) -> Vec<ElementRef<'a>> {
    child_elements(row)
        .into_iter()
        .filter(|cell| matches!(cell.value().name(), "td" | "th"))
        .collect()
}

/// Station name in a table cell: the text of its first child element (the
/// station link), or the cell text when it holds no element
pub(crate) fn station_name(cell: &ElementRef<'_>) -> String {
    match child_elements(cell).first() {
        Some(inner) => element_text(inner),
        None => element_text(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_one_miss_is_shape_change() {
        let markup = Markup::parse(Provider::Olis, "<html><body><p>hi</p></body></html>");
        let err = markup.select_one("#gas-price > span").unwrap_err();
        match err {
            ExtractError::DocumentShapeChanged { provider, selector } => {
                assert_eq!(provider, Provider::Olis);
                assert_eq!(selector, "#gas-price > span");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_text_at_trims() {
        let markup = Markup::parse(Provider::Ob, "<div id=\"a\">\n  209,9 <b>kr.</b> </div>");
        assert_eq!(markup.text_at("#a").unwrap(), "209,9 kr.");
    }

    #[test]
    fn test_station_name_prefers_link() {
        let html = Html::parse_fragment(
            "<table><tr><td><a href=\"#\">Hamraborg</a> <small>opið</small></td></tr></table>",
        );
        let td = selector("td").unwrap();
        let cell = html.select(&td).next().unwrap();
        assert_eq!(station_name(&cell), "Hamraborg");
    }

    #[test]
    fn test_raw_document_kind_mismatch() {
        let doc = RawDocument::body_of("\"201,1\"");
        assert!(matches!(
            doc.per_fuel(Provider::N1),
            Err(ExtractError::UnexpectedPayloadShape { .. })
        ));
        let doc = RawDocument::PerFuel {
            bensin95: "a".into(),
            diesel: "b".into(),
        };
        assert!(doc.body(Provider::Daelan).is_err());
        assert_eq!(doc.len(), 2);
    }
}
