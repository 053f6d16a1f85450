//! Fetch-then-extract through the `DocumentSource` seam
#![cfg(feature = "web")]

use eldsneyti_extract::{
    fetch_prices, DocumentSource, ExtractError, Provider, RawDocument, Result, StaticTables,
};

/// In-memory stand-in for the web fetcher
struct Canned;

#[async_trait::async_trait]
impl DocumentSource for Canned {
    async fn fetch(&self, provider: Provider) -> Result<RawDocument> {
        match provider {
            Provider::N1 => Ok(RawDocument::PerFuel {
                bensin95: "\"199,0\"".to_string(),
                diesel: "\"189,0\"".to_string(),
            }),
            Provider::Daelan => Ok(RawDocument::body_of(
                r#"[{"description":"Dísel","price":"189,9"},{"description":"Bensín","price":"201,1"}]"#,
            )),
            other => Err(ExtractError::Http {
                status: 503,
                message: format!("{} unavailable", other),
            }),
        }
    }
}

#[test]
fn test_fetch_prices_extracts_fetched_document() {
    let tables = StaticTables::builtin().unwrap();
    let n1 = tokio_test::block_on(fetch_prices(&Canned, Provider::N1, &tables)).unwrap();
    let record = n1.as_global().unwrap();
    assert_eq!(record.bensin95, 199.0);
    assert_eq!(record.bensin95_discount, Some(196.0));
    assert_eq!(record.diesel_discount, Some(186.0));
}

#[test]
fn test_one_failure_does_not_stop_others() {
    let tables = StaticTables::builtin().unwrap();
    let outcomes: Vec<_> = Provider::ALL
        .into_iter()
        .map(|provider| tokio_test::block_on(fetch_prices(&Canned, provider, &tables)))
        .collect();

    assert_eq!(outcomes.len(), Provider::ALL.len());
    assert!(outcomes[1].is_ok(), "N1 should still extract");
    assert!(matches!(
        outcomes[2],
        Err(ExtractError::UnexpectedPayloadShape { .. })
    ));
    assert!(matches!(outcomes[0], Err(ExtractError::Http { status: 503, .. })));
}
