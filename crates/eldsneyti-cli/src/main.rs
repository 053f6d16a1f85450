//! Current Icelandic fuel prices as JSON
//!
//! Subcommands:
//! - `fetch` - fetch every selected vendor and extract its prices
//! - `parse` - extract prices from saved documents, no network
//! - `providers` - list provider identifiers
//!
//! Output is a JSON object keyed by provider identifier. A provider that
//! fails is reported as `{"error": "..."}` and never stops the others.
//! Logs go to stderr; set `RUST_LOG=debug` to see every parsed row.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use eldsneyti_config::StaticTables;
use eldsneyti_extract::{
    fetch_prices, FetchConfig, Provider, ProviderPrices, RawDocument, WebFetcher,
};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "eldsneyti")]
#[command(about = "Current Icelandic fuel prices in one schema")]
struct Args {
    /// Station and discount tables (default: user config dir, then built-in)
    #[arg(long, global = true)]
    tables: Option<PathBuf>,

    /// Pretty-print JSON
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch prices from the vendors' sites
    Fetch {
        /// Provider to fetch, repeatable (default: all)
        #[arg(short, long = "provider")]
        providers: Vec<Provider>,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout: u64,
    },
    /// Extract prices from saved documents
    Parse {
        #[arg(short, long)]
        provider: Provider,

        /// Saved page or payload; for n1 the bensin95 response
        #[arg(short, long)]
        input: PathBuf,

        /// Saved diesel response (n1 only)
        #[arg(long)]
        diesel_input: Option<PathBuf>,
    },
    /// List provider identifiers
    Providers,
}

fn load_tables(path: Option<&Path>) -> Result<StaticTables> {
    let tables = match path {
        Some(path) => StaticTables::load(path)
            .with_context(|| format!("loading tables from {}", path.display()))?,
        None => StaticTables::load_or_builtin().context("loading static tables")?,
    };
    Ok(tables)
}

/// JSON for one provider: its prices, or the reason it failed
fn outcome_json(
    provider: Provider,
    outcome: eldsneyti_extract::Result<ProviderPrices>,
) -> Result<Value> {
    match outcome {
        Ok(prices) => {
            info!("{}: {} record(s)", provider, prices.len());
            Ok(serde_json::to_value(&prices)?)
        }
        Err(err) => {
            error!("{}: {}", provider, err);
            Ok(json!({ "error": err.to_string() }))
        }
    }
}

async fn fetch_all(providers: Vec<Provider>, timeout: u64, tables: &StaticTables) -> Result<Value> {
    let fetcher = WebFetcher::new(FetchConfig::default().with_timeout(timeout))?;
    let providers = if providers.is_empty() {
        Provider::ALL.to_vec()
    } else {
        providers
    };

    let mut output = Map::new();
    for provider in providers {
        info!("Fetching {}", provider);
        let outcome = fetch_prices(&fetcher, provider, tables).await;
        output.insert(provider.as_str().to_string(), outcome_json(provider, outcome)?);
    }
    Ok(Value::Object(output))
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn parse_saved(
    provider: Provider,
    input: &Path,
    diesel_input: Option<&Path>,
    tables: &StaticTables,
) -> Result<Value> {
    let document = match (provider, diesel_input) {
        (Provider::N1, Some(diesel)) => RawDocument::PerFuel {
            bensin95: read(input)?,
            diesel: read(diesel)?,
        },
        (Provider::N1, None) => bail!("n1 needs --diesel-input with the diesel response"),
        (_, Some(_)) => bail!("--diesel-input only applies to n1"),
        (_, None) => RawDocument::Body(read(input)?),
    };

    let outcome = provider.parse(&document, tables);
    let mut output = Map::new();
    output.insert(provider.as_str().to_string(), outcome_json(provider, outcome)?);
    Ok(Value::Object(output))
}

fn print(value: &Value, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let output = match args.command {
        Command::Providers => {
            for provider in Provider::ALL {
                println!("{:<12} {}", provider.as_str(), provider.display_name());
            }
            return Ok(());
        }
        Command::Fetch { providers, timeout } => {
            let tables = load_tables(args.tables.as_deref())?;
            fetch_all(providers, timeout, &tables).await?
        }
        Command::Parse {
            provider,
            input,
            diesel_input,
        } => {
            let tables = load_tables(args.tables.as_deref())?;
            parse_saved(provider, &input, diesel_input.as_deref(), &tables)?
        }
    };

    print(&output, args.pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn saved(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_fetch_args_repeat_provider() {
        let args =
            Args::try_parse_from(["eldsneyti", "fetch", "-p", "n1", "--provider", "orkan-x"])
                .unwrap();
        match args.command {
            Command::Fetch { providers, timeout } => {
                assert_eq!(providers, vec![Provider::N1, Provider::OrkanX]);
                assert_eq!(timeout, 30);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_provider_rejected() {
        assert!(Args::try_parse_from(["eldsneyti", "fetch", "-p", "esso"]).is_err());
    }

    #[test]
    fn test_parse_saved_daelan() {
        let file = saved(
            r#"[{"description":"Bensín","price":"201,1"},{"description":"Dísel","price":"189,9"}]"#,
        );
        let tables = StaticTables::builtin().unwrap();
        let value = parse_saved(Provider::Daelan, file.path(), None, &tables).unwrap();
        assert_eq!(
            value,
            json!({
                "daelan": {
                    "bensin95": 201.1,
                    "diesel": 189.9,
                    "bensin95_discount": null,
                    "diesel_discount": null,
                }
            })
        );
    }

    #[test]
    fn test_parse_saved_reports_failure_as_json() {
        let file = saved(r#"[{"description":"Dísel","price":"189,9"}]"#);
        let tables = StaticTables::builtin().unwrap();
        let value = parse_saved(Provider::Daelan, file.path(), None, &tables).unwrap();
        assert!(value["daelan"]["error"].is_string());
    }

    #[test]
    fn test_n1_needs_diesel_input() {
        let file = saved("\"201,1\"");
        let tables = StaticTables::builtin().unwrap();
        assert!(parse_saved(Provider::N1, file.path(), None, &tables).is_err());

        let diesel = saved("\"190,1\"");
        let value = parse_saved(Provider::N1, file.path(), Some(diesel.path()), &tables).unwrap();
        assert_eq!(value["n1"]["diesel"], 190.1);
    }

    #[test]
    fn test_load_tables_from_file() {
        let file = saved(
            r#"
            [discounts]
            n1 = 2.0
            skeljungur = 4.0
            orkan_minimum = 5.0
            atlantsolia_minimum = 3.2

            [stations.atlantsolia]
            [stations.orkan_x]
            "#,
        );
        let tables = load_tables(Some(file.path())).unwrap();
        assert_eq!(tables.discounts.n1, 2.0);
        assert!(tables.stations.orkan_x.is_empty());
    }
}
