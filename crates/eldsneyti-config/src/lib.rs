//! # Eldsneyti Config
//!
//! Static data the price extractors consume but do not own:
//!
//! - **Station relations**: per multi-station provider, the vendor's display
//!   name for a station mapped to a vendor-independent [`StationKey`]
//! - **Discount constants**: the flat or minimum-tier discount per provider
//!
//! Both live in a declarative TOML file. A copy is embedded in the crate and
//! a user file at `<config_dir>/eldsneyti/tables.toml` takes precedence.
//!
//! ```rust
//! use eldsneyti_config::StaticTables;
//!
//! let tables = StaticTables::builtin().unwrap();
//! assert_eq!(tables.discounts.atlantsolia_minimum, 3.2);
//! ```

pub mod error;
pub mod tables;

pub use error::{ConfigError, Result};
pub use tables::{DiscountTable, StaticTables, StationKey, StationTable, StationTables};
