use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const BUILTIN_TABLES: &str = include_str!("../tables.toml");

/// Vendor-independent identifier of one physical station.
///
/// Keys only come out of a [`StationTable`]; there is no public constructor.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationKey(String);

impl StationKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for StationKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for StationKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Relation from a vendor's station display name to its [`StationKey`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationTable(BTreeMap<String, StationKey>);

impl StationTable {
    /// Look up the key for a display name, ignoring surrounding whitespace
    pub fn resolve(&self, display_name: &str) -> Option<&StationKey> {
        self.0.get(display_name.trim())
    }

    /// All keys this table can produce
    pub fn keys(&self) -> impl Iterator<Item = &StationKey> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One relation table per multi-station provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationTables {
    pub atlantsolia: StationTable,
    pub orkan_x: StationTable,
}

/// Named discount constants, in ISK per litre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountTable {
    /// Flat card discount at N1
    pub n1: f64,
    /// Flat company card discount at Skeljungur
    pub skeljungur: f64,
    /// Lowest tier of the Orkan spending-based scheme
    pub orkan_minimum: f64,
    /// Lowest tier of the Atlantsolía pump key scheme
    pub atlantsolia_minimum: f64,
}

/// Everything the extractors read besides the fetched document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticTables {
    pub discounts: DiscountTable,
    pub stations: StationTables,
}

impl StaticTables {
    /// Tables shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_TABLES)
    }

    /// Parse and validate tables from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let tables: Self = toml::from_str(text)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Load tables from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Loaded static tables from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Load `<config_dir>/eldsneyti/tables.toml` if present, else the built-in tables
    pub fn load_or_builtin() -> Result<Self> {
        match Self::user_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Self::builtin(),
        }
    }

    /// Location of the user override file
    pub fn user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("eldsneyti").join("tables.toml"))
    }

    /// Reject constants and keys the extractors could not use
    pub fn validate(&self) -> Result<()> {
        let discounts = [
            ("n1", self.discounts.n1),
            ("skeljungur", self.discounts.skeljungur),
            ("orkan_minimum", self.discounts.orkan_minimum),
            ("atlantsolia_minimum", self.discounts.atlantsolia_minimum),
        ];
        for (name, value) in discounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "discount `{}` must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        let stations = [
            ("atlantsolia", &self.stations.atlantsolia),
            ("orkan_x", &self.stations.orkan_x),
        ];
        for (provider, table) in stations {
            for (name, key) in &table.0 {
                if name.trim().is_empty() || key.as_str().trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "empty station name or key in `stations.{}`",
                        provider
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SMALL: &str = r#"
        [discounts]
        n1 = 3.0
        skeljungur = 4.0
        orkan_minimum = 5.0
        atlantsolia_minimum = 3.2

        [stations.atlantsolia]
        "Akureyri" = "ao_001"

        [stations.orkan_x]
        "Hamraborg" = "ox_003"
    "#;

    #[test]
    fn test_builtin_tables_parse() {
        let tables = StaticTables::builtin().unwrap();
        assert_eq!(tables.discounts.atlantsolia_minimum, 3.2);
        assert_eq!(tables.discounts.n1, 3.0);
        assert_eq!(tables.discounts.skeljungur, 4.0);
        assert!(!tables.stations.atlantsolia.is_empty());
        assert!(!tables.stations.orkan_x.is_empty());
    }

    #[test]
    fn test_resolve_trims_display_name() {
        let tables = StaticTables::from_toml_str(SMALL).unwrap();
        let key = tables.stations.atlantsolia.resolve("  Akureyri\n").unwrap();
        assert_eq!(key, &"ao_001");
        assert!(tables.stations.atlantsolia.resolve("Hamraborg").is_none());
    }

    #[test]
    fn test_negative_discount_rejected() {
        let text = SMALL.replace("n1 = 3.0", "n1 = -1.0");
        let err = StaticTables::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_missing_station_section_is_parse_error() {
        let text = r#"
            [discounts]
            n1 = 3.0
            skeljungur = 4.0
            orkan_minimum = 5.0
            atlantsolia_minimum = 3.2
        "#;
        let err = StaticTables::from_toml_str(text).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_key_rejected() {
        let text = SMALL.replace("\"ox_003\"", "\"  \"");
        let err = StaticTables::from_toml_str(&text).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SMALL.as_bytes()).unwrap();

        let tables = StaticTables::load(file.path()).unwrap();
        assert_eq!(tables.stations.orkan_x.len(), 1);
        assert_eq!(tables.discounts.orkan_minimum, 5.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StaticTables::load(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
