//! Store configuration types for Lancet.
//!
//! `LanceStoreConfig` is the whole configuration surface of the LanceDB
//! store. It round-trips through a plain key-value map (`ConfigDict`) so a
//! caller can persist it next to its own index metadata.

use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Plain key-value form of a store configuration.
pub type ConfigDict = serde_json::Map<String, serde_json::Value>;

/// Table used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "vectors";

/// Search fan-out used when none is configured.
pub const DEFAULT_NPROBES: usize = 20;

/// Configuration for a LanceDB-backed vector store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanceStoreConfig {
    /// Connection target: a local directory or a LanceDB URI.
    pub uri: String,

    #[serde(default = "default_table_name")]
    pub table_name: String,

    /// Number of partitions probed per search.
    #[serde(default = "default_nprobes")]
    pub nprobes: usize,

    /// Re-rank `refine_factor * limit` candidates with exact distances.
    #[serde(default)]
    pub refine_factor: Option<u32>,
}

fn default_table_name() -> String {
    DEFAULT_TABLE_NAME.to_string()
}

fn default_nprobes() -> usize {
    DEFAULT_NPROBES
}

impl LanceStoreConfig {
    /// Config for `uri` with every other field at its default.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            table_name: default_table_name(),
            nprobes: default_nprobes(),
            refine_factor: None,
        }
    }

    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = table_name.into();
        self
    }

    pub fn with_nprobes(mut self, nprobes: usize) -> Self {
        self.nprobes = nprobes;
        self
    }

    pub fn with_refine_factor(mut self, refine_factor: Option<u32>) -> Self {
        self.refine_factor = refine_factor;
        self
    }

    /// The four fields as a key-value map. An unset refine factor is `null`.
    pub fn to_dict(&self) -> ConfigDict {
        let mut dict = ConfigDict::new();
        dict.insert("uri".into(), self.uri.clone().into());
        dict.insert("table_name".into(), self.table_name.clone().into());
        dict.insert("nprobes".into(), self.nprobes.into());
        dict.insert(
            "refine_factor".into(),
            self.refine_factor
                .map_or(serde_json::Value::Null, serde_json::Value::from),
        );
        dict
    }

    /// Rebuild a config from [`to_dict`](Self::to_dict) output.
    ///
    /// Unknown keys are ignored and missing optional keys take defaults.
    pub fn from_dict(dict: &ConfigDict) -> Result<Self, StoreError> {
        serde_json::from_value(serde_json::Value::Object(dict.clone()))
            .map_err(|e| StoreError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LanceStoreConfig::new("/tmp/lance");
        assert_eq!(config.table_name, "vectors");
        assert_eq!(config.nprobes, 20);
        assert_eq!(config.refine_factor, None);
    }

    #[test]
    fn test_to_dict_has_exactly_four_keys() {
        let config = LanceStoreConfig::new("/data/db")
            .with_table_name("chunks")
            .with_nprobes(8)
            .with_refine_factor(Some(5));
        let dict = config.to_dict();

        assert_eq!(dict.len(), 4);
        assert_eq!(dict["uri"], "/data/db");
        assert_eq!(dict["table_name"], "chunks");
        assert_eq!(dict["nprobes"], 8);
        assert_eq!(dict["refine_factor"], 5);
    }

    #[test]
    fn test_unset_refine_factor_is_null() {
        let dict = LanceStoreConfig::new("/data/db").to_dict();
        assert!(dict["refine_factor"].is_null());
    }

    #[test]
    fn test_dict_roundtrip() {
        let config = LanceStoreConfig::new("s3://bucket/db")
            .with_table_name("t")
            .with_nprobes(64)
            .with_refine_factor(Some(10));
        let parsed = LanceStoreConfig::from_dict(&config.to_dict()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_dict_fills_defaults_and_ignores_unknown_keys() {
        let mut dict = ConfigDict::new();
        dict.insert("uri".into(), "/data/db".into());
        dict.insert("mode".into(), "overwrite".into());

        let config = LanceStoreConfig::from_dict(&dict).unwrap();
        assert_eq!(config, LanceStoreConfig::new("/data/db"));
    }

    #[test]
    fn test_from_dict_without_uri_fails() {
        let mut dict = ConfigDict::new();
        dict.insert("table_name".into(), "t".into());

        let err = LanceStoreConfig::from_dict(&dict).unwrap_err();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
        assert!(err.to_string().contains("uri"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let toml_str = r#"
uri = "/var/lib/lancet"
table_name = "docs"
refine_factor = 3
"#;
        let config: LanceStoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.uri, "/var/lib/lancet");
        assert_eq!(config.table_name, "docs");
        assert_eq!(config.nprobes, DEFAULT_NPROBES);
        assert_eq!(config.refine_factor, Some(3));
    }
}
