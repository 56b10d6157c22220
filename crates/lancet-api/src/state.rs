//! Application state wiring the configured vector store.
//!
//! AppState resolves the store configuration (file, then CLI overrides),
//! opens the LanceDB store and holds it behind `BoxVectorStore` so commands
//! only see the generic contract.

use anyhow::Context;

use lancet_core::store::box_vector::BoxVectorStore;
use lancet_infra::config::{default_data_dir, load_store_config};
use lancet_infra::vector::store::LanceDbVectorStore;
use lancet_types::config::LanceStoreConfig;

use crate::cli::StoreArgs;

pub struct AppState {
    pub store: BoxVectorStore,
}

impl AppState {
    /// Resolve configuration and connect to the store.
    pub async fn init(args: &StoreArgs) -> anyhow::Result<Self> {
        let config = resolve_config(args).await;
        tracing::info!(uri = %config.uri, table = %config.table_name, "opening vector store");

        let store = LanceDbVectorStore::new(config.clone())
            .await
            .with_context(|| format!("Failed to open vector store at '{}'", config.uri))?;

        Ok(Self {
            store: BoxVectorStore::new(store),
        })
    }
}

/// Config file values with command-line flags applied on top.
pub async fn resolve_config(args: &StoreArgs) -> LanceStoreConfig {
    let path = args
        .config
        .clone()
        .unwrap_or_else(|| default_data_dir().join("config.toml"));
    let mut config = load_store_config(&path).await;

    if let Some(uri) = &args.uri {
        config.uri = uri.clone();
    }
    if let Some(table) = &args.table {
        config.table_name = table.clone();
    }
    if let Some(nprobes) = args.nprobes {
        config.nprobes = nprobes;
    }
    if args.no_refine_factor {
        config.refine_factor = None;
    } else if args.refine_factor.is_some() {
        config.refine_factor = args.refine_factor;
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_flags_override_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("lancet.toml");
        tokio::fs::write(&path, "uri = \"/from/file\"\ntable_name = \"file_table\"\nnprobes = 3\n")
            .await
            .unwrap();

        let args = StoreArgs {
            config: Some(path),
            table: Some("flag_table".to_string()),
            refine_factor: Some(6),
            ..Default::default()
        };
        let config = resolve_config(&args).await;

        assert_eq!(config.uri, "/from/file");
        assert_eq!(config.table_name, "flag_table");
        assert_eq!(config.nprobes, 3);
        assert_eq!(config.refine_factor, Some(6));
    }

    #[tokio::test]
    async fn test_no_refine_factor_clears_file_value() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("lancet.toml");
        tokio::fs::write(&path, "uri = \"/from/file\"\nrefine_factor = 4\n")
            .await
            .unwrap();

        let args = StoreArgs {
            config: Some(path.clone()),
            ..Default::default()
        };
        assert_eq!(resolve_config(&args).await.refine_factor, Some(4));

        let args = StoreArgs {
            config: Some(path),
            no_refine_factor: true,
            ..Default::default()
        };
        assert_eq!(resolve_config(&args).await.refine_factor, None);
    }

    #[tokio::test]
    async fn test_init_opens_store_at_flag_uri() {
        let tmp = tempfile::TempDir::new().unwrap();
        let uri = tmp.path().join("db").display().to_string();
        let args = StoreArgs {
            config: Some(tmp.path().join("missing.toml")),
            uri: Some(uri.clone()),
            ..Default::default()
        };

        let state = AppState::init(&args).await.unwrap();
        let dict = state.store.config_dict();
        assert_eq!(dict["uri"], uri.as_str());
        assert_eq!(dict["table_name"], "vectors");
    }
}
