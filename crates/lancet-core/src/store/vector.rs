//! Vector store trait.
//!
//! Defines the contract between the retrieval framework and a vector
//! database: write embedding records, run nearest-neighbor queries, and
//! round-trip the store configuration through a plain map.
//! Implementations (e.g., LanceDB) live in lancet-infra.

use lancet_types::config::ConfigDict;
use lancet_types::error::StoreError;
use lancet_types::query::{VectorStoreQuery, VectorStoreQueryResult};
use lancet_types::record::EmbeddingRecord;

/// Trait for vector-indexed storage with similarity search.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in lancet-infra.
pub trait VectorStore: Send + Sync {
    /// Whether the store keeps node text alongside vectors.
    ///
    /// When true the framework does not need a separate document store to
    /// rebuild nodes from query results.
    fn stores_text(&self) -> bool;

    /// The store configuration as a plain key-value map.
    fn config_dict(&self) -> ConfigDict;

    /// Write embedding records. Returns their ids in input order.
    fn add(
        &self,
        records: &[EmbeddingRecord],
    ) -> impl std::future::Future<Output = Result<Vec<String>, StoreError>> + Send;

    /// Run a nearest-neighbor query.
    ///
    /// Rows come back in the order the backend returns them.
    fn query(
        &self,
        query: &VectorStoreQuery,
    ) -> impl std::future::Future<Output = Result<VectorStoreQueryResult, StoreError>> + Send;

    /// Build a store from a map produced by [`config_dict`](Self::config_dict).
    fn from_dict(
        config: &ConfigDict,
    ) -> impl std::future::Future<Output = Result<Self, StoreError>> + Send
    where
        Self: Sized;
}
