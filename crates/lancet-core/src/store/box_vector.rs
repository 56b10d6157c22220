//! BoxVectorStore -- object-safe dynamic dispatch wrapper for VectorStore.
//!
//! 1. Define an object-safe `VectorStoreDyn` trait with boxed futures
//! 2. Blanket-impl `VectorStoreDyn` for all `T: VectorStore`
//! 3. `BoxVectorStore` wraps `Box<dyn VectorStoreDyn>` and delegates

use std::future::Future;
use std::pin::Pin;

use lancet_types::config::ConfigDict;
use lancet_types::error::StoreError;
use lancet_types::query::{VectorStoreQuery, VectorStoreQueryResult};
use lancet_types::record::EmbeddingRecord;

use super::vector::VectorStore;

/// Object-safe version of [`VectorStore`] with boxed futures.
///
/// This trait exists solely to enable dynamic dispatch (`dyn VectorStoreDyn`).
/// A blanket implementation is provided for all types implementing `VectorStore`.
/// `from_dict` is left out: constructors cannot be called through a vtable.
pub trait VectorStoreDyn: Send + Sync {
    fn stores_text(&self) -> bool;

    fn config_dict(&self) -> ConfigDict;

    fn add_boxed<'a>(
        &'a self,
        records: &'a [EmbeddingRecord],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, StoreError>> + Send + 'a>>;

    fn query_boxed<'a>(
        &'a self,
        query: &'a VectorStoreQuery,
    ) -> Pin<Box<dyn Future<Output = Result<VectorStoreQueryResult, StoreError>> + Send + 'a>>;
}

/// Blanket implementation: any `VectorStore` automatically implements `VectorStoreDyn`.
impl<T: VectorStore> VectorStoreDyn for T {
    fn stores_text(&self) -> bool {
        VectorStore::stores_text(self)
    }

    fn config_dict(&self) -> ConfigDict {
        VectorStore::config_dict(self)
    }

    fn add_boxed<'a>(
        &'a self,
        records: &'a [EmbeddingRecord],
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, StoreError>> + Send + 'a>> {
        Box::pin(self.add(records))
    }

    fn query_boxed<'a>(
        &'a self,
        query: &'a VectorStoreQuery,
    ) -> Pin<Box<dyn Future<Output = Result<VectorStoreQueryResult, StoreError>> + Send + 'a>>
    {
        Box::pin(self.query(query))
    }
}

/// Type-erased vector store for runtime selection.
///
/// Since `VectorStore` uses RPITIT, it cannot be used as a trait object
/// directly. `BoxVectorStore` provides equivalent methods that delegate
/// to the inner `VectorStoreDyn` trait object.
pub struct BoxVectorStore {
    inner: Box<dyn VectorStoreDyn + Send + Sync>,
}

impl BoxVectorStore {
    /// Wrap a concrete `VectorStore` in a type-erased box.
    pub fn new<T: VectorStore + 'static>(store: T) -> Self {
        Self {
            inner: Box::new(store),
        }
    }

    pub fn stores_text(&self) -> bool {
        self.inner.stores_text()
    }

    pub fn config_dict(&self) -> ConfigDict {
        self.inner.config_dict()
    }

    /// Write embedding records. Returns their ids in input order.
    pub async fn add(&self, records: &[EmbeddingRecord]) -> Result<Vec<String>, StoreError> {
        self.inner.add_boxed(records).await
    }

    /// Run a nearest-neighbor query.
    pub async fn query(
        &self,
        query: &VectorStoreQuery,
    ) -> Result<VectorStoreQueryResult, StoreError> {
        self.inner.query_boxed(query).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use lancet_types::node::{Node, NodeRelationship};

    use super::*;

    /// Brute-force store keeping rows in memory. Scores are squared L2 distances.
    struct MockStore {
        label: String,
        rows: Mutex<Vec<EmbeddingRecord>>,
    }

    impl MockStore {
        fn new(label: &str) -> Self {
            Self {
                label: label.to_string(),
                rows: Mutex::new(Vec::new()),
            }
        }
    }

    impl VectorStore for MockStore {
        fn stores_text(&self) -> bool {
            true
        }

        fn config_dict(&self) -> ConfigDict {
            let mut dict = ConfigDict::new();
            dict.insert("label".into(), self.label.clone().into());
            dict
        }

        async fn add(&self, records: &[EmbeddingRecord]) -> Result<Vec<String>, StoreError> {
            let mut rows = self.rows.lock().unwrap();
            rows.extend_from_slice(records);
            Ok(records.iter().map(|r| r.id.clone()).collect())
        }

        async fn query(
            &self,
            query: &VectorStoreQuery,
        ) -> Result<VectorStoreQueryResult, StoreError> {
            let rows = self.rows.lock().unwrap();
            let mut scored: Vec<(f32, &EmbeddingRecord)> = rows
                .iter()
                .map(|r| {
                    let d = r
                        .embedding
                        .iter()
                        .zip(&query.query_embedding)
                        .map(|(a, b)| (a - b) * (a - b))
                        .sum::<f32>();
                    (d, r)
                })
                .collect();
            scored.sort_by(|a, b| a.0.total_cmp(&b.0));

            let mut result = VectorStoreQueryResult::default();
            for (score, r) in scored.into_iter().take(query.similarity_top_k) {
                let node = Node::new(&r.id, &r.text)
                    .with_relationship(NodeRelationship::Source, &r.doc_id);
                result.push(node, score, r.id.clone());
            }
            Ok(result)
        }

        async fn from_dict(config: &ConfigDict) -> Result<Self, StoreError> {
            let label = config
                .get("label")
                .and_then(|v| v.as_str())
                .ok_or_else(|| StoreError::InvalidConfig("missing field `label`".into()))?;
            Ok(MockStore::new(label))
        }
    }

    fn sample_records() -> Vec<EmbeddingRecord> {
        vec![
            EmbeddingRecord::new("a", "d1", vec![1.0, 0.0], "hello"),
            EmbeddingRecord::new("b", "d2", vec![0.0, 1.0], "world"),
        ]
    }

    #[tokio::test]
    async fn test_box_delegates_add_and_query() {
        let store = BoxVectorStore::new(MockStore::new("m"));
        assert!(store.stores_text());

        let ids = store.add(&sample_records()).await.unwrap();
        assert_eq!(ids, vec!["a", "b"]);

        let result = store
            .query(&VectorStoreQuery::new(vec![1.0, 0.0], 1))
            .await
            .unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.ids, vec!["a"]);
        assert_eq!(result.nodes[0].text, "hello");
        assert_eq!(result.nodes[0].source_doc_id(), Some("d1"));
    }

    #[tokio::test]
    async fn test_box_exposes_config_dict() {
        let store = BoxVectorStore::new(MockStore::new("primary"));
        let dict = store.config_dict();
        assert_eq!(dict["label"], "primary");
    }

    #[tokio::test]
    async fn test_from_dict_rebuilds_store() {
        let original = MockStore::new("copy-me");
        let rebuilt = MockStore::from_dict(&VectorStore::config_dict(&original))
            .await
            .unwrap();
        assert_eq!(rebuilt.label, "copy-me");

        let err = MockStore::from_dict(&ConfigDict::new()).await.err().unwrap();
        assert!(matches!(err, StoreError::InvalidConfig(_)));
    }
}
