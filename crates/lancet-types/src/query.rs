//! Query and query-result types for Lancet.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A nearest-neighbor query against a vector store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreQuery {
    pub query_embedding: Vec<f32>,
    /// Upper bound on the number of results.
    #[serde(default = "default_similarity_top_k")]
    pub similarity_top_k: usize,
}

fn default_similarity_top_k() -> usize {
    1
}

impl VectorStoreQuery {
    pub fn new(query_embedding: Vec<f32>, similarity_top_k: usize) -> Self {
        Self {
            query_embedding,
            similarity_top_k,
        }
    }
}

/// Result of a [`VectorStoreQuery`].
///
/// `nodes`, `similarities` and `ids` always have the same length and entry
/// `i` of each describes the same row. Use [`push`](Self::push) to grow it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorStoreQueryResult {
    pub nodes: Vec<Node>,
    pub similarities: Vec<f32>,
    pub ids: Vec<String>,
}

impl VectorStoreQueryResult {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            similarities: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, node: Node, similarity: f32, id: String) {
        self.nodes.push(node);
        self.similarities.push(similarity);
        self.ids.push(id);
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate rows as `(node, similarity, id)`.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, f32, &str)> + '_ {
        self.nodes
            .iter()
            .zip(self.similarities.iter().copied())
            .zip(self.ids.iter())
            .map(|((node, score), id)| (node, score, id.as_str()))
    }
}
