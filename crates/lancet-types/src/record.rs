use serde::{Deserialize, Serialize};

/// One embedded chunk of text, ready to be written to a vector store.
///
/// Produced by the embedding step of the retrieval framework. The store
/// writes it as a single row and never updates it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingRecord {
    pub id: String,
    /// Id of the parent document the text was taken from.
    pub doc_id: String,
    pub embedding: Vec<f32>,
    pub text: String,
}

impl EmbeddingRecord {
    pub fn new(
        id: impl Into<String>,
        doc_id: impl Into<String>,
        embedding: Vec<f32>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            doc_id: doc_id.into(),
            embedding,
            text: text.into(),
        }
    }
}
