//! LanceDB-backed implementation of the `VectorStore` trait.
//!
//! Every record is one row of a single configured table. Search, indexing
//! and persistence are LanceDB's; this module only shapes rows going in and
//! reconstructs nodes coming out.

use std::sync::Arc;

use arrow_array::{Array, FixedSizeListArray, Float32Array, RecordBatch, StringArray};
use arrow_schema::ArrowError;
use futures_util::TryStreamExt;
use lancedb::query::{ExecutableQuery, QueryBase, Select};

use lancet_core::store::vector::VectorStore;
use lancet_types::config::{ConfigDict, LanceStoreConfig};
use lancet_types::error::StoreError;
use lancet_types::node::{Node, NodeRelationship};
use lancet_types::query::{VectorStoreQuery, VectorStoreQueryResult};
use lancet_types::record::EmbeddingRecord;

use super::lance::LanceConnection;
use super::schema::{
    embedding_schema, vector_item_field, DISTANCE_COLUMN, DOC_ID_COLUMN, ID_COLUMN, TEXT_COLUMN,
};

/// Vector store over one LanceDB table.
///
/// Holds the configuration it was built from and one open connection for
/// its whole lifetime. Tables are opened per call.
pub struct LanceDbVectorStore {
    config: LanceStoreConfig,
    conn: LanceConnection,
}

impl LanceDbVectorStore {
    /// Connect to `config.uri`, creating the database if needed.
    pub async fn new(config: LanceStoreConfig) -> Result<Self, StoreError> {
        let conn = LanceConnection::connect(&config.uri)
            .await
            .map_err(|e| StoreError::Connection {
                uri: config.uri.clone(),
                source: Box::new(e),
            })?;

        Ok(Self { config, conn })
    }

    pub fn config(&self) -> &LanceStoreConfig {
        &self.config
    }

    pub fn connection(&self) -> &LanceConnection {
        &self.conn
    }

    /// Number of rows in the configured table. Zero when it does not exist yet.
    pub async fn count_rows(&self) -> Result<usize, StoreError> {
        if !self
            .conn
            .table_exists(&self.config.table_name)
            .await
            .map_err(StoreError::backend)?
        {
            return Ok(0);
        }

        let table = self
            .conn
            .open_table(&self.config.table_name)
            .await
            .map_err(StoreError::backend)?;
        table.count_rows(None).await.map_err(StoreError::backend)
    }

    /// Build one Arrow batch holding all `records`.
    ///
    /// The vector width is the first record's embedding length. A record of
    /// a different width is an Arrow error, as the column cannot hold it.
    fn build_record_batch(records: &[EmbeddingRecord]) -> Result<RecordBatch, ArrowError> {
        let dimension = records.first().map_or(0, |r| r.embedding.len());

        if let Some(bad) = records.iter().find(|r| r.embedding.len() != dimension) {
            return Err(ArrowError::InvalidArgumentError(format!(
                "embedding for '{}' has {} values, expected {dimension}",
                bad.id,
                bad.embedding.len()
            )));
        }

        let width = i32::try_from(dimension).map_err(|_| {
            ArrowError::InvalidArgumentError(format!("embedding width {dimension} is too large"))
        })?;

        let ids = StringArray::from_iter_values(records.iter().map(|r| r.id.as_str()));
        let doc_ids = StringArray::from_iter_values(records.iter().map(|r| r.doc_id.as_str()));
        let texts = StringArray::from_iter_values(records.iter().map(|r| r.text.as_str()));

        let values = Float32Array::from_iter_values(
            records.iter().flat_map(|r| r.embedding.iter().copied()),
        );
        let vectors = FixedSizeListArray::try_new(vector_item_field(), width, Arc::new(values), None)?;

        RecordBatch::try_new(
            Arc::new(embedding_schema(width)),
            vec![
                Arc::new(ids),
                Arc::new(doc_ids),
                Arc::new(vectors),
                Arc::new(texts),
            ],
        )
    }

    /// Append the rows of one search result batch to `result`.
    fn push_batch_rows(
        batch: &RecordBatch,
        result: &mut VectorStoreQueryResult,
    ) -> Result<(), StoreError> {
        if batch.num_rows() == 0 {
            return Ok(());
        }

        let id_col = string_column(batch, ID_COLUMN)?;
        let doc_id_col = string_column(batch, DOC_ID_COLUMN)?;
        let text_col = string_column(batch, TEXT_COLUMN)?;
        let distance_col = batch
            .column_by_name(DISTANCE_COLUMN)
            .ok_or_else(|| StoreError::missing_column(DISTANCE_COLUMN))?
            .as_any()
            .downcast_ref::<Float32Array>()
            .ok_or_else(|| StoreError::MalformedRow {
                column: DISTANCE_COLUMN.to_string(),
                reason: "is not Float32".to_string(),
            })?;

        for i in 0..batch.num_rows() {
            let id = id_col.value(i).to_string();
            let node = Node::new(id.clone(), text_col.value(i))
                .with_relationship(NodeRelationship::Source, doc_id_col.value(i));
            result.push(node, distance_col.value(i), id);
        }

        Ok(())
    }
}

/// Look up a Utf8 column by name.
fn string_column<'a>(batch: &'a RecordBatch, name: &str) -> Result<&'a StringArray, StoreError> {
    batch
        .column_by_name(name)
        .ok_or_else(|| StoreError::missing_column(name))?
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| StoreError::MalformedRow {
            column: name.to_string(),
            reason: "is not Utf8".to_string(),
        })
}

impl VectorStore for LanceDbVectorStore {
    fn stores_text(&self) -> bool {
        true
    }

    fn config_dict(&self) -> ConfigDict {
        self.config.to_dict()
    }

    async fn add(&self, records: &[EmbeddingRecord]) -> Result<Vec<String>, StoreError> {
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let batch = Self::build_record_batch(records).map_err(StoreError::backend)?;
        let table_name = &self.config.table_name;

        if self
            .conn
            .table_exists(table_name)
            .await
            .map_err(StoreError::backend)?
        {
            let table = self
                .conn
                .open_table(table_name)
                .await
                .map_err(StoreError::backend)?;
            self.conn
                .append(&table, batch)
                .await
                .map_err(StoreError::backend)?;
        } else {
            self.conn
                .create_table(table_name, batch)
                .await
                .map_err(StoreError::backend)?;
        }

        Ok(records.iter().map(|r| r.id.clone()).collect())
    }

    async fn query(&self, query: &VectorStoreQuery) -> Result<VectorStoreQueryResult, StoreError> {
        let table = self
            .conn
            .open_table(&self.config.table_name)
            .await
            .map_err(StoreError::backend)?;

        let mut search = table
            .vector_search(query.query_embedding.as_slice())
            .map_err(StoreError::backend)?
            .select(Select::columns(&[ID_COLUMN, DOC_ID_COLUMN, TEXT_COLUMN]))
            .limit(query.similarity_top_k)
            .nprobes(self.config.nprobes);

        if let Some(factor) = self.config.refine_factor {
            search = search.refine_factor(factor);
        }

        tracing::debug!(
            table = %self.config.table_name,
            top_k = query.similarity_top_k,
            nprobes = self.config.nprobes,
            refine_factor = ?self.config.refine_factor,
            "running vector search"
        );

        let batches: Vec<RecordBatch> = search
            .execute()
            .await
            .map_err(StoreError::backend)?
            .try_collect()
            .await
            .map_err(StoreError::backend)?;

        let rows = batches.iter().map(RecordBatch::num_rows).sum();
        let mut result = VectorStoreQueryResult::with_capacity(rows);
        for batch in &batches {
            Self::push_batch_rows(batch, &mut result)?;
        }

        Ok(result)
    }

    async fn from_dict(config: &ConfigDict) -> Result<Self, StoreError> {
        Self::new(LanceStoreConfig::from_dict(config)?).await
    }
}
