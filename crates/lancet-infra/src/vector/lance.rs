//! LanceDB connection wrapper for connection management and table operations.
//!
//! Provides `LanceConnection` which wraps a `lancedb::Connection` and offers
//! the handful of table lifecycle calls the vector store needs: list, open,
//! create-with-data and append.

use arrow_array::{RecordBatch, RecordBatchIterator};

/// LanceDB connection wrapper for table management.
///
/// Holds one long-lived connection. Local targets are plain directory
/// paths; anything with a URI scheme (`s3://`, `db://`, ...) is handed
/// to LanceDB untouched.
pub struct LanceConnection {
    db: lancedb::Connection,
    uri: String,
}

impl LanceConnection {
    /// Open or create a LanceDB database at `uri`.
    ///
    /// Creates the directory first when `uri` is a local path.
    pub async fn connect(uri: &str) -> Result<Self, lancedb::Error> {
        if is_local_path(uri) {
            std::fs::create_dir_all(uri).map_err(|e| lancedb::Error::CreateDir {
                path: uri.to_string(),
                source: e,
            })?;
        }

        let db = lancedb::connect(uri).execute().await?;
        tracing::debug!(uri, "connected to LanceDB");

        Ok(Self {
            db,
            uri: uri.to_string(),
        })
    }

    /// List all table names in the database.
    pub async fn table_names(&self) -> Result<Vec<String>, lancedb::Error> {
        self.db.table_names().execute().await
    }

    /// Check if a table exists in the database.
    pub async fn table_exists(&self, table_name: &str) -> Result<bool, lancedb::Error> {
        Ok(self
            .table_names()
            .await?
            .iter()
            .any(|name| name == table_name))
    }

    pub async fn open_table(&self, table_name: &str) -> Result<lancedb::Table, lancedb::Error> {
        self.db.open_table(table_name).execute().await
    }

    /// Create a table whose schema and first rows come from `batch`.
    pub async fn create_table(
        &self,
        table_name: &str,
        batch: RecordBatch,
    ) -> Result<lancedb::Table, lancedb::Error> {
        let rows = batch.num_rows();
        let schema = batch.schema();
        let reader = RecordBatchIterator::new(vec![Ok(batch)], schema);

        let table = self.db.create_table(table_name, reader).execute().await?;
        tracing::debug!(table = table_name, rows, "created LanceDB table");
        Ok(table)
    }

    /// Append `batch` to an existing table.
    pub async fn append(
        &self,
        table: &lancedb::Table,
        batch: RecordBatch,
    ) -> Result<(), lancedb::Error> {
        let rows = batch.num_rows();
        let schema = batch.schema();
        let reader = RecordBatchIterator::new(vec![Ok(batch)], schema);

        table.add(reader).execute().await?;
        tracing::debug!(table = table.name(), rows, "appended rows");
        Ok(())
    }

    /// Get a reference to the underlying LanceDB connection.
    pub fn connection(&self) -> &lancedb::Connection {
        &self.db
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// True when `uri` names a directory rather than a remote/object-store target.
fn is_local_path(uri: &str) -> bool {
    !uri.contains("://")
}
