//! Arrow schema definition for the LanceDB embeddings table.
//!
//! One row per embedding record. The vector width is not fixed in advance:
//! it is taken from the records of the first write.
//!
//! Arrow versions MUST match lancedb's transitive dependency (57.3 for lancedb 0.26).

use std::sync::Arc;

use arrow_schema::{DataType, Field, Schema};

pub const ID_COLUMN: &str = "id";
pub const DOC_ID_COLUMN: &str = "doc_id";
pub const VECTOR_COLUMN: &str = "vector";
pub const TEXT_COLUMN: &str = "text";

/// Column LanceDB appends to vector search results.
pub const DISTANCE_COLUMN: &str = "_distance";

/// Schema for the embeddings table with `dimension`-wide vectors.
pub fn embedding_schema(dimension: i32) -> Schema {
    Schema::new(vec![
        Field::new(ID_COLUMN, DataType::Utf8, false),
        Field::new(DOC_ID_COLUMN, DataType::Utf8, false),
        Field::new(VECTOR_COLUMN, vector_data_type(dimension), false),
        Field::new(TEXT_COLUMN, DataType::Utf8, false),
    ])
}

/// Element field of the vector column.
pub fn vector_item_field() -> Arc<Field> {
    Arc::new(Field::new("item", DataType::Float32, true))
}

fn vector_data_type(dimension: i32) -> DataType {
    DataType::FixedSizeList(vector_item_field(), dimension)
}
