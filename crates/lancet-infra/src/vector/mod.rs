//! Vector database infrastructure.
//!
//! Provides LanceDB connection management and the `VectorStore`
//! implementation. Arrow schemas define the table structure.

pub mod lance;
pub mod schema;
pub mod store;
