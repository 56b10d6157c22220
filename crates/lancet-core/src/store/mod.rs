//! Vector store abstractions for Lancet.
//!
//! - `VectorStore`: RPITIT trait for concrete store implementations
//! - `BoxVectorStore`: Object-safe wrapper for dynamic dispatch

pub mod box_vector;
pub mod vector;
