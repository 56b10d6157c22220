//! Infrastructure layer for Lancet.
//!
//! Contains the LanceDB implementation of the `VectorStore` trait defined in
//! `lancet-core`, the Arrow schema of the embeddings table, and the TOML
//! configuration loader.

pub mod config;
pub mod vector;
