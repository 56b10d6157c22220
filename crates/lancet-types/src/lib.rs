//! Shared domain types for Lancet.
//!
//! This crate contains the types exchanged between the retrieval framework
//! and a vector store: embedding records, nodes, queries, query results,
//! store configuration, and the store error type.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod node;
pub mod query;
pub mod record;
