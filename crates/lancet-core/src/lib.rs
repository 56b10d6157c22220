//! Vector store trait definitions for Lancet.
//!
//! This crate defines the "port" (the `VectorStore` trait) that the
//! infrastructure layer implements. It depends only on `lancet-types` --
//! never on `lancet-infra` or any database/IO crate.

pub mod store;
