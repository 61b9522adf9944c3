//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//! This crate contains the SQLite persistence layer.

pub mod database;

pub use database::{DatabaseConfig, SqliteBlogPostRepository};
