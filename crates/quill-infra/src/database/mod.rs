//! Database connection management and the SQLite repository.

mod connections;

pub mod entity;
pub mod sqlite_repo;

pub use connections::{DatabaseConfig, connect};
pub use sea_orm::DbErr;
pub use sqlite_repo::SqliteBlogPostRepository;

#[cfg(test)]
mod tests;
