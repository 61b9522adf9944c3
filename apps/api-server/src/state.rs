//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::BlogPostRepository;
use quill_infra::database::{self, DatabaseConfig, DbErr, SqliteBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
}

impl AppState {
    /// Connect to storage and build the application state.
    pub async fn new(db_config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = database::connect(db_config).await?;
        let posts: Arc<dyn BlogPostRepository> = Arc::new(SqliteBlogPostRepository::new(db));

        tracing::info!("Application state initialized");

        Ok(Self { posts })
    }
}
