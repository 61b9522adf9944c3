//! SQLite repository implementations.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, TransactionTrait};

use quill_core::domain::{BlogPost, NewBlogPost};
use quill_core::error::RepoError;
use quill_core::ports::BlogPostRepository;

use super::entity::post;

/// SQLite blog post repository.
pub struct SqliteBlogPostRepository {
    db: DbConn,
}

impl SqliteBlogPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogPostRepository for SqliteBlogPostRepository {
    async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError> {
        // Transaction scoped to this request: committed on success, rolled
        // back and released when dropped on any failure path.
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;

        let active: post::ActiveModel = draft.into();

        // insert() re-reads the row, so the returned model carries the
        // id the storage engine generated.
        let model = active
            .insert(&txn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        tracing::debug!(post_id = model.id, "Blog post created");

        Ok(model.into())
    }
}
