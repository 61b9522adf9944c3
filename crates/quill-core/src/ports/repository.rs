use async_trait::async_trait;

use crate::domain::{BlogPost, NewBlogPost};
use crate::error::RepoError;

/// Blog post repository.
///
/// Only creation is defined for the entity; no read, update or delete
/// operations exist.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Persist a draft and return the stored record with its generated id.
    async fn create(&self, draft: NewBlogPost) -> Result<BlogPost, RepoError>;
}
