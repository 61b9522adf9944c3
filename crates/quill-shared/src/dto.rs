//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use quill_core::domain::BlogPost;

/// Request to create a new blog post.
///
/// Both fields are required; a body missing either one fails
/// deserialization before any handler code runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub name: String,
    pub description: String,
}

/// Response containing a persisted blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            name: post.name,
            description: post.description,
        }
    }
}
