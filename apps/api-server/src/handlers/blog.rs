//! Blog post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::NewBlogPost;
use quill_shared::dto::{BlogPostResponse, CreateBlogPostRequest};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /blog/
pub async fn create_blog_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input before touching storage
    let draft = NewBlogPost::new(req.name, req.description)?;

    let post = state.posts.create(draft).await?;

    Ok(HttpResponse::Created().json(BlogPostResponse::from(post)))
}
