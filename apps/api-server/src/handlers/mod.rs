//! HTTP handlers and route configuration.

mod blog;
mod health;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .route("/blog/", web::post().to(blog::create_blog_post));
}
