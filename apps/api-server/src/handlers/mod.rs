//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::{HttpRequest, HttpResponse, web};

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// Paths match exactly and every route accepts any HTTP method.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::route().to(health::health_check))
        .route("/posts.get", web::route().to(posts::list))
        .route("/posts.getById", web::route().to(posts::get_by_id))
        .route("/posts.post", web::route().to(posts::create))
        .route("/posts.edit", web::route().to(posts::edit))
        .route("/posts.delete", web::route().to(posts::delete))
        .route("/posts.restore", web::route().to(posts::restore))
        .route("/posts.like", web::route().to(posts::like))
        .route("/posts.dislike", web::route().to(posts::dislike))
        .default_service(web::to(not_found));
}

async fn not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!("no route for {}", req.path())))
}
