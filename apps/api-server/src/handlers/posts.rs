//! Post handlers.
//!
//! Each handler names its query type in its signature; the
//! [`ValidatedQuery`] extractor rejects bad input with a 400 before any store
//! access.

use actix_web::{HttpResponse, web};

use postboard_core::domain::Post;
use postboard_core::DomainError;
use postboard_shared::{EditPostQuery, NewPostQuery, PostIdQuery, PostResponse};

use crate::middleware::error::AppResult;
use crate::middleware::params::ValidatedQuery;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse::new(post.id, post.content, post.likes, post.created, post.removed)
}

fn ok(post: Post) -> HttpResponse {
    HttpResponse::Ok().json(to_response(post))
}

/// ANY /posts.get
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(to_response)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// ANY /posts.getById?id=
pub async fn get_by_id(
    state: web::Data<AppState>,
    query: ValidatedQuery<PostIdQuery>,
) -> AppResult<HttpResponse> {
    let id = query.id;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "post",
            id,
        })?;

    Ok(ok(post))
}

/// ANY /posts.post?content=
pub async fn create(
    state: web::Data<AppState>,
    query: ValidatedQuery<NewPostQuery>,
) -> AppResult<HttpResponse> {
    let NewPostQuery { content } = query.into_inner();

    let post = state.posts.create(content).await?;
    tracing::info!(post_id = post.id, "Post created");

    Ok(ok(post))
}

/// ANY /posts.edit?id=&content=
pub async fn edit(
    state: web::Data<AppState>,
    query: ValidatedQuery<EditPostQuery>,
) -> AppResult<HttpResponse> {
    let EditPostQuery { id, content } = query.into_inner();

    Ok(ok(state.posts.edit(id, content).await?))
}

/// ANY /posts.delete?id=
pub async fn delete(
    state: web::Data<AppState>,
    query: ValidatedQuery<PostIdQuery>,
) -> AppResult<HttpResponse> {
    let id = query.id;

    state.posts.soft_delete(id).await?;
    tracing::info!(post_id = id, "Post removed");

    Ok(HttpResponse::NoContent().finish())
}

/// ANY /posts.restore?id=
pub async fn restore(
    state: web::Data<AppState>,
    query: ValidatedQuery<PostIdQuery>,
) -> AppResult<HttpResponse> {
    let id = query.id;

    let post = state.posts.restore(id).await?;
    tracing::info!(post_id = id, "Post restored");

    Ok(ok(post))
}

/// ANY /posts.like?id=
pub async fn like(
    state: web::Data<AppState>,
    query: ValidatedQuery<PostIdQuery>,
) -> AppResult<HttpResponse> {
    Ok(ok(state.posts.like(query.id).await?))
}

/// ANY /posts.dislike?id=
pub async fn dislike(
    state: web::Data<AppState>,
    query: ValidatedQuery<PostIdQuery>,
) -> AppResult<HttpResponse> {
    Ok(ok(state.posts.dislike(query.id).await?))
}
