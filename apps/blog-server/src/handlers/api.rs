//! JSON API handlers.

use actix_web::{HttpResponse, web};

use inkwell_shared::dto::PostResponse;
use inkwell_shared::validation::validate_post_create;

use super::post_id_from_path;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state
        .posts
        .list()
        .await?
        .into_iter()
        .map(PostResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(posts))
}

/// POST /api/posts
///
/// The body is read raw so that every structural problem is reported,
/// not just the first one serde would stop at.
pub async fn create_post(state: web::Data<AppState>, body: web::Bytes) -> AppResult<HttpResponse> {
    let req = validate_post_create(&body)?;
    let post = state.posts.append(req.into()).await?;

    tracing::info!(post_id = %post.id, author = %post.author, "Post created");

    Ok(HttpResponse::Created().json(PostResponse::from(post)))
}

/// GET /api/posts/{post_id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = post_id_from_path(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(PostResponse::from(post)))
}
