//! HTML page handlers.

use actix_web::{HttpResponse, http::StatusCode, web};

use super::post_id_from_path;
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::{home_page, html_response, post_page};

/// GET / and GET /posts
pub async fn home(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list().await?;
    Ok(html_response(StatusCode::OK, home_page(&posts)))
}

/// GET /posts/{post_id}
pub async fn post_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = post_id_from_path(&path)?;
    let post = state.posts.get(id).await?;
    Ok(html_response(StatusCode::OK, post_page(&post)))
}
