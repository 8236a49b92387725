//! HTTP handlers and route configuration.

mod api;
mod health;
mod pages;

use actix_web::{HttpResponse, web};

use inkwell_core::domain::PostId;
use inkwell_shared::validation::parse_path_int;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
///
/// `/` and `/posts` are two registrations of the same page handler.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::resource("/posts")
                    .route(web::get().to(api::list_posts))
                    .route(web::post().to(api::create_post))
                    .default_service(web::to(method_not_allowed)),
            )
            .service(
                web::resource("/posts/{post_id}")
                    .route(web::get().to(api::get_post))
                    .default_service(web::to(method_not_allowed)),
            ),
    )
    .service(
        web::resource("/")
            .name("home")
            .route(web::get().to(pages::home))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/posts")
            .name("posts")
            .route(web::get().to(pages::home))
            .default_service(web::to(method_not_allowed)),
    )
    .service(
        web::resource("/posts/{post_id}")
            .name("post_page")
            .route(web::get().to(pages::post_detail))
            .default_service(web::to(method_not_allowed)),
    )
    .default_service(web::to(not_found));
}

/// Parse the `{post_id}` segment. Integers that cannot be a post id
/// (zero, negatives, anything past `u64`) are simply not found.
fn post_id_from_path(raw: &str) -> AppResult<PostId> {
    let id = parse_path_int(raw, "post_id")?;
    PostId::try_from(id).map_err(|_| AppError::post_not_found())
}

async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound(Some("Not Found".to_string())))
}

async fn method_not_allowed() -> AppResult<HttpResponse> {
    Err(AppError::MethodNotAllowed)
}
