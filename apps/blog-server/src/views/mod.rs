//! Server-rendered pages using maud templates.

mod error;
mod layout;
mod posts;

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use maud::Markup;

pub use error::error_page;
pub use layout::BaseLayout;
pub use posts::{home_page, post_page};

/// Wrap rendered markup in an HTML response.
pub fn html_response(status: StatusCode, markup: Markup) -> HttpResponse {
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(markup.into_string())
}
