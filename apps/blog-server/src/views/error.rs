//! Error page.

use actix_web::http::StatusCode;
use maud::{Markup, html};

use super::BaseLayout;

/// Error page titled with the bare status code.
pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let code = status.as_u16().to_string();
    let content = html! {
        section class="error" {
            h1 class="error-code" { (code) }
            p class="error-message" { (message) }
            p { a href="/" { "Go back home" } }
        }
    };

    BaseLayout::new(&code).render(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_page_shows_code_and_message() {
        let html = error_page(StatusCode::NOT_FOUND, "Post not found").into_string();

        assert!(html.contains("<title>404</title>"));
        assert!(html.contains(r#"<h1 class="error-code">404</h1>"#));
        assert!(html.contains("Post not found"));
    }
}
