//! Base layout shared by every page.

use maud::{DOCTYPE, Markup, html};

/// Base page layout builder.
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    /// Layout whose `<title>` is exactly `title`.
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with `content` inside `<main>`.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    title { (self.title) }
                    link rel="stylesheet" href="/static/css/main.css";
                }
                body {
                    (Self::render_header())
                    main class="container" {
                        (content)
                    }
                    (Self::render_footer())
                }
            }
        }
    }

    fn render_header() -> Markup {
        html! {
            header class="site-header" {
                nav class="container" {
                    a class="site-logo" href="/" { "Inkwell" }
                    ul {
                        li { a href="/" { "Home" } }
                        li { a href="/api/posts" { "API" } }
                    }
                }
            }
        }
    }

    fn render_footer() -> Markup {
        html! {
            footer class="site-footer" {
                p { "Inkwell - posts live in memory and reset on restart." }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_structure() {
        let page = BaseLayout::new("Home").render(html! { h1 { "Hello" } });
        let html = page.into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Home</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/css/main.css">"#));
        assert!(html.contains(r#"<main class="container"><h1>Hello</h1></main>"#));
    }

    #[test]
    fn test_title_is_escaped() {
        let html = BaseLayout::new("<script>").render(html! {}).into_string();
        assert!(html.contains("<title>&lt;script&gt;</title>"));
    }
}
