//! Post list and post detail pages.

use maud::{Markup, html};

use inkwell_core::domain::Post;

use super::BaseLayout;

fn post_meta(post: &Post) -> Markup {
    html! {
        p class="post-meta" {
            "By " span class="post-author" { (post.author) }
            " on " time { (post.date_posted) }
        }
    }
}

/// All posts in store order, linking to each detail page.
pub fn home_page(posts: &[Post]) -> Markup {
    let content = html! {
        h1 { "Latest posts" }
        @if posts.is_empty() {
            p class="empty-state" { "No posts yet." }
        } @else {
            @for post in posts {
                article class="post-card" {
                    h2 {
                        a href={ "/posts/" (post.id.get()) } { (post.title) }
                    }
                    (post_meta(post))
                    p class="post-content" { (post.content) }
                }
            }
        }
    };

    BaseLayout::new("Home").render(content)
}

/// A single post; the page title is the shortened post title.
pub fn post_page(post: &Post) -> Markup {
    let title = post.page_title();
    let content = html! {
        article class="post" {
            h1 { (post.title) }
            (post_meta(post))
            div class="post-content" { (post.content) }
        }
        p { a href="/" { "Back to all posts" } }
    };

    BaseLayout::new(&title).render(content)
}
