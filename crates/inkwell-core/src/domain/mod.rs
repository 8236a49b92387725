//! Domain entities - the core business objects.

mod post;

pub use post::{DATE_FORMAT, NewPost, Post, PostId, format_post_date};
