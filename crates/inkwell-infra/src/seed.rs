//! Posts loaded at startup.

use inkwell_core::domain::{Post, PostId};

/// The two posts every fresh process starts with.
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post {
            id: PostId::new(1),
            author: "Elon Musk".to_string(),
            title: "FastAPI is Awesome".to_string(),
            content: "This framework is really easy to use and super fast.".to_string(),
            date_posted: "Feb 09, 2026".to_string(),
        },
        Post {
            id: PostId::new(2),
            author: "Donald Trump".to_string(),
            title: "Python is Great for Web Development".to_string(),
            content: "Python is a great language for web development, and FastAPI makes it even better.".to_string(),
            date_posted: "Feb 07, 2026".to_string(),
        },
    ]
}
