//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use inkwell_core::domain::{NewPost, Post};

/// Validated request to create a post. Built by `validation::validate_post_create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreate {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl From<PostCreate> for NewPost {
    fn from(req: PostCreate) -> Self {
        NewPost {
            author: req.author,
            title: req.title,
            content: req.content,
        }
    }
}

/// A post as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date_posted: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.get(),
            author: post.author,
            title: post.title,
            content: post.content,
            date_posted: post.date_posted,
        }
    }
}
