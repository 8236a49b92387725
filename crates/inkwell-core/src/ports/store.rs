use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::RepoError;

/// Ordered post storage. Insertion order is ascending id order.
///
/// No update or delete.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts, oldest first.
    async fn list(&self) -> Result<Vec<Post>, RepoError>;

    /// Find a post by id, or `RepoError::NotFound`.
    async fn get(&self, id: PostId) -> Result<Post, RepoError>;

    /// Assign an id and a date to a new post and store it at the end.
    async fn append(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<usize, RepoError>;
}
