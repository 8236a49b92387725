//! In-memory post store - the only backend; contents vanish on restart.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use inkwell_core::RepoError;
use inkwell_core::domain::{NewPost, Post, PostId, format_post_date};
use inkwell_core::ports::PostStore;

use crate::seed::seed_posts;

/// Source of the date stamped on new posts.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

struct Inner {
    posts: Vec<Post>,
    /// `None` once the id space is used up.
    next_id: Option<PostId>,
}

/// Ordered in-memory store guarded by an async RwLock.
///
/// Ids come from a counter owned by the store, not from the vector length,
/// and the counter only moves under the write lock.
pub struct InMemoryPostStore {
    inner: RwLock<Inner>,
    clock: Clock,
}

impl InMemoryPostStore {
    /// Empty store; the first post gets id 1.
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Store pre-filled with the startup dataset.
    pub fn seeded() -> Self {
        Self::with_posts(seed_posts())
    }

    /// Store pre-filled with `posts`, kept in the given order.
    /// Numbering continues after the highest existing id.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        let next_id = match posts.iter().map(|p| p.id).max() {
            Some(highest) => highest.next(),
            None => Some(PostId::new(1)),
        };

        Self {
            inner: RwLock::new(Inner { posts, next_id }),
            clock: Arc::new(|| Utc::now().date_naive()),
        }
    }

    /// Replace the clock used for `date_posted`.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let inner = self.inner.read().await;
        Ok(inner.posts.clone())
    }

    async fn get(&self, id: PostId) -> Result<Post, RepoError> {
        let inner = self.inner.read().await;
        inner
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepoError::NotFound { id })
    }

    async fn append(&self, post: NewPost) -> Result<Post, RepoError> {
        let date_posted = format_post_date((self.clock)());

        let mut inner = self.inner.write().await;
        let id = inner.next_id.ok_or(RepoError::IdExhausted)?;
        inner.next_id = id.next();

        let post = post.into_post(id, date_posted);
        inner.posts.push(post.clone());

        tracing::debug!(post_id = %id, total = inner.posts.len(), "Post appended");
        Ok(post)
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.inner.read().await.posts.len())
    }
}
