//! Domain-level error types.

use thiserror::Error;

use crate::domain::PostId;

/// Store-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Post {id} not found")]
    NotFound { id: PostId },

    #[error("Post id space exhausted")]
    IdExhausted,

    #[error("Storage backend failed: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_the_id() {
        let err = RepoError::NotFound { id: PostId::new(7) };
        assert_eq!(err.to_string(), "Post 7 not found");
    }

    #[test]
    fn test_backend_message_keeps_cause() {
        let err = RepoError::Backend("disk on fire".to_string());
        assert_eq!(err.to_string(), "Storage backend failed: disk on fire");
    }
}
