//! Application errors and their JSON or HTML rendering.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use inkwell_core::RepoError;
use inkwell_shared::{ErrorBody, ValidationError, ValidationIssue};

use crate::views::{error_page, html_response};

/// Prefix whose errors are JSON when nothing else is configured.
pub const DEFAULT_API_PREFIX: &str = "/api";

/// Message used when an error carries no detail of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred. Please check your request and try again.";

/// Message shown to page visitors instead of structured validation issues.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request. Please check your input and try again.";

/// How an error is rendered for a given request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    Json,
    Html,
}

/// Chooses the error format from the request path.
#[derive(Debug, Clone)]
pub struct ErrorFormatPolicy {
    api_prefixes: Vec<String>,
}

impl ErrorFormatPolicy {
    pub fn new(api_prefixes: Vec<String>) -> Self {
        Self { api_prefixes }
    }

    /// JSON for paths under any API prefix, HTML otherwise.
    pub fn format_for(&self, path: &str) -> ErrorFormat {
        if self.api_prefixes.iter().any(|p| path.starts_with(p.as_str())) {
            ErrorFormat::Json
        } else {
            ErrorFormat::Html
        }
    }
}

impl Default for ErrorFormatPolicy {
    fn default() -> Self {
        Self::new(vec![DEFAULT_API_PREFIX.to_string()])
    }
}

/// Application-level error type returned by every handler.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {}", .0.as_deref().unwrap_or("-"))]
    NotFound(Option<String>),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),

    /// A client error raised by actix itself, e.g. an oversized body.
    #[error("Request rejected with {0}")]
    Rejected(StatusCode),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound(Some("Post not found".to_string()))
    }

    /// Map an error raised outside the handlers (extractors, static files).
    pub fn from_framework(err: &actix_web::Error) -> Self {
        match err.as_response_error().status_code() {
            StatusCode::NOT_FOUND => AppError::NotFound(Some("Not Found".to_string())),
            StatusCode::METHOD_NOT_ALLOWED => AppError::MethodNotAllowed,
            status if status.is_client_error() => AppError::Rejected(status),
            _ => {
                tracing::error!("Framework error: {}", err);
                AppError::Internal(err.to_string())
            }
        }
    }

    /// Human-readable message for this error.
    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound(Some(detail)) => detail.as_str(),
            AppError::NotFound(None) | AppError::Internal(_) => FALLBACK_MESSAGE,
            AppError::MethodNotAllowed => "Method Not Allowed",
            AppError::Validation(_) => INVALID_REQUEST_MESSAGE,
            AppError::Rejected(status) => status.canonical_reason().unwrap_or(FALLBACK_MESSAGE),
        }
    }

    /// Render for the given format. Depends only on the error and the format.
    pub fn render(&self, format: ErrorFormat) -> HttpResponse {
        let status = self.status_code();
        match (format, self) {
            (ErrorFormat::Json, AppError::Validation(issues)) => {
                HttpResponse::build(status).json(ErrorBody::issues(issues.clone()))
            }
            (ErrorFormat::Json, _) => {
                HttpResponse::build(status).json(ErrorBody::message(self.message()))
            }
            (ErrorFormat::Html, _) => html_response(status, error_page(status, self.message())),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected(status) => *status,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON until `ErrorBoundary` re-renders it for the request path.
    fn error_response(&self) -> HttpResponse {
        self.render(ErrorFormat::Json)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.into_issues())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound { .. } => AppError::post_not_found(),
            other => {
                tracing::error!("Post store error: {}", other);
                AppError::Internal(other.to_string())
            }
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::error::{ErrorInternalServerError, ErrorNotFound, PayloadError};
    use inkwell_core::domain::PostId;
    use inkwell_shared::validation::validate_post_create;
    use serde_json::{Value, json};

    async fn body_string(res: HttpResponse) -> String {
        let bytes = to_bytes(res.into_body()).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_policy_matches_prefixes() {
        let policy = ErrorFormatPolicy::default();
        assert_eq!(policy.format_for("/api/posts/9"), ErrorFormat::Json);
        assert_eq!(policy.format_for("/api"), ErrorFormat::Json);
        assert_eq!(policy.format_for("/posts/9"), ErrorFormat::Html);
        assert_eq!(policy.format_for("/"), ErrorFormat::Html);

        let policy = ErrorFormatPolicy::new(vec!["/api".to_string(), "/v2".to_string()]);
        assert_eq!(policy.format_for("/v2/posts"), ErrorFormat::Json);
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::post_not_found().message(), "Post not found");
        assert_eq!(AppError::NotFound(None).message(), FALLBACK_MESSAGE);
        assert_eq!(AppError::Internal("boom".into()).message(), FALLBACK_MESSAGE);
        assert_eq!(AppError::Validation(vec![]).message(), INVALID_REQUEST_MESSAGE);
    }

    #[test]
    fn test_repo_errors_convert() {
        let err: AppError = RepoError::NotFound { id: PostId::new(4) }.into();
        assert!(matches!(err, AppError::NotFound(Some(ref m)) if m == "Post not found"));

        let err: AppError = RepoError::IdExhausted.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_framework_errors_convert() {
        let err = AppError::from_framework(&PayloadError::Overflow.into());
        assert_eq!(err.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.message(), "Payload Too Large");

        let err = AppError::from_framework(&ErrorNotFound("missing.css"));
        assert!(matches!(err, AppError::NotFound(Some(ref m)) if m == "Not Found"));

        let err = AppError::from_framework(&ErrorInternalServerError("secret"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), FALLBACK_MESSAGE);
    }

    #[actix_web::test]
    async fn test_rejected_json_and_html() {
        let err = AppError::Rejected(StatusCode::PAYLOAD_TOO_LARGE);

        let res = err.render(ErrorFormat::Json);
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let body: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body, json!({ "detail": "Payload Too Large" }));

        let html = body_string(err.render(ErrorFormat::Html)).await;
        assert!(html.contains("<title>413</title>"));
    }

    #[actix_web::test]
    async fn test_not_found_json() {
        let res = AppError::post_not_found().render(ErrorFormat::Json);
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let body: Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(body, json!({ "detail": "Post not found" }));
    }

    #[actix_web::test]
    async fn test_not_found_html() {
        let res = AppError::NotFound(None).render(ErrorFormat::Html);
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let html = body_string(res).await;
        assert!(html.contains("<title>404</title>"));
        assert!(html.contains(FALLBACK_MESSAGE));
    }

    #[actix_web::test]
    async fn test_validation_json_lists_issues() {
        let err: AppError = validate_post_create(br#"{"author": "a"}"#)
            .unwrap_err()
            .into();
        let res = err.render(ErrorFormat::Json);
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = serde_json::from_str(&body_string(res).await).unwrap();
        let issues = body["detail"].as_array().unwrap();
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0]["loc"], json!(["body", "title"]));
    }

    #[actix_web::test]
    async fn test_validation_html_hides_issues() {
        let err: AppError = validate_post_create(b"{}").unwrap_err().into();
        let html = body_string(err.render(ErrorFormat::Html)).await;

        assert!(html.contains("<title>422</title>"));
        assert!(html.contains(INVALID_REQUEST_MESSAGE));
        assert!(!html.contains("Field required"));
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_exposed() {
        let res = AppError::Internal("secret".into()).render(ErrorFormat::Json);
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body_string(res).await.contains("secret"));
    }
}
