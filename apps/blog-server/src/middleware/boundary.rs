//! Error boundary middleware - renders failed responses for the request path.
//!
//! Handlers return `AppError`; actix turns it into a response that still
//! carries the error. This middleware picks that error up and renders it
//! once, as JSON or HTML, according to the `ErrorFormatPolicy`. Errors that
//! actix raises itself are mapped to an `AppError` first.

use actix_web::{
    Error, ResponseError,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use super::error::{AppError, ErrorFormatPolicy};

/// Middleware that negotiates the representation of `AppError` responses.
pub struct ErrorBoundary {
    policy: Rc<ErrorFormatPolicy>,
}

impl ErrorBoundary {
    pub fn new(policy: ErrorFormatPolicy) -> Self {
        Self {
            policy: Rc::new(policy),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for ErrorBoundary
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = ErrorBoundaryService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(ErrorBoundaryService {
            service,
            policy: Rc::clone(&self.policy),
        }))
    }
}

pub struct ErrorBoundaryService<S> {
    service: S,
    policy: Rc<ErrorFormatPolicy>,
}

impl<S, B> Service<ServiceRequest> for ErrorBoundaryService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let policy = Rc::clone(&self.policy);
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;

            let render = |err: &AppError| {
                let path = res.request().path();
                let format = policy.format_for(path);
                tracing::debug!(
                    path = %path,
                    status = %err.status_code(),
                    format = ?format,
                    "Rendering error response"
                );
                err.render(format)
            };

            // Errors from extractors or static files are not `AppError`s yet.
            let rendered = res
                .response()
                .error()
                .map(|err| match err.as_error::<AppError>() {
                    Some(app_err) => render(app_err),
                    None => render(&AppError::from_framework(err)),
                });

            match rendered {
                Some(response) => Ok(res.into_response(response).map_into_right_body()),
                None => Ok(res.map_into_left_body()),
            }
        })
    }
}
