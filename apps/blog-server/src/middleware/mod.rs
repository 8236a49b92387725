//! Middleware modules.

pub mod boundary;
pub mod error;

pub use boundary::ErrorBoundary;
