//! # Inkwell Shared
//!
//! Wire types for the JSON API and the validator for inbound payloads.

pub mod dto;
pub mod response;
pub mod validation;

pub use response::{Detail, ErrorBody};
pub use validation::{Loc, ValidationError, ValidationIssue};
