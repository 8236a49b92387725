//! # Inkwell Infrastructure
//!
//! Concrete implementations of the ports defined in `inkwell-core`.
//! Posts live in process memory only; every restart begins from the seed dataset.

pub mod seed;
pub mod store;

pub use store::{Clock, InMemoryPostStore};
