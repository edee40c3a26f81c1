//! # Domain Layer
//!
//! Syndication entities, value objects and business-rule errors. Nothing in
//! this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
