//! # Application Layer
//!
//! Allocation services and the use case that connects them to storage.

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
