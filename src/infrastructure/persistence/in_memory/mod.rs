//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Available Repositories
//!
//! - [`InMemoryQuotationRepository`]: Quotation persistence
//! - [`InMemorySyndicateRepository`]: Syndicate persistence
//!
//! ## Thread Safety
//!
//! All implementations keep their state behind `Arc<tokio::sync::RwLock<_>>`.

pub mod quotation_repository;
pub mod syndicate_repository;

pub use quotation_repository::InMemoryQuotationRepository;
pub use syndicate_repository::InMemorySyndicateRepository;
