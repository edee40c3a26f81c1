//! # Infrastructure Layer
//!
//! Storage adapters for the allocation workflow.

pub mod persistence;
