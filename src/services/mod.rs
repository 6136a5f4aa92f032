//! Core services for classification, indexing, and validation

pub mod classify;
pub mod extract;
pub mod format;
pub mod index;
pub mod store;
pub mod validate;
pub mod walk;
