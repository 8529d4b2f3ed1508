//! Domain layer for docqa
//!
//! Core retrieval models, port traits and error types. Nothing here
//! performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
