//! Infrastructure layer module
//!
//! Adapters satisfying the domain ports plus process-level plumbing:
//! - Configuration loading (figment)
//! - Logging (tracing-subscriber, tracing-appender)
//! - Document sources
//! - Chunking, embedding, and the flat vector index
//! - HTTP completion client
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod document;
pub mod generation;
pub mod http;
pub mod logging;
pub mod setup;
pub mod vector;
