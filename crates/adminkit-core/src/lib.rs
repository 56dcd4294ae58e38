//! # adminkit-core
//!
//! Core types for the adminkit toolkit. This crate has no framework
//! dependencies and provides the foundation for all other crates.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;

// Re-export the most commonly used types at the crate root.
pub use error::{AdminError, AdminResult};
