//! # adminkit
//!
//! Admin scaffolding toolkit for Rust.
//!
//! This is the meta-crate that re-exports the sub-crates for convenient
//! access. Depend on `adminkit` to get the whole toolkit, or on the
//! individual crates for finer-grained control.

/// Core types: errors and logging setup.
pub use adminkit_core as core;

/// Form definitions: fields, sections, inputs, and ordering.
pub use adminkit_forms as forms;

// The types most callers touch first.
pub use adminkit_core::{AdminError, AdminResult};
pub use adminkit_forms::{FormDefinition, InputSpec, Position};
