//! Core error types for the adminkit toolkit.
//!
//! Scaffolding configuration is a definition-time API: every error here is
//! synchronous, fails fast, and propagates straight to the caller. Nothing
//! is retried or recovered internally.

use thiserror::Error;

/// The primary error type for adminkit.
///
/// Configuration errors fall into two categories: an argument that can never
/// be valid ([`AdminError::InvalidArgument`]) and a reference to something
/// that was never declared ([`AdminError::NotFound`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// An argument outside the accepted domain (e.g. an unknown editor or
    /// input type name, or an unnamed element).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup by identifier found nothing.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A convenient `Result` alias using [`AdminError`].
pub type AdminResult<T> = Result<T, AdminError>;
