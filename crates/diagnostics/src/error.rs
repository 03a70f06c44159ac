//! Diagnostics error types
//!
//! Writing log lines never fails from the caller's point of view; only
//! installing the tracing subscriber can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DiagnosticsError {
    /// The filter directive string could not be parsed
    #[error("Invalid log filter: {0}")]
    InvalidFilter(String),

    /// A global tracing subscriber is already installed
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
