//! Unified error types for the domain layer
//!
//! Only construction precondition violations surface as errors. Unresolvable
//! identifiers are reported through sentinels and failed matches are a plain
//! `false`, so neither appears here.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Definition not found
    #[error("Definition not found: {entity_type} with name {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Parse error (for value objects and wire records)
    #[error("Parse error: {0}")]
    Parse(String),

    /// No live game object was supplied to build a concrete descriptor from
    #[error("Cannot describe a missing thing")]
    MissingThing,
}

impl DomainError {
    /// Creates a validation error for violated descriptor invariants.
    ///
    /// # Example
    /// ```ignore
    /// if count == 0 {
    ///     return Err(DomainError::validation("Item count must be at least 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
