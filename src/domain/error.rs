use thiserror::Error;

/// Domain-level error types.
///
/// Absence of a record is not an error: lookups return `Option`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Caller input rejected before any entity was constructed.
    /// Display is the human-readable reason.
    #[error("{0}")]
    Validation(String),

    /// Identifier already present in the store. The generator is not
    /// expected to collide; this is a defensive check.
    #[error("Already exists: {0}")]
    Conflict(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
