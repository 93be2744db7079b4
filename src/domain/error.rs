//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent misuse of the product tree API.
/// Validation failures are not errors; see [`crate::domain::ValidationReport`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("cannot {operation} simple component '{component}'")]
    UnsupportedOperation {
        operation: &'static str,
        component: String,
    },

    #[error("adding '{child}' to '{parent}' would create a cycle")]
    CyclicStructure { parent: String, child: String },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
