//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Phrase is empty")]
    EmptyPhrase,

    #[error("Phrase already exists in Mine: {0}")]
    DuplicatePhrase(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

impl DomainError {
    /// Short machine-readable tag for a rejected save
    pub fn reason(&self) -> &'static str {
        match self {
            DomainError::EmptyPhrase => "empty",
            DomainError::DuplicatePhrase(_) => "duplicate",
            DomainError::Repository(_) => "repository",
        }
    }

    /// Whether the error is a Mine validation rejection (empty or duplicate)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DomainError::EmptyPhrase | DomainError::DuplicatePhrase(_)
        )
    }
}
