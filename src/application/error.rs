// src/application/error.rs
use crate::domain::errors::{DomainError, Resource, UniqueConstraint, ValidationErrors};
use std::fmt;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Every failure a use case can surface. The presentation layer maps each
/// variant to exactly one HTTP status.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    #[error("malformed {resource} identifier: {value:?}")]
    MalformedIdentifier { resource: Resource, value: String },

    #[error("conflict: {0}")]
    Conflict(UniqueConstraint),

    #[error("{resource} not found: {id}")]
    NotFound { resource: Resource, id: String },

    #[error("unclassified failure: {0}")]
    Unclassified(String),
}

impl ApplicationError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation(ValidationErrors::single(field, msg))
    }

    pub fn not_found(resource: Resource, id: impl fmt::Display) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Wraps any value that carries no recognisable structure.
    pub fn unclassified(detail: impl fmt::Display) -> Self {
        Self::Unclassified(detail.to_string())
    }
}

impl From<DomainError> for ApplicationError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(errors) => Self::Validation(errors),
            DomainError::MalformedIdentifier { resource, value } => {
                Self::MalformedIdentifier { resource, value }
            }
            DomainError::Conflict(constraint) => Self::Conflict(constraint),
            DomainError::NotFound { resource, id } => Self::NotFound { resource, id },
            DomainError::Persistence(msg) => Self::Unclassified(msg),
        }
    }
}

impl From<ValidationErrors> for ApplicationError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value)
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(value: anyhow::Error) -> Self {
        Self::Unclassified(format!("{value:#}"))
    }
}

impl From<serde_json::Error> for ApplicationError {
    fn from(value: serde_json::Error) -> Self {
        Self::Unclassified(value.to_string())
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for ApplicationError {
    fn from(value: Box<dyn std::error::Error + Send + Sync>) -> Self {
        Self::Unclassified(value.to_string())
    }
}
