use thiserror::Error;

use srcsync_core::{DomainError, NaturalKey};

use crate::repository::RepositoryError;

/// Failure of a reconciliation call.
///
/// Every failure lands in exactly one variant; none are swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// The payload is missing its natural key, or is not a transient record.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    /// A delete (or an update that lost a race with a delete) targeted an
    /// unknown natural key.
    #[error("no entity to update for natural key {0}")]
    NotFoundForUpdate(NaturalKey),

    /// A create collided with an existing key and could not be recovered.
    #[error("natural key already exists: {0}")]
    DuplicateNaturalKey(NaturalKey),

    /// The repository reported an identity conflict.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Infrastructure failure, propagated without retry.
    #[error("repository unavailable: {0}")]
    RepositoryUnavailable(String),
}

impl From<RepositoryError> for ReconcileError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::DuplicateNaturalKey(key) => ReconcileError::DuplicateNaturalKey(key),
            RepositoryError::NotFound(key) => ReconcileError::NotFoundForUpdate(key),
            RepositoryError::Conflict(msg) => ReconcileError::Conflict(msg),
            RepositoryError::Unavailable(msg) => ReconcileError::RepositoryUnavailable(msg),
        }
    }
}

impl From<DomainError> for ReconcileError {
    fn from(value: DomainError) -> Self {
        match value {
            DomainError::Validation(msg) | DomainError::InvalidId(msg) => {
                ReconcileError::MalformedPayload(msg)
            }
            DomainError::Conflict(msg) => ReconcileError::Conflict(msg),
            DomainError::NotFound => ReconcileError::MalformedPayload("not found".to_string()),
        }
    }
}
