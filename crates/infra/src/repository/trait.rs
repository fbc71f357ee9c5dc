use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use srcsync_core::{NaturalKey, SourceEntity};

/// Repository operation error.
///
/// These are **infrastructure errors** (uniqueness, availability) as opposed to
/// domain errors (validation).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// An insert collided with an entity already filed under the same key.
    #[error("natural key already exists: {0}")]
    DuplicateNaturalKey(NaturalKey),

    /// No entity is filed under the key.
    #[error("no entity for natural key: {0}")]
    NotFound(NaturalKey),

    /// The stored entity under the key carries a different surrogate id.
    #[error("identity conflict: {0}")]
    Conflict(String),

    /// Transient infrastructure failure (connection lost, lock poisoned, ...).
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Abstract keyed store of source entities.
///
/// ## Save Semantics
///
/// `save()`:
/// - For a transient entity (`is_new()`), assigns a fresh surrogate id and
///   inserts it. Fails with `DuplicateNaturalKey` if the key is taken. The
///   check and the insert must be atomic: two concurrent inserts for one key
///   cannot both succeed.
/// - For a persisted entity, replaces the entity filed under its natural key.
///   Fails with `NotFound` if nothing is filed there, and with `Conflict` if the
///   stored entity has a different id.
///
/// ## Lookup / Delete Semantics
///
/// `find_by_natural_key()` is read-only and returns `None` for unknown keys.
/// `delete()` removes the entity entirely (no tombstone) and fails with
/// `NotFound` for unknown keys.
///
/// Operations are single-shot; implementations never retry internally and
/// callers own timeouts.
#[async_trait]
pub trait SourceRepository<E>: Send + Sync
where
    E: SourceEntity,
{
    async fn find_by_natural_key(&self, key: &NaturalKey) -> Result<Option<E>, RepositoryError>;

    async fn save(&self, entity: E) -> Result<E, RepositoryError>;

    async fn delete(&self, key: &NaturalKey) -> Result<(), RepositoryError>;
}

#[async_trait]
impl<E, S> SourceRepository<E> for Arc<S>
where
    E: SourceEntity,
    S: SourceRepository<E> + ?Sized,
{
    async fn find_by_natural_key(&self, key: &NaturalKey) -> Result<Option<E>, RepositoryError> {
        (**self).find_by_natural_key(key).await
    }

    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        (**self).save(entity).await
    }

    async fn delete(&self, key: &NaturalKey) -> Result<(), RepositoryError> {
        (**self).delete(key).await
    }
}
