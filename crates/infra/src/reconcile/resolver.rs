use std::marker::PhantomData;

use tracing::debug;

use srcsync_core::{NaturalKey, SourceEntity};

use crate::reconcile::error::ReconcileError;
use crate::repository::SourceRepository;

/// Read-only natural-key lookup.
pub struct IdentityResolver<R, E> {
    repository: R,
    _entity: PhantomData<fn() -> E>,
}

impl<R, E> IdentityResolver<R, E> {
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            _entity: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

impl<R, E> IdentityResolver<R, E>
where
    R: SourceRepository<E>,
    E: SourceEntity,
{
    /// Find the entity filed under `key`, if any.
    pub async fn resolve(&self, key: &NaturalKey) -> Result<Option<E>, ReconcileError> {
        let found = self.repository.find_by_natural_key(key).await?;
        debug!(natural_key = %key, found = found.is_some(), "resolved natural key");
        Ok(found)
    }
}
