//! Create / update / delete decision for source-tagged records.
//!
//! The engine takes a transient record and an [`Intent`] and decides, by
//! natural-key lookup, what happens to the store:
//!
//! | Intent   | Key resolves? | Decision | Outcome             |
//! |----------|---------------|----------|---------------------|
//! | `Upsert` | no            | create   | `Created(entity)`   |
//! | `Upsert` | yes           | update   | `Updated(entity)`   |
//! | `Delete` | yes           | delete   | `Deleted`           |
//! | `Delete` | no            | -        | `NotFoundForUpdate` |
//!
//! The lookup is authoritative: a resolved key is never blindly created, an
//! unresolved key is never updated. An update whose merge changes nothing
//! skips the write and still reports `Updated`.
//!
//! A create that loses a race on the natural key (the repository reports
//! `DuplicateNaturalKey`) is handled per [`DuplicateKeyPolicy`]. Repository
//! failures are never retried here.

use tracing::{info, instrument, warn};

use srcsync_core::{NaturalKey, SourceEntity, SourceMapper};

use crate::config::{DuplicateKeyPolicy, ReconcileConfig};
use crate::reconcile::error::ReconcileError;
use crate::reconcile::outcome::{Intent, Outcome};
use crate::reconcile::resolver::IdentityResolver;
use crate::repository::{RepositoryError, SourceRepository};

/// Stateless reconciliation pipeline over a repository `R` of entities `E`.
pub struct ReconciliationEngine<R, E> {
    resolver: IdentityResolver<R, E>,
    config: ReconcileConfig,
}

impl<R, E> ReconciliationEngine<R, E> {
    pub fn new(repository: R, config: ReconcileConfig) -> Self {
        Self {
            resolver: IdentityResolver::new(repository),
            config,
        }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    fn repository(&self) -> &R {
        self.resolver.repository()
    }
}

impl<R, E> ReconciliationEngine<R, E>
where
    R: SourceRepository<E>,
    E: SourceEntity,
{
    /// Map `payload` to a transient record, then reconcile it.
    pub async fn reconcile_payload<M>(
        &self,
        payload: &M,
        intent: Intent,
    ) -> Result<Outcome<E>, ReconcileError>
    where
        M: SourceMapper<Entity = E> + Sync,
    {
        let record = payload.to_entity()?;
        self.reconcile(record, intent).await
    }

    /// Reconcile a transient record against the store.
    #[instrument(
        skip(self, record, intent),
        fields(natural_key = %record.natural_key(), intent = ?intent),
        err
    )]
    pub async fn reconcile(&self, record: E, intent: Intent) -> Result<Outcome<E>, ReconcileError> {
        if !record.is_new() {
            return Err(ReconcileError::MalformedPayload(
                "record already carries a surrogate id".to_string(),
            ));
        }

        match intent {
            Intent::Delete => self.delete(&record.natural_key()).await,
            Intent::Upsert => match self.resolver.resolve(&record.natural_key()).await? {
                Some(existing) => self.update(existing, &record).await,
                None => self.create(record).await,
            },
        }
    }

    /// Look up the entity filed under `key`.
    pub async fn resolve(&self, key: &NaturalKey) -> Result<Option<E>, ReconcileError> {
        self.resolver.resolve(key).await
    }

    /// Remove the entity filed under `key`.
    #[instrument(skip(self, key), fields(natural_key = %key), err)]
    pub async fn delete(&self, key: &NaturalKey) -> Result<Outcome<E>, ReconcileError> {
        if self.resolver.resolve(key).await?.is_none() {
            return Err(ReconcileError::NotFoundForUpdate(key.clone()));
        }

        self.repository().delete(key).await?;
        info!(natural_key = %key, decision = "delete", "reconciled");
        Ok(Outcome::Deleted)
    }

    async fn create(&self, record: E) -> Result<Outcome<E>, ReconcileError> {
        let key = record.natural_key();
        match self.repository().save(record.clone()).await {
            Ok(saved) => {
                info!(natural_key = %key, id = ?saved.id(), decision = "create", "reconciled");
                Ok(Outcome::Created(saved))
            }
            Err(RepositoryError::DuplicateNaturalKey(_)) => self.recover_duplicate(key, &record).await,
            Err(e) => Err(e.into()),
        }
    }

    async fn update(&self, existing: E, incoming: &E) -> Result<Outcome<E>, ReconcileError> {
        let merged = existing.merge_from(incoming);
        if merged == existing {
            info!(natural_key = %merged.natural_key(), id = ?merged.id(), decision = "unchanged", "reconciled");
            return Ok(Outcome::Updated(existing));
        }

        let saved = self.repository().save(merged).await?;
        info!(natural_key = %saved.natural_key(), id = ?saved.id(), decision = "update", "reconciled");
        Ok(Outcome::Updated(saved))
    }

    async fn recover_duplicate(&self, key: NaturalKey, record: &E) -> Result<Outcome<E>, ReconcileError> {
        match self.config.duplicate_key_policy {
            DuplicateKeyPolicy::Reject => {
                warn!(natural_key = %key, "create lost natural-key race; rejecting");
                Err(ReconcileError::DuplicateNaturalKey(key))
            }
            DuplicateKeyPolicy::Fallback => {
                warn!(natural_key = %key, "create lost natural-key race; falling back to update");
                match self.resolver.resolve(&key).await? {
                    Some(existing) => self.update(existing, record).await,
                    None => Err(ReconcileError::DuplicateNaturalKey(key)),
                }
            }
        }
    }
}
