use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use srcsync_core::{EntityId, NaturalKey, SourceEntity};

use super::r#trait::{RepositoryError, SourceRepository};

/// In-memory repository keyed by natural key.
///
/// Intended for tests/dev. Uniqueness is enforced by checking and inserting
/// under one write lock.
#[derive(Debug)]
pub struct InMemorySourceRepository<E> {
    entities: RwLock<HashMap<NaturalKey, E>>,
}

impl<E> InMemorySourceRepository<E> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(HashMap::new()),
        }
    }
}

impl<E> Default for InMemorySourceRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: SourceEntity> InMemorySourceRepository<E> {
    /// Number of stored entities.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.entities.read().map_err(|_| poisoned())?.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    /// All stored entities, in no particular order.
    pub fn list(&self) -> Result<Vec<E>, RepositoryError> {
        let map = self.entities.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }
}

fn poisoned() -> RepositoryError {
    RepositoryError::Unavailable("lock poisoned".to_string())
}

#[async_trait]
impl<E: SourceEntity> SourceRepository<E> for InMemorySourceRepository<E> {
    async fn find_by_natural_key(&self, key: &NaturalKey) -> Result<Option<E>, RepositoryError> {
        let map = self.entities.read().map_err(|_| poisoned())?;
        Ok(map.get(key).cloned())
    }

    async fn save(&self, entity: E) -> Result<E, RepositoryError> {
        let key = entity.natural_key();
        let mut map = self.entities.write().map_err(|_| poisoned())?;

        if entity.is_new() {
            if map.contains_key(&key) {
                return Err(RepositoryError::DuplicateNaturalKey(key));
            }
            let persisted = entity.with_id(EntityId::new());
            map.insert(key, persisted.clone());
            return Ok(persisted);
        }

        let stored = map
            .get_mut(&key)
            .ok_or_else(|| RepositoryError::NotFound(key.clone()))?;
        if stored.id() != entity.id() {
            return Err(RepositoryError::Conflict(format!(
                "{key} is stored under id {:?}, save attempted with {:?}",
                stored.id(),
                entity.id()
            )));
        }
        *stored = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, key: &NaturalKey) -> Result<(), RepositoryError> {
        let mut map = self.entities.write().map_err(|_| poisoned())?;
        map.remove(key)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(key.clone()))
    }
}
