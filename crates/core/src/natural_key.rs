//! Natural key: the (source code, source id) pair naming a record across systems.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Composite natural key of a source-tagged record.
///
/// At most one persisted entity may carry a given key at any time; repositories
/// index on it and enforce that uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NaturalKey {
    source_code: String,
    source_id: String,
}

impl NaturalKey {
    /// Build a key without checking its parts.
    ///
    /// Use [`NaturalKey::try_new`] at input boundaries.
    pub fn new(source_code: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            source_code: source_code.into(),
            source_id: source_id.into(),
        }
    }

    /// Build a key, rejecting blank parts.
    pub fn try_new(source_code: impl Into<String>, source_id: impl Into<String>) -> DomainResult<Self> {
        let key = Self::new(source_code, source_id);
        if key.source_code.trim().is_empty() {
            return Err(DomainError::validation("source cannot be empty"));
        }
        if key.source_id.trim().is_empty() {
            return Err(DomainError::validation("sourceId cannot be empty"));
        }
        Ok(key)
    }

    pub fn source_code(&self) -> &str {
        &self.source_code
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

impl ValueObject for NaturalKey {}

impl core::fmt::Display for NaturalKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.source_code, self.source_id)
    }
}
