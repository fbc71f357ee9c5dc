use serde::{Deserialize, Serialize};

/// What the caller asks the engine to do with a source record.
///
/// Deletion is an explicit hint from the caller; the engine never infers it
/// from payload contents.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    /// Create the entity, or update it if the natural key already resolves.
    #[default]
    Upsert,
    /// Remove the entity filed under the natural key.
    Delete,
}

/// Result of one reconciliation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<E> {
    /// A new entity was persisted ("201"-class).
    Created(E),
    /// An existing entity was updated ("200"-class).
    Updated(E),
    /// The entity was removed; there is no body ("204"-class).
    Deleted,
}

/// Transport-agnostic tag of an [`Outcome`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Created,
    Updated,
    Deleted,
}

impl<E> Outcome<E> {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Outcome::Created(_) => OutcomeKind::Created,
            Outcome::Updated(_) => OutcomeKind::Updated,
            Outcome::Deleted => OutcomeKind::Deleted,
        }
    }

    /// The persisted entity, if the outcome carries one.
    pub fn entity(&self) -> Option<&E> {
        match self {
            Outcome::Created(e) | Outcome::Updated(e) => Some(e),
            Outcome::Deleted => None,
        }
    }

    pub fn into_entity(self) -> Option<E> {
        match self {
            Outcome::Created(e) | Outcome::Updated(e) => Some(e),
            Outcome::Deleted => None,
        }
    }
}

impl core::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            OutcomeKind::Created => "created",
            OutcomeKind::Updated => "updated",
            OutcomeKind::Deleted => "deleted",
        };
        f.write_str(s)
    }
}
