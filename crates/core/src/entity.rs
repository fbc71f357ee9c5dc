//! Entity traits: identity + continuity across source submissions.

use crate::id::EntityId;
use crate::natural_key::NaturalKey;

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the surrogate identifier, or `None` while the entity is transient.
    fn id(&self) -> Option<&Self::Id>;

    /// `true` until a store has assigned an identifier.
    fn is_new(&self) -> bool {
        self.id().is_none()
    }
}

/// An entity that originates from an external source and is keyed by a
/// [`NaturalKey`] in addition to its surrogate id.
///
/// Equality and hashing come from `Eq + Hash` and must cover every field,
/// surrogate id included, so a transient record never equals its persisted
/// form.
pub trait SourceEntity:
    Entity<Id = EntityId> + Clone + Eq + core::hash::Hash + core::fmt::Debug + Send + Sync + 'static
{
    /// The (source code, source id) pair this entity is filed under.
    fn natural_key(&self) -> NaturalKey;

    /// Promote a transient record to a persisted one.
    ///
    /// Only repositories call this.
    fn with_id(self, id: EntityId) -> Self;

    /// Copy the mutable descriptive fields of `incoming` onto `self`.
    ///
    /// The surrogate id and the natural key of `self` are kept unchanged.
    fn merge_from(&self, incoming: &Self) -> Self;
}
