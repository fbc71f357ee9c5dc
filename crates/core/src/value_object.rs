//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two instances with the same attribute
/// values are the same value. [`NaturalKey`](crate::NaturalKey) is one; an
/// entity is not, even though entities here also compare field-wise.
///
/// The trait requires `Eq + Hash` so value objects can key maps and sets
/// directly.
pub trait ValueObject: Clone + Eq + core::hash::Hash + core::fmt::Debug {}
