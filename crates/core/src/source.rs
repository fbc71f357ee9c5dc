//! Mapping from inbound source payloads to transient entities.

use crate::entity::SourceEntity;
use crate::error::DomainResult;

/// Capability implemented by every inbound payload shape.
///
/// A new source format only needs its own `SourceMapper` impl; the
/// reconciliation pipeline is generic over it.
///
/// Implementations must be pure: equal payloads map to field-equal entities,
/// and the returned entity is always transient (`is_new() == true`). The only
/// check performed here is presence of the natural key; anything else is a
/// deserialization-boundary concern.
pub trait SourceMapper {
    type Entity: SourceEntity;

    fn to_entity(&self) -> DomainResult<Self::Entity>;
}
