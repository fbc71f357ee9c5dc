//! `srcsync-core` — identity building blocks for source-tagged records.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! surrogate identifiers, natural keys, the entity contract and the
//! `SourceMapper` capability used to turn inbound payloads into entities.

pub mod entity;
pub mod error;
pub mod id;
pub mod natural_key;
pub mod source;
pub mod value_object;

pub use entity::{Entity, SourceEntity};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use natural_key::NaturalKey;
pub use source::SourceMapper;
pub use value_object::ValueObject;
