//! Keyed entity storage boundary.
//!
//! Defines the repository abstraction the reconciliation pipeline writes
//! through, without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemorySourceRepository;
pub use r#trait::{RepositoryError, SourceRepository};
