//! Source record reconciliation pipeline.
//!
//! ```text
//! payload
//!   ↓  SourceMapper::to_entity      (transient record)
//!   ↓  IdentityResolver::resolve    (natural-key lookup)
//!   ↓  ReconciliationEngine         (create / update / delete decision)
//!   ↓  SourceRepository write
//! Outcome
//! ```
//!
//! The pipeline is stateless: every call is independent and the only shared
//! state is the repository, which owns natural-key uniqueness.

pub mod engine;
pub mod error;
pub mod outcome;
pub mod resolver;

pub use engine::ReconciliationEngine;
pub use error::ReconcileError;
pub use outcome::{Intent, Outcome, OutcomeKind};
pub use resolver::IdentityResolver;
