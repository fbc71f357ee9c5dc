//! Infrastructure layer: repositories, reconciliation pipeline, config.

pub mod config;
pub mod reconcile;
pub mod repository;

pub use config::{ConfigError, DuplicateKeyPolicy, ReconcileConfig};
pub use reconcile::{
    IdentityResolver, Intent, Outcome, OutcomeKind, ReconcileError, ReconciliationEngine,
};
pub use repository::{InMemorySourceRepository, RepositoryError, SourceRepository};
