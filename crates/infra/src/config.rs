//! Reconciliation configuration.
//!
//! Values come from the process environment; every key has a default so an
//! empty environment yields a working setup.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable selecting the [`DuplicateKeyPolicy`].
pub const DUPLICATE_KEY_POLICY_ENV: &str = "SRCSYNC_DUPLICATE_KEY_POLICY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// What to do when a create loses a race on the natural key.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateKeyPolicy {
    /// Re-resolve the key once and apply the payload as an update.
    #[default]
    Fallback,
    /// Report the collision as a conflict.
    Reject,
}

impl FromStr for DuplicateKeyPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fallback" | "update" => Ok(Self::Fallback),
            "reject" | "conflict" => Ok(Self::Reject),
            _ => Err(ConfigError::InvalidValue {
                key: DUPLICATE_KEY_POLICY_ENV,
                value: s.to_string(),
                expected: "fallback, reject",
            }),
        }
    }
}

/// Settings for [`ReconciliationEngine`](crate::ReconciliationEngine).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileConfig {
    pub duplicate_key_policy: DuplicateKeyPolicy,
}

impl ReconcileConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (tests pass a closure over a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let duplicate_key_policy = match lookup(DUPLICATE_KEY_POLICY_ENV) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => DuplicateKeyPolicy::default(),
        };

        Ok(Self {
            duplicate_key_policy,
        })
    }

    pub fn with_duplicate_key_policy(mut self, policy: DuplicateKeyPolicy) -> Self {
        self.duplicate_key_policy = policy;
        self
    }
}
