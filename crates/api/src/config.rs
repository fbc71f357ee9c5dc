//! API process configuration, read from the environment.

use std::net::SocketAddr;

use thiserror::Error;

use srcsync_infra::{ConfigError, ReconcileConfig};

/// Environment variable holding the listen address.
pub const BIND_ADDR_ENV: &str = "SRCSYNC_BIND_ADDR";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ApiConfigError {
    #[error("invalid SRCSYNC_BIND_ADDR {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    #[error(transparent)]
    Reconcile(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    pub reconcile: ReconcileConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            reconcile: ReconcileConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ApiConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ApiConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BIND_ADDR_ENV).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw
            .trim()
            .parse()
            .map_err(|source| ApiConfigError::BindAddr {
                value: raw.clone(),
                source,
            })?;

        Ok(Self {
            bind_addr,
            reconcile: ReconcileConfig::from_lookup(&lookup)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srcsync_infra::DuplicateKeyPolicy;
    use srcsync_infra::config::DUPLICATE_KEY_POLICY_ENV;

    #[test]
    fn empty_environment_uses_defaults() {
        let cfg = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ApiConfig::default());
    }

    #[test]
    fn reads_bind_addr_and_policy() {
        let cfg = ApiConfig::from_lookup(|key| match key {
            BIND_ADDR_ENV => Some("127.0.0.1:9000".to_string()),
            DUPLICATE_KEY_POLICY_ENV => Some("reject".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.reconcile.duplicate_key_policy, DuplicateKeyPolicy::Reject);
    }

    #[test]
    fn bad_bind_addr_is_reported() {
        let err = ApiConfig::from_lookup(|key| {
            (key == BIND_ADDR_ENV).then(|| "localhost".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ApiConfigError::BindAddr { .. }));
    }
}
