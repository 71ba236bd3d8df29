//! Configuration for the Title Ledger contract

use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Org id that issues titles when nothing else is configured.
pub const DEFAULT_AUTHORIZED_ISSUER: &str = "universityMSP";

/// Default upper bound on rows consumed by a student query.
pub const DEFAULT_MAX_QUERY_RESULTS: usize = 10_000;

/// Contract configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The only organization permitted to issue titles
    pub authorized_issuer: String,
    /// Maximum rows a student query may return
    pub max_query_results: usize,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            authorized_issuer: DEFAULT_AUTHORIZED_ISSUER.to_string(),
            max_query_results: DEFAULT_MAX_QUERY_RESULTS,
        }
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("authorized issuer must not be empty")]
    EmptyIssuer,

    #[error("max_query_results must be greater than zero")]
    ZeroResultBound,
}

impl LedgerConfig {
    /// Config admitting `issuer`, other values default.
    pub fn with_issuer(issuer: impl Into<String>) -> Self {
        Self {
            authorized_issuer: issuer.into(),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `AT_AUTHORIZED_ISSUER`: issuer org id (default: universityMSP)
    /// - `AT_MAX_QUERY_RESULTS`: student query row bound (default: 10000)
    ///
    /// Empty, zero or unparsable values fall back to the default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            authorized_issuer: lookup("AT_AUTHORIZED_ISSUER")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_AUTHORIZED_ISSUER.to_string()),

            max_query_results: lookup("AT_MAX_QUERY_RESULTS")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_MAX_QUERY_RESULTS),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.authorized_issuer.is_empty() {
            return Err(ConfigError::EmptyIssuer);
        }
        if self.max_query_results == 0 {
            return Err(ConfigError::ZeroResultBound);
        }
        Ok(())
    }
}
