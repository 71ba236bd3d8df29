//! # Domain Errors
//!
//! Error types for the Identity Gate.

use thiserror::Error;

/// The identity service could not produce an org id for the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityResolutionError {
    /// The caller's credential could not be decoded.
    #[error("malformed credential: {0}")]
    MalformedCredential(String),

    /// The identity provider could not be reached or refused the lookup.
    #[error("identity provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The credential decoded but carried no organization id.
    #[error("credential has no organization id")]
    MissingOrgId,
}

/// The caller may not perform a gated operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthorizationError {
    /// Identity resolution failed before any decision could be made.
    #[error("failed to resolve caller identity: {0}")]
    IdentityResolution(#[from] IdentityResolutionError),

    /// The caller resolved to an organization other than the issuer.
    #[error("org {org_id} is not permitted to issue titles")]
    NotPermitted { org_id: String },
}
