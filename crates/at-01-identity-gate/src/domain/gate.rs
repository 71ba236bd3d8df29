//! # Identity Gate
//!
//! Issuer authorization against an org id injected at construction time.

use crate::domain::errors::{AuthorizationError, IdentityResolutionError};
use crate::ports::ClientIdentity;
use std::fmt;
use tracing::{debug, warn};

/// Organizational membership identifier (e.g. `universityMSP`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrgId(String);

impl OrgId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrgId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Decides whether the caller of an operation may mint title records.
///
/// The gate holds no per-call state; the caller's credential is passed to
/// every check.
#[derive(Debug, Clone)]
pub struct IdentityGate {
    authorized_issuer: OrgId,
}

impl IdentityGate {
    /// Create a gate that admits exactly `authorized_issuer`.
    pub fn new(authorized_issuer: impl Into<OrgId>) -> Self {
        Self {
            authorized_issuer: authorized_issuer.into(),
        }
    }

    /// The org id permitted to issue titles.
    pub fn authorized_issuer(&self) -> &OrgId {
        &self.authorized_issuer
    }

    /// Resolve the caller's org id.
    pub fn resolve(&self, caller: &dyn ClientIdentity) -> Result<OrgId, IdentityResolutionError> {
        let org_id = caller.resolve_caller_org_id()?;
        if org_id.is_empty() {
            return Err(IdentityResolutionError::MissingOrgId);
        }
        Ok(OrgId(org_id))
    }

    /// Resolve the caller and require it to be the authorized issuer.
    ///
    /// ## Returns
    ///
    /// - `Ok(OrgId)`: the caller is the issuer
    /// - `Err(IdentityResolution)`: the identity service failed
    /// - `Err(NotPermitted)`: the caller is any other organization
    pub fn authorize_issuer(
        &self,
        caller: &dyn ClientIdentity,
    ) -> Result<OrgId, AuthorizationError> {
        let org_id = self.resolve(caller).inspect_err(|e| {
            warn!(error = %e, "Caller identity could not be resolved");
        })?;

        if org_id != self.authorized_issuer {
            warn!(
                org_id = %org_id,
                issuer = %self.authorized_issuer,
                "Rejected title issuance from non-issuer organization"
            );
            return Err(AuthorizationError::NotPermitted { org_id: org_id.0 });
        }

        debug!(org_id = %org_id, "Issuer authorized");
        Ok(org_id)
    }
}
