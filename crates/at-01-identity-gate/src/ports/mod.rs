//! # Outbound Ports (Driven Ports)
//!
//! The identity service as seen by the gate.

use crate::domain::IdentityResolutionError;

/// Identity of the caller of the current ledger operation.
///
/// Implemented by whatever carries the caller's credential for one invocation
/// (membership service client, decoded certificate, test double).
pub trait ClientIdentity: Send + Sync {
    /// Organizational membership id of the caller.
    fn resolve_caller_org_id(&self) -> Result<String, IdentityResolutionError>;
}
