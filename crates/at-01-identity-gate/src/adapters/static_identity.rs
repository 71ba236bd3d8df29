use crate::domain::IdentityResolutionError;
use crate::ports::ClientIdentity;

/// Identity with a fixed resolution outcome.
///
/// Used by in-process callers that authenticated the caller elsewhere, and
/// by tests.
#[derive(Debug, Clone)]
pub struct StaticIdentity {
    outcome: Result<String, IdentityResolutionError>,
}

impl StaticIdentity {
    pub fn new(org_id: impl Into<String>) -> Self {
        Self {
            outcome: Ok(org_id.into()),
        }
    }

    /// Identity whose resolution always fails with `error`.
    pub fn failing(error: IdentityResolutionError) -> Self {
        Self { outcome: Err(error) }
    }
}

impl ClientIdentity for StaticIdentity {
    fn resolve_caller_org_id(&self) -> Result<String, IdentityResolutionError> {
        self.outcome.clone()
    }
}
