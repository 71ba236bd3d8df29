//! # Identity Gate (at-01)
//!
//! Resolves the organizational identity of the caller of a ledger operation
//! and decides whether that identity may mint academic-title records.
//!
//! ## Architecture
//!
//! ```text
//! Title Ledger (2) ──authorize_issuer(caller)──→ IdentityGate
//!                                                   │
//!                                                   ↓
//!                                       ClientIdentity::resolve_caller_org_id()
//!                                          (membership service credential)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Single Issuer | Only the configured issuer org id may issue titles |
//! | 2 | Exact Match | Org ids are compared byte-for-byte, no normalization |
//! | 3 | Read-Only | Resolution has no side effects |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - `IdentityGate`, `OrgId`, error types
//! - `ports/` - `ClientIdentity` (driven port to the identity service)
//! - `adapters/` - `StaticIdentity`, `SerializedIdentity`

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::{SerializedIdentity, StaticIdentity};
pub use domain::{AuthorizationError, IdentityGate, IdentityResolutionError, OrgId};
pub use ports::ClientIdentity;
