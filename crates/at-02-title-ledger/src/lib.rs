//! # Title Ledger Contract (at-02)
//!
//! The state machine for soulbound academic-title records: issuance gated by
//! the issuing organization's identity, content hashing, verification, and
//! per-student queries on top of an external key-value + query ledger.
//!
//! ## Operation Flow
//!
//! ```text
//! issue_title ──→ IdentityGate (1) ──→ SHA-256 validation hash ──→ put_state
//! verify_title ──────────────────────────────────────────────────→ get_state
//! get_titles_by_student ──→ structured selector ──→ query cursor (scoped)
//! transfer ──→ TransferNotPermitted (no ledger access)
//! ```
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Enforcement |
//! |----|-----------|-------------|
//! | 1 | Single Issuer | `IdentityGate::authorize_issuer` before any write |
//! | 2 | Server-Side Hash | `AcademicTitle::issue` always recomputes `validationHash` |
//! | 3 | Soulbound | `transfer` fails unconditionally |
//! | 4 | All-or-Nothing Query | Any bad row fails the whole query |
//! | 5 | Scoped Cursor | `CursorGuard` closes the cursor on every exit path |
//! | 6 | Empty Is Absent | Zero-length ledger values fail decoding |
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Entities, validation hash, selectors, codec, errors
//! - `ports/` - `TitleLedgerApi` (inbound), `LedgerState`/`QueryCursor` (outbound)
//! - `service/` - `TitleLedgerService` implementing the API
//! - `adapters/` - `InMemoryLedger`, JSON API handler
//! - `config` - `LedgerConfig` (authorized issuer, query bound)
//!
//! ## Usage
//!
//! ```ignore
//! use at_02_title_ledger::{InMemoryLedger, LedgerConfig, TitleLedgerApi, TitleLedgerService};
//! use at_01_identity_gate::StaticIdentity;
//!
//! let service = TitleLedgerService::new(InMemoryLedger::new(), LedgerConfig::from_env())?;
//! service.issue_title(&StaticIdentity::new("universityMSP"), draft)?;
//! let title = service.verify_title("T1")?;
//! ```

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{
    handle_api_query, ApiQueryError, InMemoryLedger, LedgerStats, StudentTitlesResponse,
    TitleApiHandler,
};
pub use config::{ConfigError, LedgerConfig};
pub use domain::{
    compute_validation_hash, decode_title, encode_title, verify_validation_hash, AcademicTitle,
    IntegrityReport, LedgerError, TitleDraft, TitleError, TitleErrorKind, TitleSelector,
    STUDENT_ID_FIELD,
};
pub use ports::{LedgerState, QueryCursor, TitleLedgerApi};
pub use service::TitleLedgerService;
