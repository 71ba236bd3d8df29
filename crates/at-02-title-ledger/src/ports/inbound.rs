//! # Inbound Ports (Driving Ports)
//!
//! Operations exposed by the Title Ledger contract.

use crate::domain::{AcademicTitle, IntegrityReport, TitleDraft, TitleError};
use at_01_identity_gate::ClientIdentity;

/// Primary API of the Title Ledger contract.
///
/// Every call is one ledger transaction. Nothing here mutates a stored
/// title; the only write is issuance.
pub trait TitleLedgerApi {
    /// Issue a title on behalf of `caller`.
    ///
    /// The validation hash is computed here; any value the caller had is
    /// discarded. An existing title under the same id is overwritten.
    ///
    /// ## Returns
    ///
    /// - `Ok(())`: the ledger acknowledged the write
    /// - `Err(Authorization)`: caller unresolvable or not the issuer; nothing written
    /// - `Err(Storage)`: the ledger write failed
    fn issue_title(&self, caller: &dyn ClientIdentity, draft: TitleDraft) -> Result<(), TitleError>;

    /// Return the stored record for `title_id` exactly as persisted.
    ///
    /// Comparing the stored hash against a recomputed one is left to the
    /// caller (see [`check_integrity`](Self::check_integrity)).
    ///
    /// ## Returns
    ///
    /// - `Err(Storage)`: the ledger read failed
    /// - `Err(Deserialization)`: absent key (empty value) or corrupted record
    fn verify_title(&self, title_id: &str) -> Result<AcademicTitle, TitleError>;

    /// Titles are soulbound. Always fails with `TransferNotPermitted`
    /// without touching the ledger.
    fn transfer(&self, title_id: &str, new_owner: &str) -> Result<(), TitleError>;

    /// All titles bound to `student_id`, in the query engine's order.
    ///
    /// All-or-nothing: a single undecodable row fails the whole call.
    ///
    /// ## Returns
    ///
    /// - `Err(Query)`: the query could not be started
    /// - `Err(Iteration)`: cursor advancement failed or the result bound was exceeded
    /// - `Err(Deserialization)`: some row is not a title record
    fn get_titles_by_student(&self, student_id: &str) -> Result<Vec<AcademicTitle>, TitleError>;

    /// Read `title_id` like [`verify_title`](Self::verify_title) and
    /// recompute its validation hash.
    fn check_integrity(&self, title_id: &str) -> Result<IntegrityReport, TitleError>;
}
