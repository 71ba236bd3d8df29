//! # Outbound Ports (Driven Ports)
//!
//! The external ledger as seen by the contract.
//!
//! Production: the ledger platform's transaction stub.
//! Testing: `InMemoryLedger` (adapters/memory_ledger.rs)

use crate::domain::LedgerError;

/// Key-value world state with a secondary query engine.
///
/// Atomicity and isolation of a transaction are the ledger's concern; the
/// contract issues at most one write per operation.
pub trait LedgerState: Send + Sync {
    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), LedgerError>;

    /// Read the value under `key`.
    ///
    /// A missing key yields empty bytes, not an error.
    fn get_state(&self, key: &str) -> Result<Vec<u8>, LedgerError>;

    /// Start a rich query with a JSON selector expression.
    ///
    /// The returned cursor must be closed exactly once by the caller.
    fn get_query_result(&self, query: &str) -> Result<Box<dyn QueryCursor + '_>, LedgerError>;
}

/// Lazy, finite, non-restartable sequence of query matches.
pub trait QueryCursor {
    fn has_next(&self) -> bool;

    /// Advance and return the next matching value.
    fn next(&mut self) -> Result<Vec<u8>, LedgerError>;

    /// Release the cursor's backend resources.
    fn close(&mut self) -> Result<(), LedgerError>;
}
