//! # Domain Errors
//!
//! Error types for the Title Ledger contract.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | Authorization | Caller identity unresolvable or not the issuer |
//! | Storage | Ledger `get`/`put` failed |
//! | Deserialization | Stored or queried bytes are not a title record |
//! | Query | The query engine refused to start the query |
//! | Iteration | Cursor advancement failed or the result bound was hit |
//! | TransferNotPermitted | Any transfer attempt |

use at_01_identity_gate::AuthorizationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure reported by the external ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Key-value read or write failed.
    #[error("ledger I/O error: {0}")]
    Io(String),

    /// The query engine rejected the selector.
    #[error("query rejected: {0}")]
    QueryRejected(String),

    /// Cursor failure (advance past end, backend error mid-stream).
    #[error("cursor error: {0}")]
    Cursor(String),

    /// In-process state lock poisoned by a panicking writer.
    #[error("ledger lock poisoned")]
    LockPoisoned,
}

/// Errors surfaced by the Title Ledger contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("authorization error: {0}")]
    Authorization(#[from] AuthorizationError),

    #[error("storage error: {0}")]
    Storage(#[source] LedgerError),

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("query error: {0}")]
    Query(#[source] LedgerError),

    #[error("iteration error: {0}")]
    Iteration(String),

    /// Encoding a record for the ledger failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("soulbound titles are not transferable")]
    TransferNotPermitted,
}

impl TitleError {
    pub fn kind(&self) -> TitleErrorKind {
        match self {
            Self::Authorization(_) => TitleErrorKind::Authorization,
            Self::Storage(_) => TitleErrorKind::Storage,
            Self::Deserialization(_) => TitleErrorKind::Deserialization,
            Self::Query(_) => TitleErrorKind::Query,
            Self::Iteration(_) => TitleErrorKind::Iteration,
            Self::Serialization(_) => TitleErrorKind::Serialization,
            Self::TransferNotPermitted => TitleErrorKind::TransferNotPermitted,
        }
    }
}

/// Error kind enumeration for adapters that report errors as data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleErrorKind {
    Authorization,
    Storage,
    Deserialization,
    Query,
    Iteration,
    Serialization,
    TransferNotPermitted,
}
