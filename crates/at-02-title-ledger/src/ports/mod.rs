//! # Ports Layer
//!
//! - **Driving Port (Inbound)**: `TitleLedgerApi`, consumed by adapters
//! - **Driven Ports (Outbound)**: `LedgerState`, `QueryCursor`, implemented by
//!   the ledger platform (or `InMemoryLedger` in tests)
//!
//! Caller identity comes through `at_01_identity_gate::ClientIdentity`.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
