//! # Adapters Layer
//!
//! - `memory_ledger`: in-memory `LedgerState` with a selector query engine
//! - `api_handler`: JSON method dispatch onto `TitleLedgerApi`

pub mod api_handler;
pub mod memory_ledger;

pub use api_handler::{handle_api_query, ApiQueryError, StudentTitlesResponse, TitleApiHandler};
pub use memory_ledger::{InMemoryLedger, LedgerStats};
