//! # Title Ledger Service
//!
//! The contract state machine implementing `TitleLedgerApi`.
//!
//! ## Control Flow
//!
//! Each operation is strictly sequential:
//! 1. Identity Gate (issuance only)
//! 2. Validation hash computation (issuance only)
//! 3. Ledger read, write or query
//!
//! The service holds no mutable state of its own and takes no locks;
//! transaction isolation is provided by the ledger.

mod contract;
mod cursor;

use crate::config::{ConfigError, LedgerConfig};
use crate::ports::outbound::LedgerState;
use at_01_identity_gate::IdentityGate;

/// The Title Ledger Service.
pub struct TitleLedgerService<L: LedgerState> {
    /// World state and query engine.
    pub(crate) ledger: L,
    /// Issuer authorization, built from `config.authorized_issuer`.
    pub(crate) gate: IdentityGate,
    pub(crate) config: LedgerConfig,
}

impl<L: LedgerState> TitleLedgerService<L> {
    /// Build the contract over `ledger`.
    ///
    /// Fails if `config` has an empty issuer or a zero query bound.
    pub fn new(ledger: L, config: LedgerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let gate = IdentityGate::new(config.authorized_issuer.as_str());
        Ok(Self {
            ledger,
            gate,
            config,
        })
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    pub fn identity_gate(&self) -> &IdentityGate {
        &self.gate
    }
}
