//! Shared builders for the integration suite.

use at_01_identity_gate::{SerializedIdentity, StaticIdentity};
use at_02_title_ledger::{InMemoryLedger, LedgerConfig, TitleDraft, TitleLedgerService};
use sha2::{Digest, Sha256};
use title_telemetry::{init_logging, TelemetryConfig};

pub const ISSUER_MSP: &str = "universityMSP";
pub const STUDENT_MSP: &str = "studentMSP";

/// Install test logging once; later calls are no-ops.
pub fn init_test_logging() {
    let config = TelemetryConfig {
        log_level: "warn".to_string(),
        ..TelemetryConfig::from_env()
    };
    let _ = init_logging(&config);
}

/// Contract over a fresh in-memory ledger, issuer `universityMSP`.
pub fn make_service() -> TitleLedgerService<InMemoryLedger> {
    init_test_logging();
    TitleLedgerService::new(InMemoryLedger::new(), LedgerConfig::with_issuer(ISSUER_MSP)).unwrap()
}

pub fn issuer() -> StaticIdentity {
    StaticIdentity::new(ISSUER_MSP)
}

/// Membership-service credential for `mspid` with a dummy certificate.
pub fn credential(mspid: &str) -> SerializedIdentity {
    SerializedIdentity::new(mspid, vec![0x30, 0x82, 0x01, 0x0a])
}

pub fn draft(title_id: &str, student_id: &str, degree: &str, date: &str) -> TitleDraft {
    TitleDraft::new(title_id, student_id, "Juan Pérez", degree, date)
}

/// Validation hash recomputed independently of the contract crate.
pub fn reference_hash(student_id: &str, degree: &str, emission_date: &str) -> String {
    let input = format!("{}{}{}", student_id, degree, emission_date);
    hex::encode(Sha256::digest(input.as_bytes()))
}
