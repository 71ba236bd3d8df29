//! # Validation Hash
//!
//! `hex(SHA-256(student_id || degree || emission_date))`, plain UTF-8
//! concatenation with no separators.

use crate::domain::entities::AcademicTitle;
use sha2::{Digest, Sha256};

/// Compute the validation hash over a title's core fields.
pub fn compute_validation_hash(student_id: &str, degree: &str, emission_date: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(student_id.as_bytes());
    hasher.update(degree.as_bytes());
    hasher.update(emission_date.as_bytes());
    hex::encode(hasher.finalize())
}

/// Whether a record's stored hash matches its core fields.
pub fn verify_validation_hash(title: &AcademicTitle) -> bool {
    title.expected_hash() == title.validation_hash
}
