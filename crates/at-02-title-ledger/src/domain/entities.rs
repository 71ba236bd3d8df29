//! # Domain Entities
//!
//! The academic title record and the issuance input it is built from.

use crate::domain::hash::compute_validation_hash;
use serde::{Deserialize, Serialize};

/// An issued academic title as persisted on the ledger.
///
/// Wire form is a flat JSON object with every field present as a string:
/// `titleId`, `studentId`, `studentName`, `degree`, `emissionDate`,
/// `validationHash`.
///
/// ## Invariants
///
/// - `validation_hash` is always computed by the contract, never supplied.
/// - `student_id` is bound at issuance and never reassigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicTitle {
    /// Ledger key; unique across titles.
    pub title_id: String,
    /// Subject of the title. One student may hold many titles.
    pub student_id: String,
    /// Display only, not part of the validation hash.
    pub student_name: String,
    pub degree: String,
    /// Issuance date (ISO-8601 recommended, not validated).
    pub emission_date: String,
    /// Hex SHA-256 of `student_id || degree || emission_date`.
    pub validation_hash: String,
}

impl AcademicTitle {
    /// Seal a draft into a title, computing its validation hash.
    pub fn issue(draft: TitleDraft) -> Self {
        let validation_hash =
            compute_validation_hash(&draft.student_id, &draft.degree, &draft.emission_date);
        Self {
            title_id: draft.title_id,
            student_id: draft.student_id,
            student_name: draft.student_name,
            degree: draft.degree,
            emission_date: draft.emission_date,
            validation_hash,
        }
    }

    /// Recompute the hash this record should carry.
    pub fn expected_hash(&self) -> String {
        compute_validation_hash(&self.student_id, &self.degree, &self.emission_date)
    }
}

/// Issuance input: a title record without its validation hash.
///
/// Unknown fields are ignored when decoding, so a caller-supplied
/// `validationHash` is dropped rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleDraft {
    pub title_id: String,
    pub student_id: String,
    pub student_name: String,
    pub degree: String,
    pub emission_date: String,
}

impl TitleDraft {
    pub fn new(
        title_id: impl Into<String>,
        student_id: impl Into<String>,
        student_name: impl Into<String>,
        degree: impl Into<String>,
        emission_date: impl Into<String>,
    ) -> Self {
        Self {
            title_id: title_id.into(),
            student_id: student_id.into(),
            student_name: student_name.into(),
            degree: degree.into(),
            emission_date: emission_date.into(),
        }
    }
}

impl From<AcademicTitle> for TitleDraft {
    fn from(title: AcademicTitle) -> Self {
        Self {
            title_id: title.title_id,
            student_id: title.student_id,
            student_name: title.student_name,
            degree: title.degree,
            emission_date: title.emission_date,
        }
    }
}

/// Result of recomputing a stored title's validation hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegrityReport {
    /// The record exactly as stored.
    pub title: AcademicTitle,
    /// Hash recomputed from the stored core fields.
    pub expected_hash: String,
    /// `expected_hash == title.validation_hash`
    pub is_valid: bool,
}

impl IntegrityReport {
    pub fn for_title(title: AcademicTitle) -> Self {
        let expected_hash = title.expected_hash();
        let is_valid = expected_hash == title.validation_hash;
        Self {
            title,
            expected_hash,
            is_valid,
        }
    }
}
