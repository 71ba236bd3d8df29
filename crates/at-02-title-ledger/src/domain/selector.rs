//! # Query Selectors
//!
//! Selectors are built as data and serialized with `serde_json`, never by
//! string formatting, so a field value can not change the selector's shape.

use crate::domain::errors::TitleError;
use serde::Serialize;
use std::collections::BTreeMap;

/// Record field holding the student binding.
pub const STUDENT_ID_FIELD: &str = "studentId";

/// Equality selector of the form `{"selector": {"<field>": "<value>"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSelector {
    selector: BTreeMap<String, String>,
}

impl TitleSelector {
    /// All titles bound to `student_id`.
    pub fn by_student(student_id: &str) -> Self {
        let mut selector = BTreeMap::new();
        selector.insert(STUDENT_ID_FIELD.to_string(), student_id.to_string());
        Self { selector }
    }

    /// Field/value pairs of the selector.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selector.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Query text handed to the ledger's query engine.
    pub fn to_query_string(&self) -> Result<String, TitleError> {
        serde_json::to_string(self).map_err(|e| TitleError::Serialization(e.to_string()))
    }
}
