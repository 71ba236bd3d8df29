//! # Ledger Value Codec
//!
//! Titles are stored as flat JSON objects.
//!
//! The external ledger answers a read of a missing key with zero-length
//! bytes instead of a not-found signal. Empty input is therefore decoded as
//! a deserialization failure here, in one place, before serde is consulted.

use crate::domain::entities::AcademicTitle;
use crate::domain::errors::TitleError;

/// Encode a title for storage.
pub fn encode_title(title: &AcademicTitle) -> Result<Vec<u8>, TitleError> {
    serde_json::to_vec(title).map_err(|e| TitleError::Serialization(e.to_string()))
}

/// Decode a stored or queried ledger value.
pub fn decode_title(bytes: &[u8]) -> Result<AcademicTitle, TitleError> {
    if bytes.is_empty() {
        return Err(TitleError::Deserialization("empty ledger value".to_string()));
    }
    serde_json::from_slice(bytes).map_err(|e| TitleError::Deserialization(e.to_string()))
}
