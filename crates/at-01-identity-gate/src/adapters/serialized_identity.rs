//! # Serialized Identity
//!
//! Caller credential as produced by the membership service:
//!
//! ```json
//! {"mspid": "universityMSP", "idBytes": "3082...."}
//! ```
//!
//! `idBytes` is the hex-encoded certificate. The gate only needs the
//! `mspid`, but a credential whose certificate is not valid hex is rejected
//! as malformed rather than trusted for its org id.

use crate::domain::IdentityResolutionError;
use crate::ports::ClientIdentity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerializedIdentityWire {
    mspid: String,
    id_bytes: String,
}

/// Decoded membership-service credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializedIdentity {
    mspid: String,
    certificate: Vec<u8>,
}

impl SerializedIdentity {
    pub fn new(mspid: impl Into<String>, certificate: Vec<u8>) -> Self {
        Self {
            mspid: mspid.into(),
            certificate,
        }
    }

    /// Decode a credential from its JSON wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IdentityResolutionError> {
        let wire: SerializedIdentityWire = serde_json::from_slice(bytes)
            .map_err(|e| IdentityResolutionError::MalformedCredential(e.to_string()))?;
        Self::from_wire(wire)
    }

    /// Decode a credential already parsed as JSON.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, IdentityResolutionError> {
        let wire: SerializedIdentityWire = serde_json::from_value(value.clone())
            .map_err(|e| IdentityResolutionError::MalformedCredential(e.to_string()))?;
        Self::from_wire(wire)
    }

    fn from_wire(wire: SerializedIdentityWire) -> Result<Self, IdentityResolutionError> {
        if wire.mspid.is_empty() {
            return Err(IdentityResolutionError::MalformedCredential(
                "empty mspid".to_string(),
            ));
        }
        let certificate = hex::decode(&wire.id_bytes).map_err(|e| {
            IdentityResolutionError::MalformedCredential(format!("idBytes: {}", e))
        })?;
        Ok(Self {
            mspid: wire.mspid,
            certificate,
        })
    }

    /// Encode to the JSON wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, IdentityResolutionError> {
        let wire = SerializedIdentityWire {
            mspid: self.mspid.clone(),
            id_bytes: hex::encode(&self.certificate),
        };
        serde_json::to_vec(&wire)
            .map_err(|e| IdentityResolutionError::MalformedCredential(e.to_string()))
    }

    pub fn mspid(&self) -> &str {
        &self.mspid
    }

    pub fn certificate(&self) -> &[u8] {
        &self.certificate
    }
}

impl ClientIdentity for SerializedIdentity {
    fn resolve_caller_org_id(&self) -> Result<String, IdentityResolutionError> {
        Ok(self.mspid.clone())
    }
}
