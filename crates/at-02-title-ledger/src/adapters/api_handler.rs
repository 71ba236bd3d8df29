//! # API Query Handler
//!
//! In-process JSON dispatch onto `TitleLedgerApi`, for hosts that receive
//! contract invocations as `(method, params)` pairs.
//!
//! ```text
//! Host (gateway, CLI, peer) → handle_api_query(method, params) → TitleLedgerApi
//! ```

use crate::domain::{AcademicTitle, TitleDraft, TitleError};
use crate::ports::TitleLedgerApi;
use at_01_identity_gate::SerializedIdentity;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Error from API query handling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiQueryError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl ApiQueryError {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const CONTRACT_ERROR: i32 = -32000;

    pub fn method_not_found(method: &str) -> Self {
        Self {
            code: Self::METHOD_NOT_FOUND,
            message: format!("Method not found: {}", method),
            data: None,
        }
    }

    pub fn invalid_params(msg: &str) -> Self {
        Self {
            code: Self::INVALID_PARAMS,
            message: msg.to_string(),
            data: None,
        }
    }
}

impl From<TitleError> for ApiQueryError {
    fn from(err: TitleError) -> Self {
        Self {
            code: Self::CONTRACT_ERROR,
            message: err.to_string(),
            data: Some(json!({ "kind": err.kind() })),
        }
    }
}

impl std::fmt::Display for ApiQueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiQueryError {}

/// Response for a student query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentTitlesResponse {
    pub student_id: String,
    pub count: usize,
    pub titles: Vec<AcademicTitle>,
}

/// JSON adapter over a `TitleLedgerApi` implementation.
pub struct TitleApiHandler<S> {
    service: S,
}

impl<S: TitleLedgerApi> TitleApiHandler<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Handle ping request (health check).
    pub fn handle_ping(&self) -> Value {
        json!({
            "status": "ok",
            "subsystem": "at-02-title-ledger"
        })
    }

    pub fn handle_issue_title(
        &self,
        credential: &SerializedIdentity,
        draft: TitleDraft,
    ) -> Result<Value, ApiQueryError> {
        let title_id = draft.title_id.clone();
        self.service.issue_title(credential, draft)?;
        Ok(json!({ "issued": true, "titleId": title_id }))
    }

    pub fn handle_verify_title(&self, title_id: &str) -> Result<Value, ApiQueryError> {
        let title = self.service.verify_title(title_id)?;
        to_value(&title)
    }

    pub fn handle_check_integrity(&self, title_id: &str) -> Result<Value, ApiQueryError> {
        let report = self.service.check_integrity(title_id)?;
        to_value(&report)
    }

    pub fn handle_get_titles_by_student(&self, student_id: &str) -> Result<Value, ApiQueryError> {
        let titles = self.service.get_titles_by_student(student_id)?;
        to_value(&StudentTitlesResponse {
            student_id: student_id.to_string(),
            count: titles.len(),
            titles,
        })
    }

    pub fn handle_transfer(&self, title_id: &str, new_owner: &str) -> Result<Value, ApiQueryError> {
        self.service.transfer(title_id, new_owner)?;
        Ok(json!({ "transferred": true }))
    }
}

/// Handle an API query.
///
/// ## Supported Methods
///
/// - `ping`: Health check
/// - `issue_title`: `{"credential": {...}, "title": {...}}`
/// - `verify_title`: `{"titleId": "..."}`
/// - `check_integrity`: `{"titleId": "..."}`
/// - `get_titles_by_student`: `{"studentId": "..."}`
/// - `transfer`: `{"titleId": "...", "newOwner": "..."}`
pub fn handle_api_query<S: TitleLedgerApi>(
    handler: &TitleApiHandler<S>,
    method: &str,
    params: &Value,
) -> Result<Value, ApiQueryError> {
    match method {
        "ping" => Ok(handler.handle_ping()),
        "issue_title" => {
            let credential = params
                .get("credential")
                .ok_or_else(|| ApiQueryError::invalid_params("Missing credential parameter"))?;
            // An undecodable credential is the caller's identity failing to
            // resolve, so it goes through the contract's error path.
            let credential = SerializedIdentity::from_json(credential).map_err(|e| {
                ApiQueryError::from(TitleError::Authorization(e.into()))
            })?;
            let title = params
                .get("title")
                .ok_or_else(|| ApiQueryError::invalid_params("Missing title parameter"))?;
            let draft: TitleDraft = serde_json::from_value(title.clone())
                .map_err(|e| ApiQueryError::invalid_params(&format!("Invalid title: {}", e)))?;
            handler.handle_issue_title(&credential, draft)
        }
        "verify_title" => handler.handle_verify_title(str_param(params, "titleId")?),
        "check_integrity" => handler.handle_check_integrity(str_param(params, "titleId")?),
        "get_titles_by_student" => {
            handler.handle_get_titles_by_student(str_param(params, "studentId")?)
        }
        "transfer" => handler.handle_transfer(
            str_param(params, "titleId")?,
            str_param(params, "newOwner")?,
        ),
        _ => Err(ApiQueryError::method_not_found(method)),
    }
}

/// Parse a string parameter from JSON params.
fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, ApiQueryError> {
    params
        .get(name)
        .and_then(Value::as_str)
        .ok_or_else(|| ApiQueryError::invalid_params(&format!("Missing {} parameter", name)))
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, ApiQueryError> {
    serde_json::to_value(value)
        .map_err(|e| ApiQueryError::from(TitleError::Serialization(e.to_string())))
}
