// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope wrapping every search API payload:
/// `{"status": "success", "data": ...}` or `{"status": "failure", "data": {"message": ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "data", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success(T),
    Failure(FailureData),
}

impl<T> ApiResponse<T> {
    pub fn failure(message: impl Into<String>, error: Option<serde_json::Value>) -> Self {
        ApiResponse::Failure(FailureData {
            message: message.into(),
            error,
        })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }
}

/// Failure details; `error` carries the engine's own error body when it sent one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FailureData {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::Success(json!({"total": 3}));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "success", "data": {"total": 3}})
        );
    }

    #[test]
    fn test_failure_envelope_shape() {
        let response: ApiResponse<()> = ApiResponse::failure("index_not_found_exception", None);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"status": "failure", "data": {"message": "index_not_found_exception"}})
        );
        assert!(!response.is_success());
    }

    #[test]
    fn test_failure_forwards_engine_error() {
        let engine_error = json!({"error": {"type": "index_not_found_exception"}, "status": 404});
        let response: ApiResponse<()> =
            ApiResponse::failure("engine returned 404", Some(engine_error.clone()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["data"]["error"], engine_error);
    }

    #[test]
    fn test_envelope_parses_back() {
        let raw = r#"{"status":"failure","data":{"message":"boom"}}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(raw).unwrap();
        assert_eq!(response, ApiResponse::failure("boom", None));
    }
}
