// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use serde_json::Value;
use thiserror::Error;

pub type SearchResult<T> = Result<T, SearchError>;

/// Errors from talking to the search engine. Query compilation and facet
/// translation never fail, so everything here comes from the engine call.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Invalid search engine URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Search engine request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Search engine returned {status}: {reason}")]
    Engine {
        status: u16,
        reason: String,
        /// Error body exactly as the engine sent it
        body: Value,
    },
    #[error("Unreadable search engine response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SearchError {
    /// Build an engine error from a non-2xx response body.
    pub fn engine(status: u16, body: &[u8]) -> Self {
        let body = serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));
        let reason = engine_reason(&body);
        SearchError::Engine {
            status,
            reason,
            body,
        }
    }

    /// The engine's raw error body, if it returned one.
    pub fn engine_body(&self) -> Option<&Value> {
        match self {
            SearchError::Engine { body, .. } => Some(body),
            _ => None,
        }
    }
}

// Elasticsearch errors look like {"error": {"type": ..., "reason": ...}, "status": 404}
fn engine_reason(body: &Value) -> String {
    let error = body.get("error");
    let reason = error
        .and_then(|e| e.get("reason"))
        .or_else(|| error.and_then(|e| e.get("type")))
        .or(error)
        .unwrap_or(body);

    match reason {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
