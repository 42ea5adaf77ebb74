//! Uniform result envelope exposed to callers (UI layer, REST routes).
//!
//! The public API never throws across this boundary: every call resolves to
//! success-with-data, success-with-partial-errors (carried inside the data),
//! or failure-with-coded-error.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Coded error payload surfaced to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Tagged result envelope: exactly one of `data` / `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: &Error) -> Self {
        Self {
            data: None,
            error: Some(ErrorDetail {
                code: error.code().to_string(),
                message: error.to_string(),
            }),
        }
    }
}

impl<T> From<Result<T>> for ApiResponse<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => ApiResponse::err(&err),
        }
    }
}
