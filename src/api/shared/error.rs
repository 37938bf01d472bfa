// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types and error handling utilities shared across API versions.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::mappings::MappingError;
use crate::store::StoreError;

/// Error codes for API responses
pub mod error_codes {
    pub const AUTHOR_NOT_FOUND: &str = "AUTHOR_NOT_FOUND";
    pub const BOOK_NOT_FOUND: &str = "BOOK_NOT_FOUND";

    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNAUTHORIZED: &str = "UNAUTHORIZED";
    pub const NOT_ACCEPTABLE: &str = "NOT_ACCEPTABLE";
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}

/// API error response structure
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetail>,
}

/// Additional error details
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Resource type if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Resource ID if applicable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// Offending field for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Add details to the error response
    pub fn with_details(mut self, details: ErrorDetail) -> Self {
        self.details = Some(details);
        self
    }

    /// Pair the response with the status code its error code maps to
    pub fn with_status(self) -> (StatusCode, axum::Json<Self>) {
        let status = status_from_code(&self.code);
        (status, axum::Json(self))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        self.with_status().into_response()
    }
}

/// Convert an error code to an HTTP status code
fn status_from_code(code: &str) -> StatusCode {
    match code {
        error_codes::AUTHOR_NOT_FOUND | error_codes::BOOK_NOT_FOUND => StatusCode::NOT_FOUND,

        error_codes::VALIDATION_FAILED => StatusCode::UNPROCESSABLE_ENTITY,
        error_codes::INVALID_REQUEST => StatusCode::BAD_REQUEST,
        error_codes::UNAUTHORIZED => StatusCode::UNAUTHORIZED,
        error_codes::NOT_ACCEPTABLE => StatusCode::NOT_ACCEPTABLE,

        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<StoreError> for ErrorResponse {
    fn from(err: StoreError) -> Self {
        let message = err.to_string();
        match err {
            StoreError::AuthorNotFound(id) => ErrorResponse::new(
                error_codes::AUTHOR_NOT_FOUND,
                message,
            )
            .with_details(ErrorDetail {
                resource_type: Some("author".to_string()),
                resource_id: Some(id.to_string()),
                field: None,
            }),
            StoreError::BookNotFound { book_id, .. } => {
                ErrorResponse::new(error_codes::BOOK_NOT_FOUND, message).with_details(ErrorDetail {
                    resource_type: Some("book".to_string()),
                    resource_id: Some(book_id.to_string()),
                    field: None,
                })
            }
        }
    }
}

impl From<MappingError> for ErrorResponse {
    fn from(err: MappingError) -> Self {
        ErrorResponse::new(error_codes::VALIDATION_FAILED, err.to_string()).with_details(
            ErrorDetail {
                resource_type: None,
                resource_id: None,
                field: Some(err.field.to_string()),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("TEST_CODE", "Test message");
        let json = serde_json::to_string(&response).expect("Failed to serialize");

        assert!(json.contains("\"code\":\"TEST_CODE\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_status_from_code() {
        assert_eq!(
            status_from_code(error_codes::AUTHOR_NOT_FOUND),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_from_code(error_codes::VALIDATION_FAILED),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_from_code(error_codes::NOT_ACCEPTABLE),
            StatusCode::NOT_ACCEPTABLE
        );
        assert_eq!(
            status_from_code("SOMETHING_ELSE"),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_conversion() {
        let id = Uuid::new_v4();
        let response = ErrorResponse::from(StoreError::AuthorNotFound(id));
        assert_eq!(response.code, error_codes::AUTHOR_NOT_FOUND);
        let details = response.details.unwrap();
        assert_eq!(details.resource_type.as_deref(), Some("author"));
        assert_eq!(details.resource_id, Some(id.to_string()));
    }

    #[test]
    fn test_mapping_error_conversion() {
        let response = ErrorResponse::from(MappingError {
            field: "title",
            reason: "cannot be empty".to_string(),
        });
        let (status, _) = response.with_status();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }
}
