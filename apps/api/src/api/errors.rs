use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::error_code::ErrorCode;
use crate::domain::team::{FieldError, TeamError};

/// API error carrying a catalogue code, a message and any field violations
#[derive(Debug)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
    pub errors: Vec<FieldError>,
}

/// JSON body written for every error response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(value_type = String, example = "U0001")]
    pub code: &'static str,
    #[schema(example = 404)]
    pub status: u16,
    #[schema(example = "Team not found")]
    pub message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiError {
    /// Creates an error with the catalogue's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    /// Creates an error with a specific message
    fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// Creates a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidInput, message)
    }

    /// Creates a 404 error for a missing team
    pub fn not_found() -> Self {
        Self::new(ErrorCode::TeamNotFound)
    }

    /// Creates a 500 Internal Server Error
    pub fn internal_server_error() -> Self {
        Self::new(ErrorCode::InternalError)
    }

    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            code: self.code.code(),
            status: status.as_u16(),
            message: self.message,
            errors: self.errors,
        });

        (status, body).into_response()
    }
}

impl From<TeamError> for ApiError {
    fn from(error: TeamError) -> Self {
        match error {
            TeamError::Validation(errors) => Self {
                errors: errors.field_errors().to_vec(),
                ..Self::new(ErrorCode::InvalidInput)
            },
            TeamError::NotFound(_) => Self::not_found(),
            TeamError::Repository(e) => {
                tracing::error!(error = %e, "Team store failure");
                Self::internal_server_error()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}
