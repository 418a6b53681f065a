use axum::http::StatusCode;

/// Catalogue of error kinds the API can report
///
/// Each kind carries a stable code, the HTTP status it maps to and a
/// default message. Clients match on `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The referenced team does not exist
    TeamNotFound,
    /// The request body or path failed validation or decoding
    InvalidInput,
    /// Anything the server could not handle
    InternalError,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::TeamNotFound => "U0001",
            ErrorCode::InvalidInput => "C0001",
            ErrorCode::InternalError => "S0001",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::TeamNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ErrorCode::TeamNotFound => "Team not found",
            ErrorCode::InvalidInput => "Invalid input",
            ErrorCode::InternalError => "Internal server error",
        }
    }
}
