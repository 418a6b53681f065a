//! Field-level validation for team payloads

use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

/// Smallest capacity a team may declare
pub const MIN_TEAM_SIZE: i32 = 2;

/// A single violated constraint on an inbound field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct FieldError {
    #[schema(value_type = String, example = "size")]
    pub field: &'static str,
    #[schema(example = "size must be at least 2")]
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field violation found in one payload
///
/// Validation does not stop at the first failure, so a payload with a blank
/// name and a size of zero reports both problems.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Returns the recorded violations in field order
    pub fn field_errors(&self) -> &[FieldError] {
        &self.0
    }

    /// Returns true if any violation concerns `field`
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validates a team name: present and not blank
pub fn validate_name(name: Option<String>) -> Result<String, FieldError> {
    require_text("name", name)
}

/// Validates a team address: present and not blank
pub fn validate_address(address: Option<String>) -> Result<String, FieldError> {
    require_text("address", address)
}

/// Validates a team capacity: present and at least [`MIN_TEAM_SIZE`]
pub fn validate_size(size: Option<i32>) -> Result<i32, FieldError> {
    match size {
        None => Err(FieldError::new("size", "size is required")),
        Some(size) if size < MIN_TEAM_SIZE => Err(FieldError::new(
            "size",
            format!("size must be at least {}", MIN_TEAM_SIZE),
        )),
        Some(size) => Ok(size),
    }
}

fn require_text(field: &'static str, value: Option<String>) -> Result<String, FieldError> {
    match value {
        Some(value) if !is_blank(&value) => Ok(value),
        _ => Err(FieldError::new(field, format!("{} is required", field))),
    }
}

/// Blank means empty once ASCII control characters and spaces are
/// trimmed from both ends; other Unicode whitespace counts as content.
fn is_blank(value: &str) -> bool {
    value.trim_matches(|c: char| c <= ' ').is_empty()
}
