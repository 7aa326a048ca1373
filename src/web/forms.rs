//! Shared form machinery: error flattening and date field parsing

use chrono::NaiveDate;
use validator::ValidationErrors;

/// A single field-level validation message, rendered under the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Flatten validator output into a displayable list, sorted by field so the
/// rendered order is stable.
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("Invalid value for {}", field));
            out.push(FieldError::new(field, message));
        }
    }
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

/// Parse an optional `YYYY-MM-DD` form field. Empty or whitespace-only input
/// means the date was not provided.
pub fn parse_optional_date(value: &str) -> Result<Option<NaiveDate>, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| "must be a date in YYYY-MM-DD format".to_string())
}
