//! Input validation shared by the parameter types in `server::model`.
//!
//! Every helper trims its input and returns the cleaned value, or `AppError::BadRequest`
//! naming the offending field.

use crate::server::error::AppError;

pub const MAX_EMAIL_LENGTH: usize = 320;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 1024;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 2000;
pub const MAX_SHORT_TEXT_LENGTH: usize = 500;
pub const MAX_URL_LENGTH: usize = 2048;

/// Trims `value` and requires it to be non-empty and at most `max` characters.
pub fn required_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    bounded_text(field, trimmed, max)
}

/// Trims `value` and requires it to be at most `max` characters. Empty is allowed.
pub fn bounded_text(field: &str, value: &str, max: usize) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max
        )));
    }
    Ok(trimmed.to_string())
}

/// Like [`bounded_text`] but maps a missing or blank value to `None`.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max: usize,
) -> Result<Option<String>, AppError> {
    match value {
        Some(value) => {
            let cleaned = bounded_text(field, &value, max)?;
            Ok((!cleaned.is_empty()).then_some(cleaned))
        }
        None => Ok(None),
    }
}

/// Normalizes an email address to its trimmed lowercase form.
///
/// Only the shape `local@domain` is checked; deliverability is not.
pub fn email(value: &str) -> Result<String, AppError> {
    let normalized = value.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(AppError::BadRequest("Email is required".to_string()));
    }
    if normalized.chars().count() > MAX_EMAIL_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }
    match normalized.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(normalized),
        _ => Err(AppError::BadRequest("Email is not valid".to_string())),
    }
}

pub fn password(value: &str) -> Result<(), AppError> {
    let length = value.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }
    if length > MAX_PASSWORD_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }
    Ok(())
}
