//! Input checks shared by the HTTP handlers and the services.

use crate::{CoreError, Result as CoreErrorResult};

use serde_json::Value;

pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_NAME_LENGTH: usize = 100;

/// Accept only a non-blank JSON string and return it trimmed.
#[track_caller]
pub fn validate_question(question: Option<&Value>) -> CoreErrorResult<String> {
    let Some(Value::String(text)) = question else {
        return Err(CoreError::validation(
            "question",
            "Question must be a valid string",
        ));
    };

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(
            "question",
            "Question must be a valid string",
        ));
    }

    Ok(trimmed.to_string())
}

/// Trim and lowercase an email address, rejecting obviously malformed input.
#[track_caller]
pub fn validate_email(email: &str) -> CoreErrorResult<String> {
    let email = email.trim().to_lowercase();

    if email.is_empty() {
        return Err(CoreError::validation("email", "Email is required"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(CoreError::validation(
            "email",
            format!("Email exceeds {} characters", MAX_EMAIL_LENGTH),
        ));
    }

    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(CoreError::validation("email", "Email address is invalid")),
    }
}

#[track_caller]
pub fn validate_password(password: &str) -> CoreErrorResult<()> {
    if password.is_empty() {
        return Err(CoreError::validation("password", "Password is required"));
    }
    Ok(())
}

/// Trim a display name. Blank names clear the field.
#[track_caller]
pub fn normalize_name(name: Option<&str>) -> CoreErrorResult<Option<String>> {
    let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
        return Ok(None);
    };

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::validation(
            "name",
            format!("Name exceeds {} characters", MAX_NAME_LENGTH),
        ));
    }

    Ok(Some(name.to_string()))
}
