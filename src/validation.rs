//! Input validation for contact form fields.

use crate::error::{FolioError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Maximum allowed length for a sender name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum allowed length for an email address.
pub const MAX_EMAIL_LENGTH: usize = 254;

/// Maximum allowed length for a message body.
pub const MAX_MESSAGE_LENGTH: usize = 5_000;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
    })
}

fn require(field: &str, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FolioError::Validation(format!("{} cannot be empty", field)));
    }
    if value.chars().count() > max {
        return Err(FolioError::Validation(format!(
            "{} exceeds maximum length of {} characters",
            field, max
        )));
    }
    Ok(())
}

/// Validates the sender name.
pub fn validate_name(name: &str) -> Result<()> {
    require("Name", name, MAX_NAME_LENGTH)
}

/// Validates the sender email: non-empty and shaped like `local@domain.tld`.
pub fn validate_email(email: &str) -> Result<()> {
    require("Email", email, MAX_EMAIL_LENGTH)?;
    if !email_pattern().is_match(email.trim()) {
        return Err(FolioError::Validation(format!(
            "Email '{}' is not a valid address",
            email.trim()
        )));
    }
    Ok(())
}

/// Validates the message body.
pub fn validate_message(message: &str) -> Result<()> {
    require("Message", message, MAX_MESSAGE_LENGTH)
}
