//! Request-schema helpers shared by every create/update DTO.
//!
//! DTOs derive [`validator::Validate`]; [`validate_input`] runs the derived
//! rules and folds every failure into a single [`CoreError::Validation`]
//! whose message lists each problem as `field: message`.

use std::sync::LazyLock;

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Lowercase, hyphen-separated URL slug (`kids-swimming`, `branch-2`).
pub static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("valid slug regex"));

/// Loose phone format: optional leading `+`, digits, spaces, dashes, parentheses.
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()\-]{6,20}$").expect("valid phone regex"));

/// Minimum accepted password length for user accounts.
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Key under which `validator` files struct-level (schema) errors.
const SCHEMA_ERRORS_KEY: &str = "__all__";

/// Run the derived validation rules on `input`.
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(collect_messages(&errors).join("; ")))
}

/// Flatten `validator` errors into sorted, human-readable messages.
///
/// Field errors render as `field: message`; struct-level errors render as the
/// bare message. When a rule has no custom message its code is used
/// (e.g. `email: email`).
pub fn collect_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        let field: &str = field.as_ref();
        for err in field_errors.iter() {
            let text = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| err.code.to_string());
            if field == SCHEMA_ERRORS_KEY {
                messages.push(text);
            } else {
                messages.push(format!("{field}: {text}"));
            }
        }
    }
    messages.sort();
    messages
}

/// Build a [`ValidationError`] with a human-readable message.
pub fn error_with_message(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// `min` must not exceed `max` when both bounds are present.
pub fn check_ordered<T: PartialOrd>(
    min: Option<T>,
    max: Option<T>,
    code: &'static str,
    message: &'static str,
) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => Err(error_with_message(code, message)),
        _ => Ok(()),
    }
}
