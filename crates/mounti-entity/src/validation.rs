//! Bridge from `validator` derive checks to [`AppError`].

use validator::{Validate, ValidationErrors};

use mounti_core::error::AppError;
use mounti_core::result::AppResult;

/// Run `validator` checks and report failures as a validation error.
pub fn check<T: Validate>(value: &T) -> AppResult<()> {
    value.validate().map_err(into_app_error)
}

/// Flatten field errors into a single readable message.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: {}", e.code),
            })
        })
        .collect();
    parts.sort();
    AppError::validation(parts.join("; "))
}

/// Require a finite, non-negative amount.
pub fn require_non_negative(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AppError::validation(format!(
            "{field}: must be a non-negative number"
        )))
    }
}

/// Require text that is not only whitespace.
pub fn require_not_blank(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::validation(format!("{field}: must not be blank")))
    } else {
        Ok(())
    }
}
