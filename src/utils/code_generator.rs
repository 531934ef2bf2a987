//! Short code generation and custom code checks.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Codes shadowed by static routes; a link stored under one of these could
/// never be resolved.
pub const RESERVED_CODES: &[&str] = &["metrics", "stats", "shorten", "health"];

/// Generates a random short code of `length` alphanumeric characters.
///
/// Each position is an independent uniform draw from `[A-Za-z0-9]`. Codes are
/// not guaranteed unique; callers retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code(6);
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

/// True if `code` is shadowed by a static route.
pub fn is_reserved_code(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Rejects custom codes that collide with a static route.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] for codes in [`RESERVED_CODES`].
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if is_reserved_code(code) {
        return Err(AppError::bad_request("Custom code is reserved"));
    }

    Ok(())
}
