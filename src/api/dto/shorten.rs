//! DTOs for link shortening endpoint.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

/// Custom codes must fit in a single path segment and reach the router
/// unchanged, so percent-escapes are not allowed either.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^/?#%\s]*$").unwrap());

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute HTTP/HTTPS).
    #[validate(length(max = 2083, message = "URL must not exceed 2083 characters"))]
    pub url: String,

    /// Optional custom short code. An empty string means "generate one".
    #[validate(length(max = 128, message = "Custom code must not exceed 128 characters"))]
    #[validate(regex(
        path = *CUSTOM_CODE_REGEX,
        message = "Custom code must not contain '/', '?', '#', '%' or whitespace"
    ))]
    #[serde(default)]
    pub custom_code: Option<String>,
}

impl ShortenRequest {
    /// The custom code, with an empty value treated as absent.
    pub fn custom_code(&self) -> Option<String> {
        self.custom_code.clone().filter(|code| !code.is_empty())
    }
}

/// A created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}
