//! Validation and canonical serialization of target URLs.
//!
//! This is the collaborator that turns a raw `url` field from a request body
//! into the absolute URL string stored in the registry.

use url::Url;

/// Longest accepted target URL, in bytes.
pub const MAX_URL_LENGTH: usize = 2083;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("URL must not exceed {MAX_URL_LENGTH} characters")]
    TooLong,
}

/// Parses `input` as an absolute HTTP(S) URL and returns its canonical form.
///
/// The `url` crate's WHATWG serialization lowercases the host, drops default
/// ports and gives bare hosts a `/` path. Query and fragment are preserved.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::InvalidFormat`] for relative or malformed URLs,
/// [`UrlNormalizationError::UnsupportedProtocol`] for non-HTTP(S) schemes and
/// [`UrlNormalizationError::TooLong`] past [`MAX_URL_LENGTH`].
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     normalize_url("https://www.python.org").unwrap(),
///     "https://www.python.org/"
/// );
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedProtocol),
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::InvalidFormat(
            "URL must have a host".to_string(),
        ));
    }

    let normalized = url.to_string();
    if normalized.len() > MAX_URL_LENGTH {
        return Err(UrlNormalizationError::TooLong);
    }

    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bare_host_gets_trailing_slash() {
        assert_eq!(
            normalize_url("https://www.python.org").unwrap(),
            "https://www.python.org/"
        );
    }

    #[test]
    fn test_normalize_uppercase_host_and_default_port() {
        assert_eq!(
            normalize_url("HTTPS://EXAMPLE.COM:443/Path").unwrap(),
            "https://example.com/Path"
        );
        assert_eq!(
            normalize_url("http://example.com:80/path").unwrap(),
            "http://example.com/path"
        );
    }

    #[test]
    fn test_normalize_keeps_custom_port_query_and_fragment() {
        assert_eq!(
            normalize_url("http://localhost:3000/search?q=rust#top").unwrap(),
            "http://localhost:3000/search?q=rust#top"
        );
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(
            normalize_url("  https://example.com/a  ").unwrap(),
            "https://example.com/a"
        );
    }

    #[test]
    fn test_normalize_not_a_url() {
        assert!(matches!(
            normalize_url("not-a-valid-url"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_relative_path() {
        assert!(matches!(
            normalize_url("/just/a/path"),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_empty_string() {
        assert!(matches!(
            normalize_url(""),
            Err(UrlNormalizationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_other_schemes() {
        for input in [
            "ftp://example.com/file.txt",
            "javascript:alert('xss')",
            "mailto:test@example.com",
            "data:text/plain,Hello",
        ] {
            assert!(
                matches!(
                    normalize_url(input),
                    Err(UrlNormalizationError::UnsupportedProtocol)
                ),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_normalize_length_limit() {
        let ok = format!("https://example.com/{}", "a".repeat(2000));
        assert!(normalize_url(&ok).is_ok());

        let too_long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(matches!(
            normalize_url(&too_long),
            Err(UrlNormalizationError::TooLong)
        ));
    }
}
