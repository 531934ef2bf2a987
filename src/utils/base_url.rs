//! Public base URL derivation from HTTP request headers.

use axum::http::{HeaderMap, HeaderName, Uri, header};

const X_FORWARDED_PROTO: HeaderName = HeaderName::from_static("x-forwarded-proto");
const X_FORWARDED_HOST: HeaderName = HeaderName::from_static("x-forwarded-host");

/// Returns the scheme and authority the client used to reach the service,
/// without a trailing slash (e.g. `http://localhost:8000`).
///
/// Resolution order:
///
/// - scheme: `X-Forwarded-Proto`, then the request URI, then `http`
/// - host: `X-Forwarded-Host`, then `Host`, then the request URI authority,
///   then `localhost`
///
/// `X-Forwarded-*` headers are client-controlled unless a reverse proxy
/// overwrites them, so they are only read when `trust_forwarded` is set.
/// Only the first value of a comma-separated forwarded header is used.
pub fn extract_base_url(headers: &HeaderMap, uri: &Uri, trust_forwarded: bool) -> String {
    let forwarded = |name: &HeaderName| {
        if trust_forwarded {
            first_header_value(headers, name)
        } else {
            None
        }
    };

    let scheme = forwarded(&X_FORWARDED_PROTO)
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    let host = forwarded(&X_FORWARDED_HOST)
        .or_else(|| first_header_value(headers, &header::HOST))
        .or_else(|| uri.authority().map(|a| a.as_str().to_string()))
        .unwrap_or_else(|| "localhost".to_string());

    format!("{}://{}", scheme, host).trim_end_matches('/').to_string()
}

/// Joins a base URL and a short code into the public short URL.
pub fn join_short_url(base_url: &str, code: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), code)
}

fn first_header_value(headers: &HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
