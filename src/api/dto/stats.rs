//! DTOs for service statistics endpoint.

use serde::Serialize;

/// Service-wide totals.
///
/// `total_urls` is the registry size; `total_urls_created` is the lifetime
/// creation counter. They agree while links are never removed.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_urls: u64,
    pub total_redirects: u64,
    pub total_urls_created: u64,
}
