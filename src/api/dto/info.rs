//! DTOs for the service description endpoint.

use serde::Serialize;

/// Name, version and endpoint overview returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct ServiceInfoResponse {
    pub message: String,
    pub version: String,
    pub endpoints: EndpointsInfo,
}

/// Human-readable endpoint descriptions.
#[derive(Debug, Serialize)]
pub struct EndpointsInfo {
    pub shorten: &'static str,
    pub redirect: &'static str,
    pub stats: &'static str,
    pub metrics: &'static str,
    pub health: &'static str,
}
