//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{CodeOptions, LinkService, RedirectService};
use crate::infrastructure::persistence::InMemoryLinkRepository;
use crate::metrics::Metrics;

/// Handler state. Cloning is cheap; all members are shared.
///
/// Each `AppState::new` call builds a fresh registry and metrics set, so
/// tests can run isolated instances side by side.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryLinkRepository>>,
    pub redirect_service: Arc<RedirectService<InMemoryLinkRepository>>,
    pub metrics: Arc<Metrics>,
    /// Overrides the request-derived base URL in generated short URLs.
    pub public_base_url: Option<String>,
    /// Whether `X-Forwarded-Proto` / `X-Forwarded-Host` may set the base URL.
    pub trust_forwarded_headers: bool,
}

impl AppState {
    /// Wires an empty registry, fresh metrics and both services together.
    ///
    /// # Errors
    ///
    /// Returns a Prometheus error if metric registration fails.
    pub fn new(options: CodeOptions, public_base_url: Option<String>) -> prometheus::Result<Self> {
        let link_repository = Arc::new(InMemoryLinkRepository::new());
        let metrics = Arc::new(Metrics::new()?);

        let link_service = Arc::new(LinkService::new(
            link_repository.clone(),
            metrics.clone(),
            options,
        ));
        let redirect_service = Arc::new(RedirectService::new(link_repository, metrics.clone()));

        Ok(Self {
            link_service,
            redirect_service,
            metrics,
            public_base_url,
            trust_forwarded_headers: false,
        })
    }

    /// Lets `X-Forwarded-*` headers pick the short URL base. Enable only
    /// behind a proxy that sets them.
    pub fn trust_forwarded_headers(mut self, trust: bool) -> Self {
        self.trust_forwarded_headers = trust;
        self
    }
}
