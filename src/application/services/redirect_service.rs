//! Short code resolution service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::metrics::{Metrics, REDIRECT_LABELS};

/// Resolves short codes to their original URLs and counts redirects.
pub struct RedirectService<L: LinkRepository> {
    link_repository: Arc<L>,
    metrics: Arc<Metrics>,
}

impl<L: LinkRepository> RedirectService<L> {
    /// Creates a new redirect service.
    pub fn new(link_repository: Arc<L>, metrics: Arc<Metrics>) -> Self {
        Self {
            link_repository,
            metrics,
        }
    }

    /// Returns the URL stored for `code`.
    ///
    /// The lookup duration is recorded regardless of outcome; the redirect
    /// counter only moves when the code resolves.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let _timer = self.metrics.start_timer(REDIRECT_LABELS);

        let link = self
            .link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| {
                debug!("Short code {} not found", code);
                AppError::not_found("Short code not found")
            })?;

        self.metrics.increment_redirects();

        Ok(link.original_url)
    }
}
