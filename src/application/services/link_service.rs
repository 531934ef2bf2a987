//! Link creation service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::metrics::{Metrics, SHORTEN_LABELS};
use crate::utils::base_url::join_short_url;
use crate::utils::code_generator::{
    DEFAULT_CODE_LENGTH, generate_code, is_reserved_code, validate_custom_code,
};

/// Default cap on generated-code collisions before giving up.
pub const DEFAULT_MAX_CODE_ATTEMPTS: usize = 16;

/// Code generation settings.
#[derive(Debug, Clone, Copy)]
pub struct CodeOptions {
    pub length: usize,
    pub max_attempts: usize,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_MAX_CODE_ATTEMPTS,
        }
    }
}

/// A freshly created link together with its public URL.
#[derive(Debug, Clone)]
pub struct ShortenedLink {
    pub link: Link,
    pub short_url: String,
}

/// Service for creating shortened links.
///
/// Every insert goes through [`LinkRepository::create`], which is atomic, so
/// concurrent requests for the same code cannot both win.
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
    metrics: Arc<Metrics>,
    options: CodeOptions,
    generate: fn(usize) -> String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>, metrics: Arc<Metrics>, options: CodeOptions) -> Self {
        Self {
            link_repository,
            metrics,
            options,
            generate: generate_code,
        }
    }

    /// Replaces the random code source.
    #[cfg(test)]
    fn with_generator(mut self, generate: fn(usize) -> String) -> Self {
        self.generate = generate;
        self
    }

    /// Creates a short link for an already validated absolute URL.
    ///
    /// # Code Selection
    ///
    /// - If `custom_code` is provided, it is used verbatim
    /// - Otherwise a random code is generated, retrying on collision up to
    ///   the configured number of attempts. A draw that equals a reserved
    ///   code counts as a collision.
    ///
    /// The operation duration is recorded whether or not it succeeds; the
    /// created counter only moves on success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if the custom code is reserved.
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    /// Returns [`AppError::Internal`] if no free code was found.
    pub async fn shorten(
        &self,
        original_url: String,
        custom_code: Option<String>,
        base_url: &str,
    ) -> Result<ShortenedLink, AppError> {
        let _timer = self.metrics.start_timer(SHORTEN_LABELS);

        let link = match custom_code {
            Some(code) => self.create_with_custom_code(original_url, code).await?,
            None => self.create_with_generated_code(original_url).await?,
        };

        self.metrics.increment_created();
        info!("Created short link {} -> {}", link.code, link.original_url);

        let short_url = join_short_url(base_url, &link.code);

        Ok(ShortenedLink { link, short_url })
    }

    /// Number of links currently in the registry.
    pub async fn total_links(&self) -> Result<u64, AppError> {
        self.link_repository.count().await
    }

    async fn create_with_custom_code(
        &self,
        original_url: String,
        code: String,
    ) -> Result<Link, AppError> {
        validate_custom_code(&code)?;

        let new_link = NewLink {
            code,
            original_url,
        };

        self.link_repository
            .create(new_link)
            .await
            .map_err(|err| match err {
                AppError::Conflict { .. } => {
                    warn!("Custom code already taken");
                    AppError::conflict("Custom code already exists")
                }
                other => other,
            })
    }

    async fn create_with_generated_code(&self, original_url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.options.max_attempts {
            let code = (self.generate)(self.options.length);
            if is_reserved_code(&code) {
                debug!("Generated code is reserved (attempt {})", attempt);
                continue;
            }

            let new_link = NewLink {
                code,
                original_url: original_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Err(AppError::Conflict { .. }) => {
                    debug!("Generated code collided (attempt {})", attempt);
                }
                result => return result,
            }
        }

        Err(AppError::internal("Failed to generate unique short code"))
    }
}
