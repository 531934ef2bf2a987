//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Registry of short code to URL mappings.
///
/// Links are only ever added. There is no update or delete.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a link if its code is not taken yet.
    ///
    /// The existence check and the insert happen as one atomic step, so two
    /// concurrent callers with the same code can never both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code already exists.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Returns true iff a mapping for `code` is present.
    async fn exists(&self, code: &str) -> Result<bool, AppError>;

    /// Number of links currently stored.
    async fn count(&self) -> Result<u64, AppError>;
}
