//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local link registry backed by a sharded concurrent map.
///
/// Created empty, never evicts, and is discarded on restart.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, String>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        // The entry guard holds the shard lock across check and insert.
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict("Custom code already exists")),
            Entry::Vacant(slot) => {
                slot.insert(new_link.original_url.clone());
                debug!("Stored link {}", new_link.code);
                Ok(Link::from(new_link))
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self
            .links
            .get(code)
            .map(|url| Link::new(code.to_string(), url.value().clone())))
    }

    async fn exists(&self, code: &str) -> Result<bool, AppError> {
        Ok(self.links.contains_key(code))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.links.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_link(code: &str, url: &str) -> NewLink {
        NewLink {
            code: code.to_string(),
            original_url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryLinkRepository::new();

        let link = repo
            .create(new_link("abc123", "https://example.com/"))
            .await
            .unwrap();
        assert_eq!(link.code, "abc123");

        let found = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com/");
        assert!(repo.exists("abc123").await.unwrap());
    }

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let repo = InMemoryLinkRepository::new();

        assert!(repo.find_by_code("missing").await.unwrap().is_none());
        assert!(!repo.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_create_duplicate_is_conflict_and_keeps_first() {
        let repo = InMemoryLinkRepository::new();

        repo.create(new_link("taken", "https://first.com/"))
            .await
            .unwrap();
        let result = repo.create(new_link("taken", "https://second.com/")).await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
        let found = repo.find_by_code("taken").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://first.com/");
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_codes_are_case_sensitive() {
        let repo = InMemoryLinkRepository::new();

        repo.create(new_link("AbC", "https://upper.com/"))
            .await
            .unwrap();
        repo.create(new_link("abc", "https://lower.com/"))
            .await
            .unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_create_same_code_single_winner() {
        let repo = Arc::new(InMemoryLinkRepository::new());

        let mut handles = Vec::new();
        for i in 0..64 {
            let repo = repo.clone();
            handles.push(tokio::spawn(async move {
                repo.create(new_link("race", &format!("https://example.com/{}", i)))
                    .await
            }));
        }

        let mut successes = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => successes += 1,
                Err(AppError::Conflict { .. }) => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(conflicts, 63);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
