//! Repository trait definitions for the domain layer.
//!
//! - [`LinkRepository`] - The short code registry
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
