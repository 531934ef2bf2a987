//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryLinkRepository`] - Link storage and retrieval

pub mod memory_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
