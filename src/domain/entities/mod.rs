//! Core domain entities.
//!
//! Entities are plain data structures without business logic. Creation input
//! is a separate type ([`NewLink`]) from the stored record ([`Link`]).

pub mod link;

pub use link::{Link, NewLink};
