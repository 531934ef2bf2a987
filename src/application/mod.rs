//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation
//! - [`services::redirect_service::RedirectService`] - Short code resolution

pub mod services;
