//! # Snaplink
//!
//! A small URL shortening service built with Axum. Links live in process
//! memory and are lost on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity and the registry trait
//! - **Application Layer** ([`application`]) - Shortening and redirect services
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory registry
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//! - **Metrics** ([`metrics`]) - Counters and latency histogram with Prometheus export
//!
//! ## Quick Start
//!
//! ```bash
//! LISTEN=127.0.0.1:8000 cargo run
//!
//! curl -X POST localhost:8000/shorten \
//!      -H 'content-type: application/json' \
//!      -d '{"url": "https://www.python.org", "custom_code": "python"}'
//! curl -i localhost:8000/python
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod metrics;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{CodeOptions, LinkService, RedirectService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::metrics::Metrics;
    pub use crate::state::AppState;
}
