//! HTTP request handlers.
//!
//! Each handler module corresponds to one endpoint.

pub mod health;
pub mod metrics;
pub mod redirect;
pub mod root;
pub mod shorten;
pub mod stats;

pub use health::health_handler;
pub use metrics::metrics_handler;
pub use redirect::redirect_handler;
pub use root::root_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
