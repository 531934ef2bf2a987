//! Utility functions for code generation, URL processing, and request handling.
//!
//! - [`code_generator`] - Short code generation and custom code checks
//! - [`url_normalizer`] - Target URL validation and canonical form
//! - [`base_url`] - Public base URL derivation from HTTP headers

pub mod base_url;
pub mod code_generator;
pub mod url_normalizer;
