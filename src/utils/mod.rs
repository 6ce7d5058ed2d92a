//! Utility functions for code generation, input parsing, and request handling.
//!
//! - [`code_generator`] - Short code generation
//! - [`url_validator`] - Target URL syntax checks
//! - [`validity`] - Validity window parsing and expiry arithmetic
//! - [`extract_origin`] - Public origin derivation from HTTP headers
//! - [`short_link`] - Percent-encoded short link paths

pub mod code_generator;
pub mod extract_origin;
pub mod short_link;
pub mod url_validator;
pub mod validity;
