//! Utility functions for request handling and input validation.
//!
//! - [`request_host`] - Raw `Host` header extraction
//! - [`validation`] - Short code, host and redirect URL rules

pub mod request_host;
pub mod validation;
