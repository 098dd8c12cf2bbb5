//! HTTP middleware for request processing and protection.
//!
//! Provides Basic authentication for the admin surface and request tracing.

pub mod auth;
pub mod tracing;
