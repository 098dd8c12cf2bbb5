//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into resolver lookups and admin
//! operations, and formats responses according to API contracts.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication and request tracing middleware
//! - [`routes`] - Admin route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
