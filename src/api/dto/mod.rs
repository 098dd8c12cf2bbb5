//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request bodies
//! with required fields also derive validator's `Validate`.

pub mod domain;
pub mod health;
pub mod link;
pub mod password;
