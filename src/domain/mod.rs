//! Domain layer containing business entities and logic.
//!
//! Nothing in here touches HTTP or the filesystem.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Persistence trait definitions
//! - [`resolver`] - Pure host + path to redirect resolution
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Mutation rules live in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod resolver;
