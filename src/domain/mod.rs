//! Domain layer: entities and repository interfaces.
//!
//! - [`entities`] - Core data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on the API layer; DTOs convert into
//! domain types, never the other way around.

pub mod entities;
pub mod repositories;
