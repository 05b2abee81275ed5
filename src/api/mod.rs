//! API contract layer.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization

pub mod dto;
