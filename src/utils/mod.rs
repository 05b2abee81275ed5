//! Shared helpers used by the DTO layer.
//!
//! - [`case_insensitive`] - String-keyed map with case-insensitive key equality

pub mod case_insensitive;

pub use case_insensitive::CaseInsensitiveMap;
