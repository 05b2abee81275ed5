//! Application layer services.
//!
//! Services consume repository traits and apply the request contracts from
//! [`crate::api::dto`] to domain entities.
//!
//! # Available Services
//!
//! - [`services::site_info_service::SiteInfoService`] - Site text patching
pub mod services;
