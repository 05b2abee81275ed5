//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for testing.

pub mod site_info_repository;

pub use site_info_repository::SiteInfoRepository;

#[cfg(test)]
pub use site_info_repository::MockSiteInfoRepository;
