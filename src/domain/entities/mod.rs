//! Domain entities consumed by the DTO layer.
//!
//! - [`SiteInfo`] - Stored site text content
//! - [`SiteInfoPatch`] - Partial update applied to [`SiteInfo`]

pub mod site_info;

pub use site_info::{SiteInfo, SiteInfoPatch};
