//! # Pantry Contracts
//!
//! Wire-level data contracts for the pantry backend's HTTP JSON boundary.
//!
//! ## Contracts
//!
//! - [`PagedRequest`](api::dto::PagedRequest) - inbound `page` / `pageSize`, defaults 1 / 25
//! - [`DashboardSummaryDto`](api::dto::DashboardSummaryDto) - outbound dashboard aggregate
//!   with `YYYY-MM-DD` dates, exact decimals and case-insensitive maps
//! - [`UpdateSiteInfoRequest`](api::dto::UpdateSiteInfoRequest) - inbound partial update of
//!   the site's text blocks
//!
//! ## Layers
//!
//! - **API Layer** ([`api`]) - DTOs
//! - **Domain Layer** ([`domain`]) - Site info entity, patch and repository trait
//! - **Application Layer** ([`application`]) - Patch-applying service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//!
//! The dashboard figures are not computed here, and the producer's invariants
//! (`from <= to`, bill-type amounts summing to the total) are not checked.
//!
//! ## Configuration
//!
//! Loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod telemetry;
pub mod utils;

pub use error::AppError;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::api::dto::{
        DashboardSummaryDto, PagedRequest, PagedResponse, PaginationMeta, UpdateSiteInfoRequest,
    };
    pub use crate::application::services::SiteInfoService;
    pub use crate::domain::entities::{SiteInfo, SiteInfoPatch};
    pub use crate::error::AppError;
    pub use crate::infrastructure::InMemorySiteInfoRepository;
    pub use crate::utils::CaseInsensitiveMap;
}
