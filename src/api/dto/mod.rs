//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase wire names; request DTOs additionally
//! derive `validator::Validate` where they carry bounds.

pub mod dashboard;
pub mod pagination;
pub mod site_info;

pub use dashboard::DashboardSummaryDto;
pub use pagination::{PagedRequest, PagedResponse, PaginationMeta};
pub use site_info::UpdateSiteInfoRequest;
