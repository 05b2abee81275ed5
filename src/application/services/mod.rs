//! Services consuming the DTO contracts.

pub mod site_info_service;

pub use site_info_service::SiteInfoService;
