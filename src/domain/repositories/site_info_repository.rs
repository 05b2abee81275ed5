//! Repository trait for site information storage.

use crate::domain::entities::SiteInfo;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for the single site information record.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemorySiteInfoRepository`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteInfoRepository: Send + Sync {
    /// Loads the stored site information.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(SiteInfo))` if a record has been saved
    /// - `Ok(None)` if nothing has been saved yet
    async fn get(&self) -> Result<Option<SiteInfo>, AppError>;

    /// Replaces the stored site information and returns what was stored.
    async fn save(&self, info: SiteInfo) -> Result<SiteInfo, AppError>;
}
