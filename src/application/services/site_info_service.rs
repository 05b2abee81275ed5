//! Site information read and patch service.

use std::sync::Arc;

use crate::api::dto::site_info::UpdateSiteInfoRequest;
use crate::domain::entities::SiteInfo;
use crate::domain::repositories::SiteInfoRepository;
use crate::error::AppError;
use serde_json::json;

/// Service applying partial updates to the site's text content.
///
/// Only fields carried by the request are overwritten; see
/// [`UpdateSiteInfoRequest`] for the absent/`null`/value semantics.
pub struct SiteInfoService<R: SiteInfoRepository> {
    repository: Arc<R>,
}

impl<R: SiteInfoRepository> SiteInfoService<R> {
    /// Creates a new site information service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Retrieves the stored site information.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if nothing has been saved yet.
    pub async fn get_site_info(&self) -> Result<SiteInfo, AppError> {
        self.repository
            .get()
            .await?
            .ok_or_else(|| AppError::not_found("Site info not found", json!({})))
    }

    /// Applies `request` as a patch over the stored site information.
    ///
    /// When nothing is stored yet the patch is applied over an empty
    /// [`SiteInfo`]. A request that changes nothing is not saved.
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub async fn update_site_info(
        &self,
        request: UpdateSiteInfoRequest,
    ) -> Result<SiteInfo, AppError> {
        let mut info = self.repository.get().await?.unwrap_or_default();

        let patch = request.into_patch();
        if patch.is_empty() {
            tracing::debug!("Site info update carried no changes; skipping save");
            return Ok(info);
        }

        let written = info.apply(patch);
        let saved = self.repository.save(info).await?;
        tracing::info!(fields = written, "Site info updated");

        Ok(saved)
    }
}
