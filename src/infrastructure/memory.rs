//! Process-local repository implementations.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::SiteInfo;
use crate::domain::repositories::SiteInfoRepository;
use crate::error::AppError;

/// Keeps the site information record in memory.
///
/// Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemorySiteInfoRepository {
    info: RwLock<Option<SiteInfo>>,
}

impl InMemorySiteInfoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `info`.
    pub fn with_site_info(info: SiteInfo) -> Self {
        Self {
            info: RwLock::new(Some(info)),
        }
    }
}

#[async_trait]
impl SiteInfoRepository for InMemorySiteInfoRepository {
    async fn get(&self) -> Result<Option<SiteInfo>, AppError> {
        Ok(self.info.read().await.clone())
    }

    async fn save(&self, info: SiteInfo) -> Result<SiteInfo, AppError> {
        *self.info.write().await = Some(info.clone());
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_repository() {
        let repo = InMemorySiteInfoRepository::new();
        assert_eq!(repo.get().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_get() {
        let repo = InMemorySiteInfoRepository::new();
        let info = SiteInfo {
            hours_text: "Sat 10-2".to_string(),
            ..Default::default()
        };

        repo.save(info.clone()).await.unwrap();
        assert_eq!(repo.get().await.unwrap(), Some(info));
    }
}
