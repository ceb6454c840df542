//! Application repository

use super::{collect_all, filter_query, find_first, TargetScope};
use crate::error::{Error, Result};
use crate::models::Application;
use crate::pagination::PageFetcher;

#[derive(Debug, Clone)]
pub struct ApplicationRepository {
    fetcher: PageFetcher,
}

impl ApplicationRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// All applications in the targeted space, with their routes
    pub async fn list_apps(&self, scope: &TargetScope) -> Result<Vec<Application>> {
        let path = format!(
            "/v2/spaces/{}/apps?inline-relations-depth=1",
            scope.space_guid()?
        );
        collect_all(&self.fetcher, &path).await
    }

    /// Find an application by name in the targeted space
    pub async fn find_by_name(&self, scope: &TargetScope, name: &str) -> Result<Application> {
        let path = format!(
            "/v2/spaces/{}/apps?{}&inline-relations-depth=1",
            scope.space_guid()?,
            filter_query(&[("name", name)])
        );

        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("App", name))
    }
}
