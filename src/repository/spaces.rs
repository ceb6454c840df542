//! Space repository

use super::{filter_query, find_first, TargetScope};
use crate::error::{Error, Result};
use crate::models::Space;
use crate::pagination::PageFetcher;

#[derive(Debug, Clone)]
pub struct SpaceRepository {
    fetcher: PageFetcher,
}

impl SpaceRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Visit the spaces of the targeted org
    pub async fn list_spaces<F>(&self, scope: &TargetScope, visit: F) -> Result<()>
    where
        F: FnMut(Space) -> bool,
    {
        self.list_spaces_from_org(scope.org_guid()?, visit).await
    }

    /// Visit the spaces of `org_guid`, ordered by name
    pub async fn list_spaces_from_org<F>(&self, org_guid: &str, visit: F) -> Result<()>
    where
        F: FnMut(Space) -> bool,
    {
        let path =
            format!("/v2/organizations/{org_guid}/spaces?order-by=name&inline-relations-depth=1");
        self.fetcher.fetch(&path, visit).await
    }

    /// Find a space by name in the targeted org
    pub async fn find_by_name(&self, scope: &TargetScope, name: &str) -> Result<Space> {
        self.find_by_name_in_org(scope.org_guid()?, name).await
    }

    /// Find a space by name in `org_guid`
    pub async fn find_by_name_in_org(&self, org_guid: &str, name: &str) -> Result<Space> {
        let path = format!(
            "/v2/organizations/{org_guid}/spaces?{}&inline-relations-depth=1",
            filter_query(&[("name", name.to_lowercase().as_str())])
        );

        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Space", name))
    }
}
