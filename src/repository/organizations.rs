//! Organization repository

use super::{filter_query, find_first};
use crate::error::{Error, Result};
use crate::models::Organization;
use crate::pagination::PageFetcher;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct OrganizationRepository {
    fetcher: PageFetcher,
}

impl OrganizationRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// List organizations ordered by name.
    ///
    /// A non-zero `limit` caps the result and stops the traversal as soon as
    /// it is reached; `0` lists everything.
    pub async fn list_orgs(&self, limit: usize) -> Result<Vec<Organization>> {
        let mut orgs = Vec::new();
        self.fetcher
            .fetch("/v2/organizations?order-by=name", |org: Organization| {
                orgs.push(org);
                limit == 0 || orgs.len() < limit
            })
            .await?;

        debug!(count = orgs.len(), limit, "listed organizations");
        Ok(orgs)
    }

    /// Find an organization (with spaces, domains and quotas) by name
    pub async fn find_by_name(&self, name: &str) -> Result<Organization> {
        let path = format!(
            "/v2/organizations?{}&inline-relations-depth=1",
            filter_query(&[("name", name.to_lowercase().as_str())])
        );

        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Organization", name))
    }

    /// Fetch each organization by GUID, one request at a time, in input order
    pub async fn get_many_by_guid(&self, guids: &[String]) -> Result<Vec<Organization>> {
        let mut orgs = Vec::with_capacity(guids.len());
        for guid in guids {
            let org = self
                .fetcher
                .get_resource(&format!("/v2/organizations/{guid}"))
                .await?;
            orgs.push(org);
        }
        Ok(orgs)
    }
}
