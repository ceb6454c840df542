//! Domain repository

use super::{any_exists, filter_query, find_first};
use crate::error::{Error, Result};
use crate::models::Domain;
use crate::pagination::PageFetcher;

#[derive(Debug, Clone)]
pub struct DomainRepository {
    fetcher: PageFetcher,
}

impl DomainRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Visit the shared domains, then the private domains of `org_guid`.
    ///
    /// Stopping during the shared domains skips the private listing entirely.
    pub async fn list_domains_for_org<F>(&self, org_guid: &str, mut visit: F) -> Result<()>
    where
        F: FnMut(Domain) -> bool,
    {
        let mut stopped = false;
        self.fetcher
            .fetch("/v2/shared_domains", |domain: Domain| {
                let keep_going = visit(domain);
                stopped = !keep_going;
                keep_going
            })
            .await?;

        if stopped {
            return Ok(());
        }

        let path = format!("/v2/organizations/{org_guid}/private_domains");
        self.fetcher.fetch::<Domain, _>(&path, &mut visit).await
    }

    pub async fn find_shared_by_name(&self, name: &str) -> Result<Domain> {
        let path = format!("/v2/shared_domains?{}", filter_query(&[("name", name)]));
        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Domain", name))
    }

    pub async fn find_private_by_name(&self, name: &str) -> Result<Domain> {
        let path = format!("/v2/private_domains?{}", filter_query(&[("name", name)]));
        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Domain", name))
    }

    /// Find a domain visible to `org_guid`: its private domains first, then
    /// the shared ones
    pub async fn find_by_name_in_org(&self, org_guid: &str, name: &str) -> Result<Domain> {
        let path = format!(
            "/v2/organizations/{org_guid}/private_domains?{}",
            filter_query(&[("name", name)])
        );

        if let Some(domain) = find_first(&self.fetcher, &path).await? {
            return Ok(domain);
        }

        self.find_shared_by_name(name).await
    }

    /// Whether `org_guid` owns or has been shared any private domain
    pub async fn org_has_private_domains(&self, org_guid: &str) -> Result<bool> {
        let path = format!("/v2/organizations/{org_guid}/private_domains?results-per-page=1");
        any_exists(&self.fetcher, &path).await
    }
}
