//! Route repository

use super::{any_exists, filter_query, find_first, TargetScope};
use crate::error::{Error, Result};
use crate::models::{Domain, Route};
use crate::pagination::PageFetcher;

#[derive(Debug, Clone)]
pub struct RouteRepository {
    fetcher: PageFetcher,
}

impl RouteRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    /// Visit the routes of the targeted space
    pub async fn list_routes<F>(&self, scope: &TargetScope, visit: F) -> Result<()>
    where
        F: FnMut(Route) -> bool,
    {
        let path = format!(
            "/v2/spaces/{}/routes?inline-relations-depth=1",
            scope.space_guid()?
        );
        self.fetcher.fetch(&path, visit).await
    }

    /// Visit every route of the targeted org, across all its spaces
    pub async fn list_all_routes<F>(&self, scope: &TargetScope, visit: F) -> Result<()>
    where
        F: FnMut(Route) -> bool,
    {
        let path = format!(
            "/v2/routes?{}&inline-relations-depth=1",
            filter_query(&[("organization_guid", scope.org_guid()?)])
        );
        self.fetcher.fetch(&path, visit).await
    }

    /// Find the route for `host` on `domain`, optionally narrowed by `path`
    /// and `port`.
    ///
    /// A non-empty path is sent with a leading `/`.
    pub async fn find(
        &self,
        host: &str,
        domain: &Domain,
        path: &str,
        port: Option<u16>,
    ) -> Result<Route> {
        let path = normalize_path(path);
        let port_value = port.map(|p| p.to_string());

        let mut filters = vec![("host", host), ("domain_guid", domain.guid.as_str())];
        if !path.is_empty() {
            filters.push(("path", path.as_str()));
        }
        if let Some(port) = &port_value {
            filters.push(("port", port.as_str()));
        }
        let query_path = format!(
            "/v2/routes?inline-relations-depth=1&{}",
            filter_query(&filters)
        );

        find_first(&self.fetcher, &query_path).await?.ok_or_else(|| {
            let wanted = Route {
                host: host.to_string(),
                path: path.clone(),
                port,
                domain: domain.clone(),
                ..Default::default()
            };
            Error::not_found("Route", wanted.url())
        })
    }

    /// Whether a route for `host` already exists on `domain_guid`
    pub async fn route_exists(&self, host: &str, domain_guid: &str) -> Result<bool> {
        let path = format!(
            "/v2/routes?{}",
            filter_query(&[("host", host), ("domain_guid", domain_guid)])
        );
        any_exists(&self.fetcher, &path).await
    }
}

/// Route paths always start with `/`; the empty path stays empty
fn normalize_path(path: &str) -> String {
    if path.is_empty() || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
