//! Typed repository module
//!
//! Per-resource entry points over the paginated fetcher. Each method supplies
//! a path template and a resource type and adapts the traversal into one of
//! three shapes:
//!
//! - **list-all**: visit everything, collect in order
//! - **find-by-name**: server-side `q=name:` filter, stop after the first hit,
//!   `ModelNotFound` when nothing was visited
//! - **exists**: stop at the first hit, keep nothing

mod applications;
mod domains;
mod organizations;
mod routes;
mod scope;
mod services;
mod spaces;

pub use applications::ApplicationRepository;
pub use domains::DomainRepository;
pub use organizations::OrganizationRepository;
pub use routes::RouteRepository;
pub use scope::{TargetRef, TargetScope};
pub use services::ServiceRepository;
pub use spaces::SpaceRepository;

use crate::decode::Resource;
use crate::error::Result;
use crate::models::FromResource;
use crate::pagination::PageFetcher;

/// Hands out repositories that share one fetcher
#[derive(Debug, Clone)]
pub struct RepositoryLocator {
    fetcher: PageFetcher,
}

impl RepositoryLocator {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    pub fn fetcher(&self) -> &PageFetcher {
        &self.fetcher
    }

    pub fn organizations(&self) -> OrganizationRepository {
        OrganizationRepository::new(self.fetcher.clone())
    }

    pub fn spaces(&self) -> SpaceRepository {
        SpaceRepository::new(self.fetcher.clone())
    }

    pub fn applications(&self) -> ApplicationRepository {
        ApplicationRepository::new(self.fetcher.clone())
    }

    pub fn domains(&self) -> DomainRepository {
        DomainRepository::new(self.fetcher.clone())
    }

    pub fn routes(&self) -> RouteRepository {
        RouteRepository::new(self.fetcher.clone())
    }

    pub fn services(&self) -> ServiceRepository {
        ServiceRepository::new(self.fetcher.clone())
    }
}

// ============================================================================
// Traversal Shapes
// ============================================================================

/// List-all: every resource reachable from `path`, in server order
pub async fn collect_all<T: FromResource>(fetcher: &PageFetcher, path: &str) -> Result<Vec<T>> {
    let mut items = Vec::new();
    fetcher
        .fetch(path, |item: T| {
            items.push(item);
            true
        })
        .await?;
    Ok(items)
}

/// Find-first: the first resource reachable from `path`, if any
pub async fn find_first<T: FromResource>(fetcher: &PageFetcher, path: &str) -> Result<Option<T>> {
    let mut found = None;
    fetcher
        .fetch(path, |item: T| {
            found = Some(item);
            false
        })
        .await?;
    Ok(found)
}

/// Exists: whether `path` yields at least one resource
pub async fn any_exists(fetcher: &PageFetcher, path: &str) -> Result<bool> {
    let mut found = false;
    fetcher
        .fetch(path, |_: Resource| {
            found = true;
            false
        })
        .await?;
    Ok(found)
}

// ============================================================================
// Query Helpers
// ============================================================================

/// Escape a value for use in a query string (`:` → `%3A`, space → `+`)
pub fn query_escape(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// `q=` filter made of `field:value` pairs joined by `;`
pub(crate) fn filter_query(filters: &[(&str, &str)]) -> String {
    let joined = filters
        .iter()
        .map(|(field, value)| format!("{field}:{value}"))
        .collect::<Vec<_>>()
        .join(";");
    format!("q={}", query_escape(&joined))
}

#[cfg(test)]
mod tests;
