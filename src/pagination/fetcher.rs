//! Cursor-following page traversal

use crate::decode::{decode_page, decode_resource, PageEnvelope, Resource};
use crate::error::Result;
use crate::http::Gateway;
use crate::models::FromResource;
use futures::stream::{self, BoxStream, StreamExt};
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Fetches paginated resources from one API endpoint.
///
/// Holds no per-traversal state; every call owns its own cursor, so a single
/// fetcher can serve any number of independent traversals.
#[derive(Clone)]
pub struct PageFetcher {
    gateway: Arc<dyn Gateway>,
    api_endpoint: String,
}

impl PageFetcher {
    /// Create a fetcher for `api_endpoint` (e.g. `https://api.example.com`)
    pub fn new(gateway: Arc<dyn Gateway>, api_endpoint: impl Into<String>) -> Self {
        let api_endpoint = api_endpoint.into().trim_end_matches('/').to_string();
        Self {
            gateway,
            api_endpoint,
        }
    }

    /// The API endpoint every relative path is resolved against
    pub fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    /// Build the full URL for a path or cursor.
    ///
    /// Cursors are used verbatim: relative ones are appended to the endpoint,
    /// absolute `http(s)://` ones are requested as-is.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        if path.starts_with('/') {
            format!("{}{}", self.api_endpoint, path)
        } else {
            format!("{}/{}", self.api_endpoint, path)
        }
    }

    /// Fetch and decode a single page
    pub async fn fetch_page(&self, path: &str) -> Result<PageEnvelope> {
        let body = self.gateway.get(&self.url_for(path)).await?;
        let page = decode_page(&body)?;

        debug!(
            path,
            resources = page.len(),
            has_next = !page.is_last_page(),
            "fetched page"
        );
        Ok(page)
    }

    /// Fetch a single (non-paginated) resource and map it
    pub async fn get_resource<T: FromResource>(&self, path: &str) -> Result<T> {
        let body = self.gateway.get(&self.url_for(path)).await?;
        let resource = decode_resource(&body)?;
        Ok(T::from_resource(&resource))
    }

    /// Visit every resource reachable from `first_path`, in server order.
    ///
    /// Each page's resources are mapped and handed to `visit` one by one. When
    /// `visit` returns `false` the traversal ends successfully without touching
    /// the rest of the page or requesting another one. Transport and decode
    /// errors abort immediately; items already visited stay visited.
    pub async fn fetch<T, F>(&self, first_path: &str, mut visit: F) -> Result<()>
    where
        T: FromResource,
        F: FnMut(T) -> bool,
    {
        let mut next_path = (!first_path.is_empty()).then(|| first_path.to_string());

        while let Some(path) = next_path.take() {
            let page = self.fetch_page(&path).await?;

            for resource in &page.resources {
                if !visit(T::from_resource(resource)) {
                    trace!(path = path.as_str(), "visitor stopped traversal");
                    return Ok(());
                }
            }

            next_path = page.next_url;
        }

        Ok(())
    }

    /// Lazy form of [`fetch`](Self::fetch).
    ///
    /// A page is requested only when the consumer polls past the buffered one;
    /// dropping the stream ends the traversal. The stream yields at most one
    /// error and then ends.
    pub fn stream<T>(&self, first_path: &str) -> BoxStream<'static, Result<T>>
    where
        T: FromResource + Send + 'static,
    {
        let traversal = Traversal {
            fetcher: self.clone(),
            next_path: (!first_path.is_empty()).then(|| first_path.to_string()),
            buffered: VecDeque::new(),
        };

        stream::unfold(traversal, |mut traversal| async move {
            loop {
                if let Some(resource) = traversal.buffered.pop_front() {
                    return Some((Ok(T::from_resource(&resource)), traversal));
                }

                let Some(path) = traversal.next_path.take() else {
                    return None;
                };

                match traversal.fetcher.fetch_page(&path).await {
                    Ok(page) => {
                        traversal.next_path = page.next_url;
                        traversal.buffered = page.resources.into();
                    }
                    Err(e) => return Some((Err(e), traversal)),
                }
            }
        })
        .boxed()
    }
}

impl fmt::Debug for PageFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageFetcher")
            .field("api_endpoint", &self.api_endpoint)
            .finish_non_exhaustive()
    }
}

/// Cursor and one-page buffer of a stream traversal
struct Traversal {
    fetcher: PageFetcher,
    next_path: Option<String>,
    buffered: VecDeque<Resource>,
}
