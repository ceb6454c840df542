//! # Cloud Controller v2 API client
//!
//! A Rust client for the paginated read endpoints of the Cloud Foundry Cloud
//! Controller v2 API.
//!
//! ## Features
//!
//! - **Cursor Pagination**: Follows `next_url` until the last page or until the
//!   caller stops, one request at a time
//! - **Typed Models**: Organizations, spaces, apps, domains, routes and services
//!   mapped from the `{metadata, entity}` envelope
//! - **Repositories**: List-all, find-by-name and exists queries per resource
//! - **Streams**: The same traversal as a lazy `Stream`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cf_api::http::{Gateway, HttpClient, HttpClientConfig};
//! use cf_api::pagination::PageFetcher;
//! use cf_api::repository::{RepositoryLocator, TargetScope};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> cf_api::Result<()> {
//!     let config = HttpClientConfig::builder()
//!         .access_token("bearer my-token")
//!         .build();
//!     let gateway: Arc<dyn Gateway> = Arc::new(HttpClient::new(config)?);
//!     let repos = RepositoryLocator::new(PageFetcher::new(gateway, "https://api.example.com"));
//!
//!     let org = repos.organizations().find_by_name("my-org").await?;
//!     let scope = TargetScope::new().with_org(org.guid(), org.name());
//!
//!     repos
//!         .spaces()
//!         .list_spaces(&scope, |space| {
//!             println!("{}", space.name());
//!             true
//!         })
//!         .await
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Repositories                         │
//! │  orgs  spaces  apps  domains  routes  services              │
//! └─────────────────────────────────────────────────────────────┘
//!                               │
//! ┌───────────────┬─────────────┴─────────┬─────────────────────┐
//! │    Models     │      Pagination       │       Decode        │
//! ├───────────────┼───────────────────────┼─────────────────────┤
//! │ FromResource  │ next_url cursor       │ Page envelope       │
//! │ zero defaults │ early stop / Stream   │ {metadata, entity}  │
//! └───────────────┴───────────┬───────────┴─────────────────────┘
//!                             │
//!                   ┌─────────┴─────────┐
//!                   │   HTTP Gateway    │
//!                   │ reqwest, warnings │
//!                   └───────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// HTTP gateway over reqwest
pub mod http;

/// Page envelope and resource decoding
pub mod decode;

/// Typed resource models
pub mod models;

/// Cursor-following page traversal
pub mod pagination;

/// Per-resource repositories
pub mod repository;

/// cf config file and overrides
pub mod config;

/// Table, JSON and YAML rendering
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
