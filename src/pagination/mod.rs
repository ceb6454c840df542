//! Pagination module
//!
//! Walks Cloud Controller list endpoints by following the opaque `next_url`
//! cursor of each page.
//!
//! # Overview
//!
//! [`PageFetcher::fetch`] visits every resource in server order and stops as
//! soon as the caller's predicate returns `false`. [`PageFetcher::stream`] is
//! the same traversal as a lazy stream, where not polling is the early stop.
//! Pages are requested strictly one at a time; nothing is prefetched or cached.

mod fetcher;

pub use fetcher::PageFetcher;
