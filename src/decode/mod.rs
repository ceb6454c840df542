//! Response decoder module
//!
//! Turns one Cloud Controller list response into a [`PageEnvelope`]: the
//! `next_url` cursor plus the ordered `resources` array. Single-resource
//! responses decode into a bare [`Resource`].

mod envelope;
mod types;

pub use envelope::{decode_page, decode_resource};
pub use types::{Metadata, PageEnvelope, Resource};
