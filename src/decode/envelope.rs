//! Page and resource decoding

use super::types::{PageEnvelope, Resource};
use crate::error::{Error, Result};

/// Decode one list response body into a page envelope.
///
/// The `resources` array is mandatory; a body without it (including an empty
/// body) is a decode error rather than an empty page.
pub fn decode_page(body: &str) -> Result<PageEnvelope> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("Error parsing JSON: {e}")))
}

/// Decode a single-resource response body
pub fn decode_resource(body: &str) -> Result<Resource> {
    serde_json::from_str(body).map_err(|e| Error::decode(format!("Error parsing JSON: {e}")))
}
