//! Envelope and raw resource types
//!
//! These mirror the Cloud Controller v2 wire shapes. They are ephemeral: a
//! page lives for one HTTP response and its resources are dropped once mapped.

use crate::models::FromResource;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One page of a paginated list response
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PageEnvelope {
    /// Total number of results across all pages, when the server reports it
    #[serde(default)]
    pub total_results: Option<u64>,
    /// Total number of pages, when the server reports it
    #[serde(default)]
    pub total_pages: Option<u32>,
    /// Opaque cursor for the next page; `None` on the terminal page
    #[serde(default, deserialize_with = "non_empty_string")]
    pub next_url: Option<String>,
    /// Resources on this page, in server order
    pub resources: Vec<Resource>,
}

impl PageEnvelope {
    /// Check if there is no page after this one
    pub fn is_last_page(&self) -> bool {
        self.next_url.is_none()
    }

    /// Number of resources on this page
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Check if the page carries no resources
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

/// Resource metadata block
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Metadata {
    #[serde(default, deserialize_with = "null_as_default")]
    pub guid: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// An untyped `{metadata, entity}` record
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Resource {
    #[serde(default, deserialize_with = "null_as_default")]
    pub metadata: Metadata,
    #[serde(default, deserialize_with = "object_or_empty")]
    pub entity: Map<String, Value>,
}

impl Resource {
    /// Resource GUID from the metadata block
    pub fn guid(&self) -> &str {
        &self.metadata.guid
    }

    /// Entity field, treating `null` as absent
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.entity.get(key).filter(|v| !v.is_null())
    }

    /// String entity field, empty when absent
    pub fn string(&self, key: &str) -> String {
        self.optional_string(key).unwrap_or_default()
    }

    pub fn optional_string(&self, key: &str) -> Option<String> {
        self.field(key).and_then(Value::as_str).map(String::from)
    }

    /// Boolean entity field, `false` when absent
    pub fn boolean(&self, key: &str) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Integer entity field, `0` when absent
    pub fn integer(&self, key: &str) -> i64 {
        self.field(key)
            .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
            .unwrap_or(0)
    }

    pub fn optional_u16(&self, key: &str) -> Option<u16> {
        self.field(key)
            .and_then(Value::as_u64)
            .and_then(|n| u16::try_from(n).ok())
    }

    /// RFC 3339 timestamp entity field
    pub fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.field(key).and_then(Value::as_str).and_then(parse_timestamp)
    }

    /// Array-of-strings entity field; non-string entries are skipped
    pub fn strings(&self, key: &str) -> Vec<String> {
        self.field(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Embedded resource under `key`, if it has a resource shape
    pub fn nested_resource(&self, key: &str) -> Option<Resource> {
        self.field(key)
            .filter(|v| v.is_object())
            .and_then(|v| Resource::deserialize(v).ok())
    }

    /// Map an embedded resource, producing the zero value when it is absent
    pub fn nested<T: FromResource + Default>(&self, key: &str) -> T {
        self.nested_resource(key)
            .map(|r| T::from_resource(&r))
            .unwrap_or_default()
    }

    /// Map an embedded array of resources, in order
    pub fn nested_list<T: FromResource>(&self, key: &str) -> Vec<T> {
        let Some(items) = self.field(key).and_then(Value::as_array) else {
            return Vec::new();
        };

        items
            .iter()
            .filter(|v| v.is_object())
            .filter_map(|v| Resource::deserialize(v).ok())
            .map(|r| T::from_resource(&r))
            .collect()
    }
}

/// Parse an RFC 3339 timestamp into UTC
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

fn non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn object_or_empty<'de, D>(deserializer: D) -> Result<Map<String, Value>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(Value::as_str).and_then(parse_timestamp))
}
