//! Explicit org/space scope for repository calls

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A targeted organization or space
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRef {
    pub guid: String,
    pub name: String,
}

impl TargetRef {
    pub fn new(guid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            guid: guid.into(),
            name: name.into(),
        }
    }
}

/// The org and space a scoped query runs against.
///
/// Passed into every repository method that needs it instead of being read
/// from shared mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetScope {
    pub organization: Option<TargetRef>,
    pub space: Option<TargetRef>,
}

impl TargetScope {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_org(mut self, guid: impl Into<String>, name: impl Into<String>) -> Self {
        self.organization = Some(TargetRef::new(guid, name));
        self
    }

    #[must_use]
    pub fn with_space(mut self, guid: impl Into<String>, name: impl Into<String>) -> Self {
        self.space = Some(TargetRef::new(guid, name));
        self
    }

    /// GUID of the targeted org, or `NoTarget` when none is set
    pub fn org_guid(&self) -> Result<&str> {
        targeted_guid(self.organization.as_ref()).ok_or_else(|| Error::no_target("org"))
    }

    /// GUID of the targeted space, or `NoTarget` when none is set
    pub fn space_guid(&self) -> Result<&str> {
        targeted_guid(self.space.as_ref()).ok_or_else(|| Error::no_target("space"))
    }
}

fn targeted_guid(target: Option<&TargetRef>) -> Option<&str> {
    target
        .map(|t| t.guid.as_str())
        .filter(|guid| !guid.is_empty())
}
