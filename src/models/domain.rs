//! Domain model

use super::FromResource;
use crate::decode::Resource;
use serde::Serialize;

/// Shared or private (organization-owned) domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub guid: String,
    pub name: String,
    /// Empty for shared domains
    pub owning_organization_guid: String,
    pub router_group_guid: String,
    pub router_group_type: String,
    pub shared: bool,
}

impl FromResource for Domain {
    fn from_resource(resource: &Resource) -> Self {
        let owning_organization_guid = resource.string("owning_organization_guid");

        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            shared: owning_organization_guid.is_empty(),
            owning_organization_guid,
            router_group_guid: resource.string("router_group_guid"),
            router_group_type: resource.string("router_group_type"),
        }
    }
}
