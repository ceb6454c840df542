//! Organization and quota models

use super::domain::Domain;
use super::space::SpaceFields;
use super::FromResource;
use crate::decode::Resource;
use serde::Serialize;

/// Organization quota definition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuotaFields {
    pub guid: String,
    pub name: String,
    /// Total memory limit in MB
    pub memory_limit: i64,
    /// Per-instance memory limit in MB, `-1` when unlimited
    pub instance_memory_limit: i64,
    pub routes_limit: i64,
    pub services_limit: i64,
    pub non_basic_services_allowed: bool,
}

impl FromResource for QuotaFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            memory_limit: resource.integer("memory_limit"),
            instance_memory_limit: resource.integer("instance_memory_limit"),
            routes_limit: resource.integer("total_routes"),
            services_limit: resource.integer("total_services"),
            non_basic_services_allowed: resource.boolean("non_basic_services_allowed"),
        }
    }
}

/// Space quota definition owned by an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpaceQuotaFields {
    pub guid: String,
    pub name: String,
    pub memory_limit: i64,
    pub organization_guid: String,
}

impl FromResource for SpaceQuotaFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            memory_limit: resource.integer("memory_limit"),
            organization_guid: resource.string("organization_guid"),
        }
    }
}

/// Scalar organization fields, as embedded in other resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationFields {
    pub guid: String,
    pub name: String,
    pub status: String,
    pub quota_definition: QuotaFields,
}

impl FromResource for OrganizationFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            status: resource.string("status"),
            quota_definition: resource.nested("quota_definition"),
        }
    }
}

/// Organization with its inlined relations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Organization {
    #[serde(flatten)]
    pub fields: OrganizationFields,
    pub spaces: Vec<SpaceFields>,
    pub domains: Vec<Domain>,
    pub space_quotas: Vec<SpaceQuotaFields>,
}

impl Organization {
    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

impl FromResource for Organization {
    fn from_resource(resource: &Resource) -> Self {
        let mut domains: Vec<Domain> = resource.nested_list("domains");
        domains.extend(resource.nested_list::<Domain>("private_domains"));

        Self {
            fields: OrganizationFields::from_resource(resource),
            spaces: resource.nested_list("spaces"),
            domains,
            space_quotas: resource.nested_list("space_quota_definitions"),
        }
    }
}
