//! Space models

use super::application::ApplicationFields;
use super::domain::Domain;
use super::organization::OrganizationFields;
use super::service::ServiceInstanceFields;
use super::FromResource;
use crate::decode::Resource;
use serde::Serialize;

/// Scalar space fields, as embedded in other resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpaceFields {
    pub guid: String,
    pub name: String,
    pub allow_ssh: bool,
}

impl FromResource for SpaceFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            allow_ssh: resource.boolean("allow_ssh"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecurityGroupFields {
    pub guid: String,
    pub name: String,
}

impl FromResource for SecurityGroupFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
        }
    }
}

/// Space with its inlined relations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Space {
    #[serde(flatten)]
    pub fields: SpaceFields,
    pub space_quota_guid: String,
    pub organization: OrganizationFields,
    pub applications: Vec<ApplicationFields>,
    pub domains: Vec<Domain>,
    pub service_instances: Vec<ServiceInstanceFields>,
    pub security_groups: Vec<SecurityGroupFields>,
}

impl Space {
    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

impl FromResource for Space {
    fn from_resource(resource: &Resource) -> Self {
        let mut organization: OrganizationFields = resource.nested("organization");
        if organization.guid.is_empty() {
            organization.guid = resource.string("organization_guid");
        }

        Self {
            fields: SpaceFields::from_resource(resource),
            space_quota_guid: resource.string("space_quota_definition_guid"),
            organization,
            applications: resource.nested_list("apps"),
            domains: resource.nested_list("domains"),
            service_instances: resource.nested_list("service_instances"),
            security_groups: resource.nested_list("security_groups"),
        }
    }
}
