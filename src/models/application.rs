//! Application models

use super::route::Route;
use super::FromResource;
use crate::decode::Resource;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Scalar application fields, as embedded in other resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ApplicationFields {
    pub guid: String,
    pub name: String,
    /// `STARTED` or `STOPPED`
    pub state: String,
    pub instances: i64,
    pub memory_mb: i64,
    pub disk_quota_mb: i64,
    pub space_guid: String,
    pub stack_guid: String,
    pub buildpack: Option<String>,
    pub detected_buildpack: Option<String>,
    pub health_check_type: String,
    pub package_updated_at: Option<DateTime<Utc>>,
}

impl ApplicationFields {
    pub fn is_started(&self) -> bool {
        self.state.eq_ignore_ascii_case("started")
    }
}

impl FromResource for ApplicationFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            state: resource.string("state"),
            instances: resource.integer("instances"),
            memory_mb: resource.integer("memory"),
            disk_quota_mb: resource.integer("disk_quota"),
            space_guid: resource.string("space_guid"),
            stack_guid: resource.string("stack_guid"),
            buildpack: resource.optional_string("buildpack"),
            detected_buildpack: resource.optional_string("detected_buildpack"),
            health_check_type: resource.string("health_check_type"),
            package_updated_at: resource.timestamp("package_updated_at"),
        }
    }
}

/// Application with its bound routes
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Application {
    #[serde(flatten)]
    pub fields: ApplicationFields,
    pub routes: Vec<Route>,
}

impl Application {
    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }
}

impl FromResource for Application {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            fields: ApplicationFields::from_resource(resource),
            routes: resource.nested_list("routes"),
        }
    }
}
