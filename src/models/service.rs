//! Service offering, plan and instance models

use super::FromResource;
use crate::decode::Resource;
use serde::Serialize;
use std::fmt;

const USER_PROVIDED_TYPE: &str = "user_provided_service_instance";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServicePlanFields {
    pub guid: String,
    pub name: String,
    pub description: String,
    pub free: bool,
    pub public: bool,
    pub active: bool,
    pub service_offering_guid: String,
}

impl FromResource for ServicePlanFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            description: resource.string("description"),
            free: resource.boolean("free"),
            public: resource.boolean("public"),
            active: resource.boolean("active"),
            service_offering_guid: resource.string("service_guid"),
        }
    }
}

/// Marketplace service offering with its plans
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub guid: String,
    pub label: String,
    pub provider: String,
    pub description: String,
    pub version: String,
    pub documentation_url: String,
    pub broker_guid: String,
    pub active: bool,
    pub plans: Vec<ServicePlanFields>,
}

impl FromResource for ServiceOffering {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            label: resource.string("label"),
            provider: resource.string("provider"),
            description: resource.string("description"),
            version: resource.string("version"),
            documentation_url: resource.string("documentation_url"),
            broker_guid: resource.string("service_broker_guid"),
            active: resource.boolean("active"),
            plans: resource.nested_list("service_plans"),
        }
    }
}

/// Identifies a plan by offering label, provider and plan name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicePlanDescription {
    pub service_label: String,
    pub service_provider: String,
    pub service_plan_name: String,
}

impl fmt::Display for ServicePlanDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.service_label, self.service_provider, self.service_plan_name
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceBindingFields {
    pub guid: String,
    pub app_guid: String,
}

impl FromResource for ServiceBindingFields {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            app_guid: resource.string("app_guid"),
        }
    }
}

/// Last asynchronous operation reported for a service instance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LastOperation {
    #[serde(rename = "type")]
    pub operation_type: String,
    pub state: String,
    pub description: String,
}

/// Scalar service instance fields, as embedded in other resources
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceInstanceFields {
    pub guid: String,
    pub name: String,
    pub instance_type: String,
    pub dashboard_url: String,
    pub tags: Vec<String>,
    pub last_operation: LastOperation,
}

impl FromResource for ServiceInstanceFields {
    fn from_resource(resource: &Resource) -> Self {
        let last_operation = resource
            .field("last_operation")
            .map(|op| LastOperation {
                operation_type: json_str(op, "type"),
                state: json_str(op, "state"),
                description: json_str(op, "description"),
            })
            .unwrap_or_default();

        Self {
            guid: resource.guid().to_string(),
            name: resource.string("name"),
            instance_type: resource.string("type"),
            dashboard_url: resource.string("dashboard_url"),
            tags: resource.strings("tags"),
            last_operation,
        }
    }
}

/// Service instance with its plan, offering and bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ServiceInstance {
    #[serde(flatten)]
    pub fields: ServiceInstanceFields,
    pub service_plan: ServicePlanFields,
    pub service_offering: ServiceOffering,
    pub service_bindings: Vec<ServiceBindingFields>,
}

impl ServiceInstance {
    pub fn guid(&self) -> &str {
        &self.fields.guid
    }

    pub fn name(&self) -> &str {
        &self.fields.name
    }

    /// User-provided instances carry no plan
    pub fn is_user_provided(&self) -> bool {
        self.fields.instance_type == USER_PROVIDED_TYPE || self.service_plan.guid.is_empty()
    }
}

impl FromResource for ServiceInstance {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            fields: ServiceInstanceFields::from_resource(resource),
            service_plan: resource.nested("service_plan"),
            service_offering: ServiceOffering::default(),
            service_bindings: resource.nested_list("service_bindings"),
        }
    }
}

fn json_str(value: &serde_json::Value, key: &str) -> String {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string()
}
