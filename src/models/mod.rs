//! Typed domain models and the resource mapper
//!
//! Every model implements [`FromResource`], a pure mapping from one decoded
//! `{metadata, entity}` record to the typed value. Nested related resources
//! are mapped recursively through the same trait, and absent fields map to
//! zero values instead of failing.

mod application;
mod domain;
mod organization;
mod route;
mod service;
mod space;

pub use application::{Application, ApplicationFields};
pub use domain::Domain;
pub use organization::{Organization, OrganizationFields, QuotaFields, SpaceQuotaFields};
pub use route::Route;
pub use service::{
    LastOperation, ServiceBindingFields, ServiceInstance, ServiceInstanceFields, ServiceOffering,
    ServicePlanDescription, ServicePlanFields,
};
pub use space::{SecurityGroupFields, Space, SpaceFields};

use crate::decode::Resource;

/// Capability to build a typed model from a raw resource
pub trait FromResource: Sized {
    /// Map one raw resource. Must not perform I/O.
    fn from_resource(resource: &Resource) -> Self;
}

/// Raw resources map to themselves, for traversals that only need presence
impl FromResource for Resource {
    fn from_resource(resource: &Resource) -> Self {
        resource.clone()
    }
}
