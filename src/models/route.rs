//! Route model

use super::application::ApplicationFields;
use super::domain::Domain;
use super::space::SpaceFields;
use super::FromResource;
use crate::decode::Resource;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Route {
    pub guid: String,
    pub host: String,
    pub path: String,
    pub port: Option<u16>,
    pub domain: Domain,
    pub space: SpaceFields,
    pub apps: Vec<ApplicationFields>,
}

impl Route {
    /// Human form of the route: `host.domain[:port][/path]`
    pub fn url(&self) -> String {
        let mut url = if self.host.is_empty() {
            self.domain.name.clone()
        } else {
            format!("{}.{}", self.host, self.domain.name)
        };

        if let Some(port) = self.port {
            url.push_str(&format!(":{port}"));
        }
        url.push_str(&self.path);
        url
    }
}

impl FromResource for Route {
    fn from_resource(resource: &Resource) -> Self {
        Self {
            guid: resource.guid().to_string(),
            host: resource.string("host"),
            path: resource.string("path"),
            port: resource.optional_u16("port"),
            domain: resource.nested("domain"),
            space: resource.nested("space"),
            apps: resource.nested_list("apps"),
        }
    }
}
