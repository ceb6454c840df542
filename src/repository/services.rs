//! Service offering and instance repository

use super::{any_exists, collect_all, filter_query, find_first, TargetScope};
use crate::error::{Error, Result};
use crate::models::{ServiceInstance, ServiceOffering, ServicePlanDescription};
use crate::pagination::PageFetcher;
use tracing::debug;

/// Cloud Controller code for a query parameter it cannot filter on
const BAD_QUERY_PARAM: u64 = 10005;

#[derive(Debug, Clone)]
pub struct ServiceRepository {
    fetcher: PageFetcher,
}

impl ServiceRepository {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }

    pub async fn get_all_service_offerings(&self) -> Result<Vec<ServiceOffering>> {
        collect_all(&self.fetcher, "/v2/services").await
    }

    pub async fn get_service_offerings_for_space(
        &self,
        space_guid: &str,
    ) -> Result<Vec<ServiceOffering>> {
        collect_all(&self.fetcher, &format!("/v2/spaces/{space_guid}/services")).await
    }

    /// Offerings with `label`; at least one must exist
    pub async fn find_service_offerings_by_label(
        &self,
        label: &str,
    ) -> Result<Vec<ServiceOffering>> {
        let path = format!("/v2/services?{}", filter_query(&[("label", label)]));
        let offerings: Vec<ServiceOffering> = collect_all(&self.fetcher, &path).await?;

        if offerings.is_empty() {
            return Err(Error::not_found("Service offering", label));
        }
        Ok(offerings)
    }

    /// Offerings with `label` visible in `space_guid`.
    ///
    /// Older Cloud Controllers reject the label filter on this endpoint; in
    /// that case the space's offerings are listed and filtered locally.
    pub async fn find_service_offerings_for_space_by_label(
        &self,
        space_guid: &str,
        label: &str,
    ) -> Result<Vec<ServiceOffering>> {
        let path = format!(
            "/v2/spaces/{space_guid}/services?{}",
            filter_query(&[("label", label)])
        );

        let offerings = match collect_all::<ServiceOffering>(&self.fetcher, &path).await {
            Err(Error::Api {
                code: BAD_QUERY_PARAM,
                ..
            }) => {
                debug!("label filter rejected, filtering space offerings locally");
                self.get_service_offerings_for_space(space_guid)
                    .await?
                    .into_iter()
                    .filter(|offering| offering.label == label)
                    .collect()
            }
            other => other?,
        };

        if offerings.is_empty() {
            return Err(Error::not_found("Service offering", label));
        }
        Ok(offerings)
    }

    pub async fn find_service_offering_by_label_and_provider(
        &self,
        label: &str,
        provider: &str,
    ) -> Result<ServiceOffering> {
        let path = format!(
            "/v2/services?{}",
            filter_query(&[("label", label), ("provider", provider)])
        );

        find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Service offering", format!("{label} {provider}")))
    }

    pub async fn list_services_from_broker(
        &self,
        broker_guid: &str,
    ) -> Result<Vec<ServiceOffering>> {
        let path = format!(
            "/v2/services?{}",
            filter_query(&[("service_broker_guid", broker_guid)])
        );
        collect_all(&self.fetcher, &path).await
    }

    /// GUID of the plan named by `description`
    pub async fn find_service_plan_by_description(
        &self,
        description: &ServicePlanDescription,
    ) -> Result<String> {
        let path = format!(
            "/v2/services?inline-relations-depth=1&{}",
            filter_query(&[
                ("label", description.service_label.as_str()),
                ("provider", description.service_provider.as_str()),
            ])
        );

        let offerings: Vec<ServiceOffering> = collect_all(&self.fetcher, &path).await?;
        offerings
            .iter()
            .flat_map(|offering| offering.plans.iter())
            .find(|plan| plan.name == description.service_plan_name)
            .map(|plan| plan.guid.clone())
            .ok_or_else(|| Error::not_found("Plan", description.to_string()))
    }

    /// Find a service instance (managed or user-provided) by name in the
    /// targeted space, with its service offering resolved
    pub async fn find_instance_by_name(
        &self,
        scope: &TargetScope,
        name: &str,
    ) -> Result<ServiceInstance> {
        let path = format!(
            "/v2/spaces/{}/service_instances?return_user_provided_service_instances=true&{}&inline-relations-depth=1",
            scope.space_guid()?,
            filter_query(&[("name", name)])
        );

        let mut instance: ServiceInstance = find_first(&self.fetcher, &path)
            .await?
            .ok_or_else(|| Error::not_found("Service instance", name))?;

        if !instance.service_plan.guid.is_empty() {
            let offering_path = format!(
                "/v2/services/{}",
                instance.service_plan.service_offering_guid
            );
            instance.service_offering = self.fetcher.get_resource(&offering_path).await?;
        }

        Ok(instance)
    }

    /// Whether any service instance still uses `plan_guid`
    pub async fn plan_has_instances(&self, plan_guid: &str) -> Result<bool> {
        let path = format!("/v2/service_plans/{plan_guid}/service_instances?results-per-page=1");
        any_exists(&self.fetcher, &path).await
    }
}
