//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::http::{Gateway, HttpClient};
use crate::models::Route;
use crate::output::{render, Tabular};
use crate::pagination::PageFetcher;
use crate::repository::{RepositoryLocator, TargetScope};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// CLI runner
pub struct Runner {
    cli: Cli,
    config: Config,
}

impl Runner {
    /// Create a runner for an already-resolved configuration
    pub fn new(cli: Cli, config: Config) -> Self {
        Self { cli, config }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Arc::new(HttpClient::new(self.config.http_config())?);
        let repos = self.repositories(client.clone())?;

        let result = self.dispatch(&repos).await;
        report_warnings(&mut std::io::stderr(), &client.warnings())?;
        result
    }

    async fn dispatch(&self, repos: &RepositoryLocator) -> Result<()> {
        let scope = self.config.scope();

        match &self.cli.command {
            Commands::Orgs { limit } => {
                let orgs = repos.organizations().list_orgs(*limit).await?;
                self.print(&orgs)
            }
            Commands::Org { name } => {
                let org = repos.organizations().find_by_name(name).await?;
                self.print(&[org])
            }
            Commands::Spaces => {
                let mut spaces = Vec::new();
                repos
                    .spaces()
                    .list_spaces(&scope, |space| {
                        spaces.push(space);
                        true
                    })
                    .await?;
                self.print(&spaces)
            }
            Commands::Space { name } => {
                let space = repos.spaces().find_by_name(&scope, name).await?;
                self.print(&[space])
            }
            Commands::Apps => {
                let apps = repos.applications().list_apps(&scope).await?;
                self.print(&apps)
            }
            Commands::App { name } => {
                let app = repos.applications().find_by_name(&scope, name).await?;
                self.print(&[app])
            }
            Commands::Domains => {
                let mut domains = Vec::new();
                repos
                    .domains()
                    .list_domains_for_org(scope.org_guid()?, |domain| {
                        domains.push(domain);
                        true
                    })
                    .await?;
                self.print(&domains)
            }
            Commands::Routes { orglevel } => self.routes(repos, &scope, *orglevel).await,
            Commands::Marketplace { service } => {
                self.marketplace(repos, &scope, service.as_deref()).await
            }
            Commands::Service { name } => {
                let instance = repos.services().find_instance_by_name(&scope, name).await?;
                self.print(&[instance])
            }
        }
    }

    /// Wire config → HTTP client → fetcher → repositories
    fn repositories(&self, client: Arc<HttpClient>) -> Result<RepositoryLocator> {
        let api = self.config.require_api_endpoint()?;
        let gateway: Arc<dyn Gateway> = client;

        debug!(api, "using API endpoint");
        Ok(RepositoryLocator::new(PageFetcher::new(gateway, api)))
    }

    async fn routes(
        &self,
        repos: &RepositoryLocator,
        scope: &TargetScope,
        orglevel: bool,
    ) -> Result<()> {
        let mut routes = Vec::new();
        let collect = |route: Route| {
            routes.push(route);
            true
        };

        if orglevel {
            repos.routes().list_all_routes(scope, collect).await?;
        } else {
            repos.routes().list_routes(scope, collect).await?;
        }
        self.print(&routes)
    }

    /// Offerings in the targeted space when there is one, otherwise every
    /// offering visible to the user
    async fn marketplace(
        &self,
        repos: &RepositoryLocator,
        scope: &TargetScope,
        label: Option<&str>,
    ) -> Result<()> {
        let services = repos.services();
        let space_guid = scope.space_guid().ok();

        let offerings = match (label, space_guid) {
            (Some(label), Some(space)) => {
                services
                    .find_service_offerings_for_space_by_label(space, label)
                    .await?
            }
            (Some(label), None) => services.find_service_offerings_by_label(label).await?,
            (None, Some(space)) => services.get_service_offerings_for_space(space).await?,
            (None, None) => services.get_all_service_offerings().await?,
        };

        info!(count = offerings.len(), "service offerings");
        self.print(&offerings)
    }

    fn print<T: Tabular + Serialize>(&self, items: &[T]) -> Result<()> {
        let rendered = render(items, self.cli.format)?;
        print!("{rendered}");
        if !rendered.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}

/// Print the server's warnings, one `Warning:` line each
fn report_warnings<W: Write>(out: &mut W, warnings: &[String]) -> Result<()> {
    for warning in warnings {
        writeln!(out, "Warning: {warning}")?;
    }
    Ok(())
}
