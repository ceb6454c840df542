//! CLI commands and argument parsing

use crate::config::ConfigOverrides;
use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Read-only Cloud Controller v2 client
#[derive(Parser, Debug)]
#[command(name = "cf-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// cf config file (default: $CF_HOME/.cf/config.json or ~/.cf/config.json)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API endpoint, overrides the config file
    #[arg(long, global = true)]
    pub api: Option<String>,

    /// Authorization header value, e.g. "bearer <token>"
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Organization GUID to target
    #[arg(long, global = true)]
    pub org_guid: Option<String>,

    /// Space GUID to target
    #[arg(long, global = true)]
    pub space_guid: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(long, global = true)]
    pub skip_ssl_validation: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Command-line values that override the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_endpoint: self.api.clone(),
            access_token: self.token.clone(),
            org_guid: self.org_guid.clone(),
            space_guid: self.space_guid.clone(),
            skip_ssl_validation: self.skip_ssl_validation,
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List organizations
    Orgs {
        /// Stop after this many organizations (0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,
    },

    /// Show one organization
    Org { name: String },

    /// List spaces in the targeted org
    Spaces,

    /// Show one space in the targeted org
    Space { name: String },

    /// List apps in the targeted space
    Apps,

    /// Show one app in the targeted space
    App { name: String },

    /// List shared and private domains of the targeted org
    Domains,

    /// List routes in the targeted space
    Routes {
        /// List every route in the targeted org instead
        #[arg(long)]
        orglevel: bool,
    },

    /// List service offerings
    Marketplace {
        /// Only offerings with this label
        #[arg(short, long)]
        service: Option<String>,
    },

    /// Show one service instance in the targeted space
    Service { name: String },
}
