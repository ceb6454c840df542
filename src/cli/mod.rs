//! CLI module
//!
//! Command-line interface over the repositories.
//!
//! # Commands
//!
//! - `orgs` / `org` - Organizations
//! - `spaces` / `space` - Spaces in the targeted org
//! - `apps` / `app` - Applications in the targeted space
//! - `domains` - Shared and private domains
//! - `routes` - Routes in the targeted space or org
//! - `marketplace` - Service offerings
//! - `service` - One service instance

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
