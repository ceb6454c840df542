//! Client configuration
//!
//! Reads the `config.json` the `cf` command line writes after login and
//! target, then layers environment variables and command-line overrides on
//! top.

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::repository::{TargetRef, TargetScope};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Environment variable pointing at the directory that holds `.cf/`
pub const CF_HOME: &str = "CF_HOME";

/// Connect timeout in seconds
pub const CF_DIAL_TIMEOUT: &str = "CF_DIAL_TIMEOUT";

/// `true` turns on debug logging
pub const CF_TRACE: &str = "CF_TRACE";

const DEFAULT_DIAL_TIMEOUT_SECS: u64 = 5;

// ============================================================================
// File Layout
// ============================================================================

/// Org or space as stored in `config.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFields {
    #[serde(rename = "GUID", default)]
    pub guid: String,

    #[serde(rename = "Name", default)]
    pub name: String,
}

impl TargetFields {
    fn to_target(&self) -> Option<TargetRef> {
        if self.guid.is_empty() {
            None
        } else {
            Some(TargetRef::new(self.guid.clone(), self.name.clone()))
        }
    }
}

/// Resolved client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// API endpoint, e.g. `https://api.example.com`
    #[serde(rename = "Target", default)]
    pub api_endpoint: String,

    /// Authorization header value, usually `bearer <token>`
    #[serde(rename = "AccessToken", default)]
    pub access_token: String,

    #[serde(rename = "SSLDisabled", default)]
    pub ssl_disabled: bool,

    #[serde(rename = "OrganizationFields", default)]
    pub organization: TargetFields,

    #[serde(rename = "SpaceFields", default)]
    pub space: TargetFields,

    /// Connect timeout, from `CF_DIAL_TIMEOUT`
    #[serde(skip, default = "default_dial_timeout")]
    pub dial_timeout: Duration,

    /// Debug logging requested through `CF_TRACE`
    #[serde(skip)]
    pub trace: bool,
}

fn default_dial_timeout() -> Duration {
    Duration::from_secs(DEFAULT_DIAL_TIMEOUT_SECS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_endpoint: String::new(),
            access_token: String::new(),
            ssl_disabled: false,
            organization: TargetFields::default(),
            space: TargetFields::default(),
            dial_timeout: default_dial_timeout(),
            trace: false,
        }
    }
}

/// Command-line values that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub api_endpoint: Option<String>,
    pub access_token: Option<String>,
    pub org_guid: Option<String>,
    pub space_guid: Option<String>,
    pub skip_ssl_validation: bool,
}

// ============================================================================
// Loading
// ============================================================================

impl Config {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// Environment variables and `overrides` are applied afterwards.
    pub fn load(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => default_config_path(),
        };

        let mut config = match path {
            Some(p) => Self::from_file(&p)?,
            None => Self::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    /// Read a `config.json`; a missing file yields the defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&content)
    }

    /// Parse the `config.json` layout
    pub fn from_json(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(content)
            .map_err(|e| Error::config(format!("Invalid config file: {e}")))
    }

    /// Apply `CF_DIAL_TIMEOUT` and `CF_TRACE` through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(CF_DIAL_TIMEOUT).filter(|v| !v.trim().is_empty()) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                Error::invalid_config(CF_DIAL_TIMEOUT, format!("expected seconds, got '{raw}'"))
            })?;
            self.dial_timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup(CF_TRACE) {
            self.trace = raw.trim().eq_ignore_ascii_case("true");
        }
        Ok(())
    }

    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(api) = &overrides.api_endpoint {
            self.api_endpoint = api.clone();
        }
        if let Some(token) = &overrides.access_token {
            self.access_token = token.clone();
        }
        if let Some(guid) = &overrides.org_guid {
            self.organization = TargetFields {
                guid: guid.clone(),
                name: String::new(),
            };
        }
        if let Some(guid) = &overrides.space_guid {
            self.space = TargetFields {
                guid: guid.clone(),
                name: String::new(),
            };
        }
        if overrides.skip_ssl_validation {
            self.ssl_disabled = true;
        }
    }

    /// Fail early when no API endpoint is known
    pub fn require_api_endpoint(&self) -> Result<&str> {
        let api = self.api_endpoint.trim();
        if api.is_empty() {
            return Err(Error::config(
                "No API endpoint set. Use --api or log in with the cf command line first",
            ));
        }
        Ok(api)
    }

    /// The org and space repository calls run against
    pub fn scope(&self) -> TargetScope {
        TargetScope {
            organization: self.organization.to_target(),
            space: self.space.to_target(),
        }
    }

    /// HTTP client settings derived from this configuration
    pub fn http_config(&self) -> HttpClientConfig {
        HttpClientConfig::builder()
            .connect_timeout(self.dial_timeout)
            .access_token(self.access_token.clone())
            .skip_ssl_validation(self.ssl_disabled)
            .build()
    }
}

/// `$CF_HOME/.cf/config.json`, else `~/.cf/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var_os(CF_HOME)
        .map(PathBuf::from)
        .or_else(dirs::home_dir)?;
    Some(config_path_in(&home))
}

/// Location of `config.json` under a home directory
pub fn config_path_in(home: &Path) -> PathBuf {
    home.join(".cf").join("config.json")
}
