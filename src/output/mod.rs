//! Output module
//!
//! Renders fetched models for the terminal.
//!
//! # Overview
//!
//! - `table`: aligned columns built from the [`Tabular`] trait
//! - `json`: pretty-printed serde_json
//! - `yaml`: serde_yaml

mod table;

pub use table::{render_table, Tabular};

use crate::error::Result;
use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// Pretty JSON array
    Json,
    /// YAML sequence
    Yaml,
}

/// Render `items` in `format`
pub fn render<T>(items: &[T], format: OutputFormat) -> Result<String>
where
    T: Tabular + Serialize,
{
    match format {
        OutputFormat::Table => Ok(render_table(items)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(items)?),
    }
}
