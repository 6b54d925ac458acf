//! Serialize a resolved configuration for the test engine

use clap::ValueEnum;
use thiserror::Error;

use crate::domain::Configuration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Toml,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML serialization failed: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Render `config` with camelCase keys. `timeout` is omitted when unset.
pub fn render(config: &Configuration, format: OutputFormat) -> Result<String, RenderError> {
    let mut out = match format {
        OutputFormat::Json => serde_json::to_string_pretty(config)?,
        OutputFormat::Yaml => serde_yaml::to_string(config)?,
        OutputFormat::Toml => toml::to_string(config)?,
    };
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}
