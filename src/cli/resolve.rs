//! Resolve command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use api_env_config::config::loader::ENV_VAR;
use api_env_config::config::{load_selector, resolve};
use api_env_config::render::{render, OutputFormat};

#[derive(Args)]
pub struct ResolveArgs {
    /// Environment name (dev, test, or any other name)
    #[arg(short, long, value_name = "NAME", env = ENV_VAR)]
    pub env: Option<String>,

    /// Config file providing `env` (TOML or YAML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory searched for api-env.toml / api-env.yaml when --config is not given
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", default_value = "json")]
    pub format: OutputFormat,
}

pub fn run(args: ResolveArgs) -> Result<()> {
    let selector = load_selector(args.env.as_deref(), args.config.as_deref(), &args.root)
        .context("Failed to load environment selector")?;

    let config = resolve(selector.as_deref());
    let out = render(&config, args.format)
        .with_context(|| format!("Failed to render configuration for '{}'", config.env))?;
    print!("{}", out);
    Ok(())
}
