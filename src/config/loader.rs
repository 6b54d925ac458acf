//! Selector lookup from the command line and config files

use figment::providers::{Format, Toml, Yaml};
use figment::Figment;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable the CLI reads the selector from.
pub const ENV_VAR: &str = "APITEST_ENV";

/// Section name a config file may nest its keys under.
pub const SECTION: &str = "api-env";

const CANDIDATES: [&str; 6] = [
    "api-env.toml",
    ".api-env.toml",
    "api-env.yaml",
    ".api-env.yaml",
    "api-env.yml",
    ".api-env.yml",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Unsupported config extension '.{ext}' for file {}", .path.display())]
    UnsupportedExtension { ext: String, path: PathBuf },

    #[error("Invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<figment::Error>,
    },
}

#[derive(Debug, Default, Deserialize)]
struct Selector {
    env: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    env: Option<String>,
    #[serde(rename = "api-env")]
    section: Option<Selector>,
}

impl FileSettings {
    fn into_env(self) -> Option<String> {
        self.section.and_then(|s| s.env).or(self.env)
    }
}

/// Pick the environment selector.
///
/// `cli_env` (flag or `APITEST_ENV`, already merged by clap) wins over the
/// config file. An explicit `config_path` must load cleanly; a file discovered
/// under `search_root` is skipped with a warning when it does not.
pub fn load_selector(
    cli_env: Option<&str>,
    config_path: Option<&Path>,
    search_root: &Path,
) -> Result<Option<String>, LoadError> {
    let from_file = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(LoadError::NotFound(path.to_path_buf()));
            }
            read_config(path)?
        }
        None => match discover_config(search_root) {
            Some(path) => match read_config(&path) {
                Ok(env) => env,
                Err(e) => {
                    tracing::warn!("Ignoring auto-discovered config: {}", e);
                    None
                }
            },
            None => None,
        },
    };

    if let Some(env) = cli_env {
        tracing::debug!(env, "selector taken from command line");
        return Ok(Some(env.to_string()));
    }
    if from_file.is_some() {
        tracing::debug!(env = ?from_file, "selector taken from config file");
    }
    Ok(from_file)
}

fn read_config(path: &Path) -> Result<Option<String>, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let figment = match ext.as_str() {
        "toml" => Figment::from(Toml::file(path)),
        "yaml" | "yml" => Figment::from(Yaml::file(path)),
        other => {
            return Err(LoadError::UnsupportedExtension {
                ext: other.to_string(),
                path: path.to_path_buf(),
            })
        }
    };

    let settings: FileSettings = figment
        .extract()
        .map_err(|e| LoadError::Parse { path: path.to_path_buf(), source: Box::new(e) })?;
    Ok(settings.into_env())
}

fn discover_config(root: &Path) -> Option<PathBuf> {
    CANDIDATES.iter().map(|c| root.join(c)).find(|p| p.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_no_sources_yields_none() {
        let tmp = TempDir::new().expect("tmp");
        let env = load_selector(None, None, tmp.path()).expect("selector");
        assert!(env.is_none());
    }

    #[test]
    fn test_discovers_toml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("api-env.toml"), "env = 'test'\n").expect("write");

        let env = load_selector(None, None, tmp.path()).expect("selector");
        assert_eq!(env.as_deref(), Some("test"));
    }

    #[test]
    fn test_nested_section_wins_over_top_level() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.toml");
        fs::write(&path, "env = 'dev'\n\n[api-env]\nenv = 'staging'\n").expect("write");

        let env = load_selector(None, Some(&path), tmp.path()).expect("selector");
        assert_eq!(env.as_deref(), Some("staging"));
    }

    #[test]
    fn test_yaml_config() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join(".api-env.yml"), "api-env:\n  env: test\n").expect("write");

        let env = load_selector(None, None, tmp.path()).expect("selector");
        assert_eq!(env.as_deref(), Some("test"));
    }

    #[test]
    fn test_cli_value_beats_config_file() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("api-env.toml"), "env = 'test'\n").expect("write");

        let env = load_selector(Some("prod"), None, tmp.path()).expect("selector");
        assert_eq!(env.as_deref(), Some("prod"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nope.toml");
        let err = load_selector(None, Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, LoadError::NotFound(_)));
    }

    #[test]
    fn test_explicit_unsupported_extension_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("env.json");
        fs::write(&path, "{\"env\": \"test\"}").expect("write");

        let err = load_selector(None, Some(&path), tmp.path()).unwrap_err();
        assert!(err.to_string().contains("Unsupported config extension '.json'"));
    }

    #[test]
    fn test_explicit_invalid_config_is_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("bad.toml");
        fs::write(&path, "env = [1, 2]\n").expect("write");

        let result = load_selector(Some("dev"), Some(&path), tmp.path());
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_auto_discovered_invalid_config_is_ignored() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("api-env.toml"), "env = [1, 2]\n").expect("write");

        let env = load_selector(None, None, tmp.path()).expect("should not error on discovery");
        assert!(env.is_none());
    }
}
