// src/environment.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// One set of optional settings. Used for the file sections, the environment and the CLI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigLayer {
    pub base_url: Option<String>,
    pub variant: Option<String>,
    pub name: Option<String>,
    pub reg_no: Option<String>,
    pub email: Option<String>,
    pub exit_after_run: Option<bool>,
    pub fail_on_error: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: ConfigLayer,
    #[serde(default)]
    production: ConfigLayer,
}

impl ConfigLayer {
    /// Values from `other` win where set
    pub fn merge(self, other: ConfigLayer) -> ConfigLayer {
        ConfigLayer {
            base_url: other.base_url.or(self.base_url),
            variant: other.variant.or(self.variant),
            name: other.name.or(self.name),
            reg_no: other.reg_no.or(self.reg_no),
            email: other.email.or(self.email),
            exit_after_run: other.exit_after_run.or(self.exit_after_run),
            fail_on_error: other.fail_on_error.or(self.fail_on_error),
        }
    }
}

pub fn get_environment() -> String {
    std::env::var("SUBMITTER_ENV")
        .or_else(|_| std::env::var("ENVIRONMENT"))
        .unwrap_or_else(|_| "local".to_string())
}

/// Load the file layer. An explicit path must exist, the default one may be absent.
pub fn load_file_layer(explicit: Option<&Path>, environment: &str) -> Result<ConfigLayer> {
    let config_path = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if !path.exists() {
                return Ok(ConfigLayer::default());
            }
            path
        }
    };

    info!(
        "Loading {} configuration from {}",
        environment,
        config_path.display()
    );

    let config_content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    parse_file_layer(&config_content, environment)
        .with_context(|| format!("Failed to parse {}", config_path.display()))
}

pub fn parse_file_layer(content: &str, environment: &str) -> Result<ConfigLayer> {
    if content.trim().is_empty() {
        return Ok(ConfigLayer::default());
    }

    let config_file: ConfigFile = serde_yaml::from_str(content)?;

    Ok(match environment {
        "production" => config_file.production,
        _ => config_file.local,
    })
}
