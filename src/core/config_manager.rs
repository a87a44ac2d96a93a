// src/core/config_manager.rs
//! Layered configuration: built-in defaults, config.yaml, environment, command line

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

use crate::cli::Cli;
use crate::environment::{self, ConfigLayer};
use crate::error::SubmitterError;
use crate::query_selector;
use crate::types::Candidate;
use crate::utils::{env_value, parse_flag, trim_trailing_slash};

pub const DEFAULT_BASE_URL: &str = "https://bfhldevapigw.healthrx.co.in";
pub const DEFAULT_VARIANT: &str = "JAVA";

// Candidate identity; edit these for a different submission
pub const CANDIDATE_NAME: &str = "John Doe";
pub const CANDIDATE_REGNO: &str = "REG12347";
pub const CANDIDATE_EMAIL: &str = "john.doe@example.com";

const GENERATE_PATH: &str = "/hiring/generateWebhook";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: String,
    pub variant: String,
    pub candidate: Candidate,
    pub exit_after_run: bool,
    pub fail_on_error: bool,
    pub dry_run: bool,
}

impl AppConfig {
    pub fn generate_url(&self) -> String {
        format!("{}{}/{}", self.base_url, GENERATE_PATH, self.variant)
    }

    /// Build from a merged layer, filling gaps with the built-in defaults
    pub fn from_layer(layer: ConfigLayer) -> Result<Self, SubmitterError> {
        let config = Self {
            base_url: trim_trailing_slash(layer.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)),
            variant: layer.variant.unwrap_or_else(|| DEFAULT_VARIANT.to_string()),
            candidate: Candidate {
                name: layer.name.unwrap_or_else(|| CANDIDATE_NAME.to_string()),
                registration_number: layer
                    .reg_no
                    .unwrap_or_else(|| CANDIDATE_REGNO.to_string()),
                email: layer.email.unwrap_or_else(|| CANDIDATE_EMAIL.to_string()),
            },
            exit_after_run: layer.exit_after_run.unwrap_or(false),
            fail_on_error: layer.fail_on_error.unwrap_or(false),
            dry_run: false,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), SubmitterError> {
        Url::parse(&self.generate_url())
            .map_err(|e| SubmitterError::Config(format!("invalid generation URL: {}", e)))?;

        if self.variant.trim().is_empty() {
            return Err(SubmitterError::Config("variant is empty".to_string()));
        }
        if self.candidate.name.trim().is_empty() {
            return Err(SubmitterError::Config("candidate name is empty".to_string()));
        }
        if self.candidate.email.trim().is_empty() {
            return Err(SubmitterError::Config("candidate email is empty".to_string()));
        }

        // Fails fast on a registration number the query selector could never use
        query_selector::last_two_digits(&self.candidate.registration_number)?;
        Ok(())
    }
}

pub struct ConfigManager;

impl ConfigManager {
    /// Load all configuration layers
    pub fn load(cli: &Cli) -> Result<AppConfig> {
        let environment = environment::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let file_layer = environment::load_file_layer(cli.config.as_deref(), &environment)?;

        let layer = file_layer.merge(Self::env_layer()).merge(cli.layer());
        let mut config = AppConfig::from_layer(layer).context("Configuration rejected")?;
        config.dry_run = cli.dry_run;

        info!(
            generate_url = %config.generate_url(),
            reg_no = %config.candidate.registration_number,
            exit_after_run = config.exit_after_run,
            "Configuration loaded"
        );
        Ok(config)
    }

    fn env_layer() -> ConfigLayer {
        ConfigLayer {
            base_url: env_value("GENERATE_BASE_URL"),
            variant: env_value("GENERATE_VARIANT"),
            name: env_value("CANDIDATE_NAME"),
            reg_no: env_value("CANDIDATE_REGNO"),
            email: env_value("CANDIDATE_EMAIL"),
            exit_after_run: env_value("EXIT_AFTER_RUN").map(|v| parse_flag(&v)),
            fail_on_error: env_value("FAIL_ON_ERROR").map(|v| parse_flag(&v)),
        }
    }
}
