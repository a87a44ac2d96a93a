// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

use crate::environment::ConfigLayer;

#[derive(Debug, Parser)]
#[command(name = "webhook-sql-submitter")]
#[command(about = "Fetch a webhook and token, then submit the SQL answer for a registration number")]
pub struct Cli {
    /// YAML config file with local/production sections
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base URL of the generation API
    #[arg(long)]
    pub base_url: Option<String>,

    /// Variant segment of the generation path
    #[arg(long)]
    pub variant: Option<String>,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub reg_no: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    /// Exit the process with status 0 once the run finishes
    #[arg(long)]
    pub exit_after_run: bool,

    /// Exit with status 1 when the run fails
    #[arg(long)]
    pub fail_on_error: bool,

    /// Print what would be submitted without any network call
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    pub fn layer(&self) -> ConfigLayer {
        ConfigLayer {
            base_url: self.base_url.clone(),
            variant: self.variant.clone(),
            name: self.name.clone(),
            reg_no: self.reg_no.clone(),
            email: self.email.clone(),
            // Flags only switch behaviour on; absent means "defer to lower layers"
            exit_after_run: self.exit_after_run.then_some(true),
            fail_on_error: self.fail_on_error.then_some(true),
        }
    }
}
