// src/lib.rs
pub mod cli;
pub mod core;
pub mod environment;
pub mod error;
pub mod query_selector;
pub mod runner;
pub mod types;
pub mod utils;

pub use crate::core::{AppConfig, ConfigManager, HiringClient};
pub use error::{Result, SubmitterError};
pub use query_selector::{select_query, QueryKind, QUERY1, QUERY2};
pub use runner::{FlowState, RunReport, Runner};
pub use types::{Candidate, GenerationResult, SubmissionPayload, SubmissionResult};

#[doc(hidden)]
pub use tracing as __tracing;

/// Log through `tracing` at the given level: `app_log!(info, "Selected {}", label)`
#[macro_export]
macro_rules! app_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::__tracing::$level!($($arg)+)
    };
}

/// Convenience function for a single run with an already loaded configuration
pub async fn run_once(config: AppConfig) -> RunReport {
    let mut runner = Runner::new(config);
    runner.run().await
}
