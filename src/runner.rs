// src/runner.rs
//! One-shot flow: generate webhook, pick query, submit, report.

use chrono::{DateTime, Utc};
use std::error::Error;
use tracing::Instrument;
use uuid::Uuid;

use crate::app_log;
use crate::core::{AppConfig, HiringClient};
use crate::error::{Result, SubmitterError};
use crate::query_selector;
use crate::types::{SubmissionPayload, SubmissionResult};
use crate::utils::{mask_token, TOKEN_PLACEHOLDER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    Start,
    Generating,
    Submitted,
    Done,
    Failed,
}

#[derive(Debug)]
pub struct RunReport {
    pub run_id: Uuid,
    pub state: FlowState,
    pub submission: Option<SubmissionResult>,
    pub error: Option<SubmitterError>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.state == FlowState::Done
    }

    /// Process exit status: 0 even after a failed run, unless `fail_on_error` is set
    pub fn exit_status(&self, fail_on_error: bool) -> u8 {
        if fail_on_error && !self.succeeded() {
            1
        } else {
            0
        }
    }
}

pub struct Runner {
    config: AppConfig,
    state: FlowState,
    submission: Option<SubmissionResult>,
}

impl Runner {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            state: FlowState::Start,
            submission: None,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Run the flow once. Failures are logged and reported, never returned as Err.
    pub async fn run(&mut self) -> RunReport {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();
        let span = tracing::info_span!("submission_run", %run_id);

        let outcome = self.execute().instrument(span).await;

        let error = match outcome {
            Ok(()) => {
                self.transition(FlowState::Done);
                println!("\n=== Flow completed successfully ===");
                None
            }
            Err(e) => {
                self.transition(FlowState::Failed);
                report_error(&e);
                Some(e)
            }
        };

        let finished_at = Utc::now();
        app_log!(
            info,
            %run_id,
            state = ?self.state,
            elapsed_ms = (finished_at - started_at).num_milliseconds(),
            "Run finished"
        );

        RunReport {
            run_id,
            state: self.state,
            submission: self.submission.take(),
            error,
            started_at,
            finished_at,
        }
    }

    /// Print what a run would send without touching the network
    pub fn dry_run(&self) -> Result<&'static str> {
        let candidate = &self.config.candidate;
        let kind = query_selector::classify(&candidate.registration_number)?;

        println!("\n=== Dry run ===");
        println!("POST {}", self.config.generate_url());
        println!(
            "Candidate  : {} / {} / {}",
            candidate.name, candidate.registration_number, candidate.email
        );
        println!("Query      : {}", kind.label());
        println!("finalQuery : {}", kind.sql());

        Ok(kind.sql())
    }

    async fn execute(&mut self) -> Result<()> {
        let client = HiringClient::new(self.config.generate_url())?;

        self.transition(FlowState::Generating);
        println!("\n=== Generating webhook & token ===");

        let generation = client
            .generate_webhook(&self.config.candidate)
            .await?;

        println!("Webhook URL : {}", generation.webhook_url);
        println!("Access Token: {}", mask_token(&generation.access_token));

        let kind = query_selector::classify(&self.config.candidate.registration_number)?;
        app_log!(info, "Selected {}", kind.label());
        let final_query = kind.sql();

        println!("\n=== Submitting final query ===");
        println!("POST {}", generation.webhook_url);
        println!(
            "Headers: [Content-Type: application/json, Authorization: {}]",
            TOKEN_PLACEHOLDER
        );
        println!(
            "Body   : {}",
            serde_json::to_string(&SubmissionPayload::new(final_query))
                .unwrap_or_else(|_| final_query.to_string())
        );

        let result = client
            .submit_query(&generation.webhook_url, &generation.access_token, final_query)
            .await?;
        self.transition(FlowState::Submitted);

        println!("\n=== Submission Result ===");
        println!("{}", result.status);
        println!("Body: {}", result.body);

        let outcome = if result.is_success() {
            Ok(())
        } else {
            Err(SubmitterError::UnexpectedResponse {
                status: result.status,
                body: result.body.clone(),
            })
        };
        self.submission = Some(result);
        outcome
    }

    fn transition(&mut self, next: FlowState) {
        app_log!(debug, "Flow state {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// HTTP status errors print their detail, anything else the full diagnostic
fn report_error(err: &SubmitterError) {
    eprintln!("\n=== Error during startup flow ===");
    if err.is_http_status() {
        eprintln!("{}", err);
        app_log!(error, "Startup flow failed: {}", err);
    } else {
        eprintln!("{:?}", err);
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("Caused by: {}", cause);
            source = cause.source();
        }
        app_log!(error, "Startup flow failed: {:?}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::ConfigLayer;

    fn config(reg_no: &str) -> AppConfig {
        AppConfig::from_layer(ConfigLayer {
            base_url: Some("http://127.0.0.1:9".to_string()),
            reg_no: Some(reg_no.to_string()),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_new_runner_starts_at_start() {
        assert_eq!(Runner::new(config("REG1")).state(), FlowState::Start);
    }

    #[test]
    fn test_dry_run_selects_query() {
        let runner = Runner::new(config("REG12347"));
        assert_eq!(runner.dry_run().unwrap(), query_selector::QUERY1);

        let runner = Runner::new(config("REG100"));
        assert_eq!(runner.dry_run().unwrap(), query_selector::QUERY2);
        assert_eq!(runner.state(), FlowState::Start);
    }

    fn report(state: FlowState) -> RunReport {
        let now = Utc::now();
        RunReport {
            run_id: Uuid::new_v4(),
            state,
            submission: None,
            error: None,
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn test_failed_run_exits_zero_by_default() {
        assert_eq!(report(FlowState::Failed).exit_status(false), 0);
    }

    #[test]
    fn test_failed_run_exits_one_with_fail_on_error() {
        assert_eq!(report(FlowState::Failed).exit_status(true), 1);
    }

    #[test]
    fn test_successful_run_exits_zero() {
        assert_eq!(report(FlowState::Done).exit_status(true), 0);
        assert_eq!(report(FlowState::Done).exit_status(false), 0);
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_without_panicking() {
        // port 9 (discard) is not expected to serve HTTP
        let mut runner = Runner::new(config("REG12347"));
        let report = runner.run().await;

        assert_eq!(report.state, FlowState::Failed);
        assert!(!report.succeeded());
        assert!(report.submission.is_none());
        assert!(report.error.is_some());
        assert!(report.finished_at >= report.started_at);
    }
}
