// src/core/service_client.rs
//! HTTP client for the hiring API: webhook generation and query submission

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::app_log;
use crate::error::{Result, SubmitterError};
use crate::types::{
    request::{Candidate, SubmissionPayload},
    response::{GenerateWebhookResponse, GenerationResult, SubmissionResult},
};

pub struct HiringClient {
    client: Client,
    generate_url: String,
}

impl HiringClient {
    /// One client per run, shared by both calls. No timeout beyond the client defaults.
    pub fn new(generate_url: String) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            generate_url,
        })
    }

    pub fn generate_url(&self) -> &str {
        &self.generate_url
    }

    /// 1. POST the candidate identity, receive the webhook URL and access token
    pub async fn generate_webhook(&self, candidate: &Candidate) -> Result<GenerationResult> {
        app_log!(info, "Calling webhook generation: {}", self.generate_url);

        let response = self
            .client
            .post(&self.generate_url)
            .json(candidate)
            .send()
            .await?;

        let status = response.status();
        app_log!(trace, "Generation response status: {}", status);

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            app_log!(error, "Generation error response {}: {}", status, error_text);
            return Err(SubmitterError::UnexpectedResponse {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let response_text = response.text().await?;

        if response_text.trim().is_empty() {
            app_log!(error, "Generation returned {} with an empty body", status);
            return Err(SubmitterError::UnexpectedResponse {
                status: status.as_u16(),
                body: response_text,
            });
        }

        let raw: GenerateWebhookResponse = serde_json::from_str(&response_text).map_err(|e| {
            SubmitterError::MalformedResponse(format!(
                "generation body is not valid JSON ({}): {}",
                e, response_text
            ))
        })?;

        match (raw.webhook, raw.access_token) {
            (Some(webhook_url), Some(access_token)) if !webhook_url.trim().is_empty() => {
                Ok(GenerationResult {
                    webhook_url,
                    access_token,
                })
            }
            _ => Err(SubmitterError::MalformedResponse(format!(
                "generation body lacks webhook or accessToken: {}",
                response_text
            ))),
        }
    }

    /// 2. POST the final query to the webhook. The token goes in as-is, without a scheme.
    pub async fn submit_query(
        &self,
        webhook_url: &str,
        access_token: &str,
        query: &str,
    ) -> Result<SubmissionResult> {
        let payload = SubmissionPayload::new(query);

        app_log!(info, "Submitting final query to {}", webhook_url);

        let response = self
            .client
            .post(webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, access_token)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        app_log!(info, "Submission response status: {}", status);

        Ok(SubmissionResult {
            status: status.as_u16(),
            body,
        })
    }
}
