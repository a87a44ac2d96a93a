// src/types/response.rs
use serde::Deserialize;

/// Webhook and token handed back by the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    pub webhook_url: String,
    pub access_token: String,
}

// Raw generation body; both fields are checked before building a GenerationResult
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateWebhookResponse {
    pub webhook: Option<String>,
    #[serde(rename = "accessToken")]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub status: u16,
    pub body: String,
}

impl SubmissionResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
