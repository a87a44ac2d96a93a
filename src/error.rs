// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SubmitterError>;

#[derive(Debug, Error)]
pub enum SubmitterError {
    /// Non-2xx status, or a 2xx with nothing in the body
    #[error("Unexpected response: status {status}, body: {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("HTTP request failed")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Registration number contains no digits: {0:?}")]
    InvalidRegistrationNumber(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl SubmitterError {
    /// True for errors carrying an HTTP status from the remote side.
    pub fn is_http_status(&self) -> bool {
        matches!(self, SubmitterError::UnexpectedResponse { .. })
    }
}
