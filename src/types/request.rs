// src/types/request.rs
use serde::Serialize;

/// Candidate identity sent to the generation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub name: String,
    #[serde(rename = "regNo")]
    pub registration_number: String,
    pub email: String,
}

impl Candidate {
    pub fn new(name: &str, registration_number: &str, email: &str) -> Self {
        Self {
            name: name.to_string(),
            registration_number: registration_number.to_string(),
            email: email.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmissionPayload {
    #[serde(rename = "finalQuery")]
    pub final_query: String,
}

impl SubmissionPayload {
    pub fn new(final_query: &str) -> Self {
        Self {
            final_query: final_query.to_string(),
        }
    }
}
