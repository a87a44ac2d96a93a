// src/types/mod.rs
pub mod request;
pub mod response;

pub use request::{Candidate, SubmissionPayload};
pub use response::{GenerationResult, SubmissionResult};
