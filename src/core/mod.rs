// src/core/mod.rs
//! Configuration and the HTTP client for the hiring API

pub mod config_manager;
pub mod service_client;

pub use config_manager::{AppConfig, ConfigManager};
pub use service_client::HiringClient;
