#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 表單填寫服務的預設位址
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5003";

pub const MAX_TIMEOUT_SECONDS: u64 = 3600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl ClientConfig {
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            timeout_seconds: None,
        }
    }

    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ConfigProvider for ClientConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base_url)?;
        if let Some(seconds) = self.timeout_seconds {
            validate_range("api.timeout_seconds", seconds, 1, MAX_TIMEOUT_SECONDS)?;
        }
        Ok(())
    }
}
