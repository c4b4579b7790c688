use crate::domain::model::{ProcessRequest, ProcessResponse};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    /// `None` keeps the HTTP client's own default.
    fn request_timeout(&self) -> Option<Duration>;
}

#[async_trait]
pub trait PdfProcessor: Send + Sync {
    async fn submit(&self, request: &ProcessRequest) -> Result<ProcessResponse>;
}
