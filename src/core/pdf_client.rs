use crate::core::{ConfigProvider, PdfProcessor, ProcessRequest, ProcessResponse};
use crate::utils::error::{FormFillError, Result};
use reqwest::Client;
use serde::Deserialize;

/// Error document the processing service sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

pub struct PdfApiClient<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> PdfApiClient<C> {
    pub fn new(config: C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            config,
            client: builder.build()?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/process",
            self.config.api_base_url().trim_end_matches('/')
        )
    }

    /// Paths are passed through as given; the service checks that they exist.
    pub async fn process(
        &self,
        input_files: Vec<String>,
        form_file: &str,
        output_file: &str,
    ) -> Result<ProcessResponse> {
        let request = ProcessRequest::new(input_files, form_file, output_file);
        self.submit(&request).await
    }

    /// Same call as [`process`](Self::process), but every failure is logged
    /// and reported as `None`.
    pub async fn process_or_none(
        &self,
        input_files: Vec<String>,
        form_file: &str,
        output_file: &str,
    ) -> Option<ProcessResponse> {
        match self.process(input_files, form_file, output_file).await {
            Ok(response) => Some(response),
            Err(e) => {
                tracing::error!("Error calling PDF API: {}", e);
                None
            }
        }
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> PdfProcessor for PdfApiClient<C> {
    async fn submit(&self, request: &ProcessRequest) -> Result<ProcessResponse> {
        let endpoint = self.endpoint();
        tracing::debug!(
            "POST {} ({} input files, form: {})",
            endpoint,
            request.input_files.len(),
            request.form_file
        );

        let response = self.client.post(&endpoint).json(request).send().await?;
        let status = response.status();
        tracing::debug!("PDF API response status: {}", status);

        let body = response.text().await?;

        if !status.is_success() {
            return Err(FormFillError::HttpStatusError {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        if body.trim().is_empty() {
            return Err(FormFillError::EmptyResponseError);
        }

        let parsed: ProcessResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            "PDF API filled {} fields into {}",
            parsed.metadata.len(),
            parsed.output_file
        );
        Ok(parsed)
    }
}
