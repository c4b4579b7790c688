use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormFillError {
    #[error("PDF API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("PDF API returned HTTP {status}: {message}")]
    HttpStatusError { status: u16, message: String },

    #[error("PDF API returned an empty response body")]
    EmptyResponseError,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 連線失敗、逾時等傳輸層錯誤
    Transport,
    /// 服務有回應，但狀態碼或內容不可用
    Response,
    /// 設定檔或參數錯誤
    Config,
}

impl FormFillError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FormFillError::ApiError(_) => ErrorCategory::Transport,
            FormFillError::HttpStatusError { .. }
            | FormFillError::EmptyResponseError
            | FormFillError::SerializationError(_) => ErrorCategory::Response,
            FormFillError::IoError(_)
            | FormFillError::ConfigValidationError { .. }
            | FormFillError::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FormFillError::ApiError(e) if e.is_connect() => {
                "Could not connect to the PDF service. Is it running?".to_string()
            }
            FormFillError::ApiError(e) if e.is_timeout() => {
                "The PDF service did not answer in time".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormFillError>;
