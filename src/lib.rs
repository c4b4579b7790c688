pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{toml_config::TomlConfig, ClientConfig};
pub use crate::core::{pdf_client::PdfApiClient, project_registry::ProjectRegistry};
pub use crate::domain::model::{FileMetadata, ProcessRequest, ProcessResponse, Project};
pub use crate::utils::error::{ErrorCategory, FormFillError, Result};
