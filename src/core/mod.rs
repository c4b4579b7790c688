pub mod pdf_client;
pub mod project_registry;

pub use crate::domain::model::{
    FileMetadata, InputFile, OutputFile, ProcessRequest, ProcessResponse, Project,
};
pub use crate::domain::ports::{ConfigProvider, PdfProcessor};
pub use crate::utils::error::Result;
