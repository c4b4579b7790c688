use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Body of `POST /process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub input_files: Vec<String>,
    pub form_file: String,
    pub output_file: String,
}

impl ProcessRequest {
    pub fn new(
        input_files: Vec<String>,
        form_file: impl Into<String>,
        output_file: impl Into<String>,
    ) -> Self {
        Self {
            input_files,
            form_file: form_file.into(),
            output_file: output_file.into(),
        }
    }
}

/// Successful answer of the processing service. `metadata` holds the
/// form field values the service filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessResponse {
    pub status: String,
    pub output_file: String,
    pub metadata: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
}

impl FileMetadata {
    pub fn new(file_name: impl Into<String>, file_path: impl Into<String>, file_size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            file_path: file_path.into(),
            file_size,
        }
    }
}

pub type InputFile = FileMetadata;
pub type OutputFile = FileMetadata;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub input_files: Vec<InputFile>,
    pub output_file: Option<OutputFile>,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            input_files: Vec::new(),
            output_file: None,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = ProcessRequest::new(
            vec!["/data/in/a.pdf".to_string(), "/data/in/b.pdf".to_string()],
            "/data/forms/form.pdf",
            "/data/out/filled.pdf",
        );

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "input_files": ["/data/in/a.pdf", "/data/in/b.pdf"],
                "form_file": "/data/forms/form.pdf",
                "output_file": "/data/out/filled.pdf"
            })
        );
    }

    #[test]
    fn test_response_missing_fields_default_to_empty() {
        let response: ProcessResponse =
            serde_json::from_str(r#"{"status": "success"}"#).unwrap();

        assert_eq!(response.status, "success");
        assert!(response.output_file.is_empty());
        assert!(response.metadata.is_empty());
    }

    #[test]
    fn test_new_project_is_empty() {
        let project = Project::new("Tax return", "2024 forms");

        assert_eq!(project.name, "Tax return");
        assert_eq!(project.description, "2024 forms");
        assert!(project.input_files.is_empty());
        assert!(project.output_file.is_none());
        assert_ne!(project.id, Project::new("Tax return", "2024 forms").id);
    }
}
