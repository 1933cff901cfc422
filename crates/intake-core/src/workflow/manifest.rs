//! Upload manifest — the list of documents an employer submits.
//!
//! ```yaml
//! name: "Acme petition"
//! documents:
//!   - document_type: job_description
//!     content: "Job description document"
//!   - document_type: beneficiary_info
//!     content: "Beneficiary information"
//! ```
//!
//! JSON is accepted too, since it parses as YAML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::models::{Document, DocumentSubmission};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionManifest {
    #[serde(default)]
    pub name: Option<String>,

    pub documents: Vec<Document>,
}

impl SubmissionManifest {
    /// Parse a manifest from a YAML (or JSON) string.
    pub fn from_yaml(yaml: &str) -> Result<Self, IntakeError> {
        let manifest: Self = serde_yaml::from_str(yaml)
            .map_err(|e| IntakeError::Manifest(format!("Failed to parse manifest: {}", e)))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Load a manifest from a file path.
    pub fn from_file(path: &Path) -> Result<Self, IntakeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            IntakeError::Manifest(format!("Failed to read manifest '{}': {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// The three-document upload used when no manifest is given.
    pub fn sample() -> Self {
        Self {
            name: Some("Sample employer upload".to_string()),
            documents: vec![
                Document::new("Job description document", "job_description"),
                Document::new("Beneficiary information", "beneficiary_info"),
                Document::new("Company details", "company_info"),
            ],
        }
    }

    fn validate(&self) -> Result<(), IntakeError> {
        if let Some(idx) = self
            .documents
            .iter()
            .position(|d| d.document_type.trim().is_empty())
        {
            return Err(IntakeError::Manifest(format!(
                "document #{} has an empty document_type",
                idx + 1
            )));
        }
        Ok(())
    }

    pub fn into_submission(self) -> DocumentSubmission {
        DocumentSubmission::new(self.documents)
    }
}
