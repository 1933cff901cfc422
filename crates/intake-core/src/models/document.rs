use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single uploaded document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub content: String,
    #[serde(alias = "document_type")]
    pub document_type: String,
}

impl Document {
    pub fn new(content: impl Into<String>, document_type: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            document_type: document_type.into(),
        }
    }

    /// True when the document type contains `keyword`, ignoring case.
    pub fn type_mentions(&self, keyword: &str) -> bool {
        self.document_type
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }
}

/// One employer upload, handed to every stage of the workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSubmission {
    pub id: String,
    pub documents: Vec<Document>,
    pub submitted_at: DateTime<Utc>,
}

impl DocumentSubmission {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            documents,
            submitted_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
