use serde::{Deserialize, Serialize};

/// Final outcome of the intake workflow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    SubmissionReady,
    BlockRequiredUploads,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SubmissionReady => "SUBMISSION_READY",
            Self::BlockRequiredUploads => "BLOCK_REQUIRED_UPLOADS",
        }
    }

    /// Human-readable label shown at the end of a run.
    pub fn label(&self) -> &'static str {
        match self {
            Self::SubmissionReady => "✓ Submission Ready",
            Self::BlockRequiredUploads => "X Block + Required Uploads",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::SubmissionReady)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
