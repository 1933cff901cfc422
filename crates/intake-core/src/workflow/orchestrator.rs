//! Control Orchestrator — runs a submission through the intake pipeline.
//!
//! The orchestrator:
//! 1. Receives the submission
//! 2. Dispatches it to every specialist concurrently (tokio blocking pool)
//! 3. Hands the results to the completeness & consistency check
//! 4. Makes the final decision

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::IntakeError;
use crate::models::{ConsistencyReport, Decision, Document, DocumentSubmission, ProcessingResult};
use crate::workflow::consistency::CompletenessChecker;
use crate::workflow::decision::decide;
use crate::workflow::specialist::{Specialist, SpecialistLoader};

/// Everything a run produced, in a JSON-friendly shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowOutcome {
    pub submission_id: String,
    pub document_count: usize,
    pub report: ConsistencyReport,
    pub decision: Decision,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl WorkflowOutcome {
    /// Specialist results, in specialist order.
    pub fn results(&self) -> &[ProcessingResult] {
        &self.report.agent_results
    }

    pub fn missing_fields(&self) -> &[String] {
        &self.report.missing_fields
    }
}

pub struct ControlOrchestrator {
    specialists: Vec<Arc<dyn Specialist>>,
    checker: CompletenessChecker,
    /// Suppress the stage banners on stdout
    quiet: bool,
}

impl Default for ControlOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlOrchestrator {
    /// An orchestrator with the three built-in specialists.
    pub fn new() -> Self {
        Self::from_loader(&SpecialistLoader::with_builtins())
    }

    pub fn from_loader(loader: &SpecialistLoader) -> Self {
        Self::with_specialists(loader.specialists())
    }

    pub fn with_specialists(specialists: Vec<Arc<dyn Specialist>>) -> Self {
        Self {
            specialists,
            checker: CompletenessChecker::new(),
            quiet: false,
        }
    }

    pub fn set_quiet(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    pub fn specialists(&self) -> &[Arc<dyn Specialist>] {
        &self.specialists
    }

    /// Run the full workflow for one submission.
    pub async fn process(&self, submission: &DocumentSubmission) -> Result<WorkflowOutcome, IntakeError> {
        if self.specialists.is_empty() {
            return Err(IntakeError::Config("no specialists registered".to_string()));
        }

        let started_at = Utc::now();
        self.banner("WORKFLOW STARTED: Employer Uploads Documents");

        tracing::info!(
            "[Control Orchestrator] Received {} documents (submission {})",
            submission.len(),
            submission.id
        );
        self.say(&format!("[Control Orchestrator] Received {} documents", submission.len()));

        self.say("[Control Orchestrator] Dispatching to specialized agents (parallel processing)...");
        let results = self.dispatch(&submission.documents).await?;
        self.say("[Control Orchestrator] All specialized agents completed processing");

        self.say("[Control Orchestrator] Sending results to Completeness & Consistency Agent...");
        let report = self.checker.check(results);

        self.say("[Control Orchestrator] Making final decision...");
        let decision = decide(&report);
        if !decision.is_ready() {
            self.say(&format!("  Missing fields: {}", report.missing_fields.join(", ")));
        }

        tracing::info!(
            "[Control Orchestrator] Submission {} decided: {}",
            submission.id,
            decision.as_str()
        );
        self.banner(&format!("FINAL DECISION: {}", decision));

        Ok(WorkflowOutcome {
            submission_id: submission.id.clone(),
            document_count: submission.len(),
            report,
            decision,
            started_at,
            finished_at: Utc::now(),
        })
    }

    /// Run every specialist on the blocking pool and collect results in
    /// registration order.
    async fn dispatch(&self, documents: &[Document]) -> Result<Vec<ProcessingResult>, IntakeError> {
        let documents: Arc<[Document]> = Arc::from(documents);

        let handles: Vec<_> = self
            .specialists
            .iter()
            .map(|specialist| {
                let specialist = Arc::clone(specialist);
                let documents = Arc::clone(&documents);
                let name = specialist.name().to_string();
                let handle = tokio::task::spawn_blocking(move || specialist.process(&documents));
                (name, handle)
            })
            .collect();

        let mut results = Vec::with_capacity(handles.len());
        for (name, handle) in handles {
            let result = handle.await.map_err(|e| {
                tracing::error!("[Control Orchestrator] Specialist '{}' failed: {}", name, e);
                IntakeError::Specialist(format!("{} did not finish: {}", name, e))
            })?;
            tracing::debug!(
                "[Control Orchestrator] {} complete={} missing={:?}",
                result.agent_name,
                result.is_complete,
                result.missing_fields
            );
            results.push(result);
        }
        Ok(results)
    }

    fn say(&self, line: &str) {
        if !self.quiet {
            println!("\n{}", line);
        }
    }

    fn banner(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", "=".repeat(60));
            println!("{}", title);
            println!("{}", "=".repeat(60));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::manifest::SubmissionManifest;

    fn quiet() -> ControlOrchestrator {
        let mut orchestrator = ControlOrchestrator::new();
        orchestrator.set_quiet(true);
        orchestrator
    }

    #[tokio::test]
    async fn test_sample_upload_is_ready() {
        let submission = SubmissionManifest::sample().into_submission();
        let outcome = quiet().process(&submission).await.unwrap();

        assert_eq!(outcome.decision, Decision::SubmissionReady);
        assert_eq!(outcome.submission_id, submission.id);
        assert_eq!(outcome.document_count, 3);
        assert!(outcome.missing_fields().is_empty());
        let names: Vec<_> = outcome.results().iter().map(|r| r.agent_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Job & Specialty Agent",
                "Beneficiary & Status Agent",
                "Employer Control & Company Agent"
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_employer_documents_block() {
        let submission = DocumentSubmission::new(vec![
            Document::new("JD", "job_description"),
            Document::new("B", "beneficiary_info"),
        ]);
        let outcome = quiet().process(&submission).await.unwrap();

        assert_eq!(outcome.decision, Decision::BlockRequiredUploads);
        assert_eq!(outcome.missing_fields(), ["company_name", "control_number"]);
    }

    #[tokio::test]
    async fn test_empty_upload_blocks_with_every_field_missing() {
        let outcome = quiet().process(&DocumentSubmission::new(vec![])).await.unwrap();
        assert_eq!(outcome.decision, Decision::BlockRequiredUploads);
        assert_eq!(outcome.missing_fields().len(), 6);
        assert_eq!(outcome.missing_fields()[0], "job_title");
    }

    #[tokio::test]
    async fn test_no_specialists_is_a_config_error() {
        let orchestrator = ControlOrchestrator::with_specialists(vec![]);
        let err = orchestrator
            .process(&DocumentSubmission::new(vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::Config(_)));
    }

    struct Panicking;

    impl Specialist for Panicking {
        fn id(&self) -> &str {
            "panicking"
        }
        fn name(&self) -> &str {
            "Panicking Agent"
        }
        fn process(&self, _documents: &[Document]) -> ProcessingResult {
            panic!("boom")
        }
    }

    #[tokio::test]
    async fn test_panicking_specialist_surfaces_error() {
        let mut orchestrator = ControlOrchestrator::with_specialists(vec![Arc::new(Panicking)]);
        orchestrator.set_quiet(true);
        let err = orchestrator
            .process(&DocumentSubmission::new(vec![]))
            .await
            .unwrap_err();
        match err {
            IntakeError::Specialist(msg) => assert!(msg.contains("Panicking Agent")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_outcome_serializes_to_json() {
        let submission = SubmissionManifest::sample().into_submission();
        let outcome = quiet().process(&submission).await.unwrap();
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["decision"], "SUBMISSION_READY");
        assert_eq!(json["report"]["allComplete"], true);
        assert_eq!(json["report"]["agentResults"].as_array().unwrap().len(), 3);
    }
}
