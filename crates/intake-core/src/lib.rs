//! Intake Core — transport-agnostic domain logic for the document intake workflow.
//!
//! An employer upload flows through a fixed pipeline:
//!
//! ```text
//! upload ──► ControlOrchestrator ──┬─► Job & Specialty
//!                                  ├─► Beneficiary & Status        (concurrent)
//!                                  └─► Employer Control & Company
//!                                             │
//!                      CompletenessChecker ◄──┘
//!                                             │
//!                                   Decision (ready / blocked)
//! ```
//!
//! This crate has no CLI or HTTP dependency; the `intake` binary in
//! `intake-cli` is a thin shell over it.

pub mod config;
pub mod error;
pub mod models;
pub mod workflow;

// Convenience re-exports
pub use config::OrchestrateConfig;
pub use error::IntakeError;
pub use models::{ConsistencyReport, Decision, Document, DocumentSubmission, ProcessingResult};
pub use workflow::{ControlOrchestrator, WorkflowOutcome};
