//! Intake workflow — specialists, consistency check, decision, orchestration.
//!
//! # Architecture
//!
//! ```text
//! manifest.yaml ──► SubmissionManifest ──► DocumentSubmission
//!                                               │
//!                  specialists/*.yaml ──► SpecialistLoader ──► ControlOrchestrator
//!                                                                │ (spawn_blocking × N)
//!                                                        ProcessingResult × N
//!                                                                │
//!                                                      CompletenessChecker
//!                                                                │
//!                                                             decide()
//! ```

pub mod consistency;
pub mod decision;
pub mod manifest;
pub mod orchestrator;
pub mod specialist;

pub use consistency::CompletenessChecker;
pub use decision::decide;
pub use manifest::SubmissionManifest;
pub use orchestrator::{ControlOrchestrator, WorkflowOutcome};
pub use specialist::{KeywordSpecialist, Specialist, SpecialistDef, SpecialistLoader, SpecialistSource};
