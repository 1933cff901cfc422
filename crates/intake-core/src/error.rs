//! Core error type for the intake workflow.
//!
//! A blocked submission is a normal [`Decision`](crate::models::Decision),
//! never an error. `IntakeError` covers the cases where the workflow could
//! not run at all.

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Specialist error: {0}")]
    Specialist(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
