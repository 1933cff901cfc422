//! Completeness & Consistency agent — folds specialist results into one report.

use crate::models::{ConsistencyReport, ProcessingResult};

#[derive(Debug, Clone, Copy, Default)]
pub struct CompletenessChecker;

impl CompletenessChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check completeness and consistency across all specialist results.
    ///
    /// Missing fields keep the order of `results`. With no results both
    /// flags are `true`.
    pub fn check(&self, results: Vec<ProcessingResult>) -> ConsistencyReport {
        tracing::info!(
            "[Completeness & Consistency Agent] Checking {} agent results...",
            results.len()
        );

        let all_complete = results.iter().all(|r| r.is_complete);
        let all_consistent = results.iter().all(|r| r.is_consistent);
        let missing_fields = results
            .iter()
            .flat_map(|r| r.missing_fields.iter().cloned())
            .collect();

        ConsistencyReport {
            all_complete,
            all_consistent,
            missing_fields,
            agent_results: results,
        }
    }
}
