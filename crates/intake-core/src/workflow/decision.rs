//! Final decision rule.

use crate::models::{ConsistencyReport, Decision};

/// Ready only when every specialist reported complete *and* consistent.
pub fn decide(report: &ConsistencyReport) -> Decision {
    if report.all_complete && report.all_consistent {
        Decision::SubmissionReady
    } else {
        tracing::info!(
            "[Control Orchestrator] Missing fields: {}",
            report.missing_fields.join(", ")
        );
        Decision::BlockRequiredUploads
    }
}
