//! `intake run` / `intake validate` — drive a submission through the workflow.

use std::path::Path;

use console::style;
use intake_core::workflow::{ControlOrchestrator, SubmissionManifest};

use super::{build_loader, print_json};

/// Run the workflow on a manifest (or the built-in sample upload).
///
/// A blocked submission is reported as an error so the process exits 1.
pub async fn run(
    manifest_file: Option<&str>,
    specialist_dir: Option<&str>,
    json: bool,
) -> Result<(), String> {
    let manifest = match manifest_file {
        Some(path) => SubmissionManifest::from_file(Path::new(path)).map_err(|e| e.to_string())?,
        None => SubmissionManifest::sample(),
    };

    let loader = build_loader(specialist_dir)?;
    let mut orchestrator = ControlOrchestrator::from_loader(&loader);
    orchestrator.set_quiet(json);

    if !json {
        println!(
            "📄 Loaded upload: {} ({} document(s), {} specialist(s))",
            manifest.name.as_deref().unwrap_or(manifest_file.unwrap_or("sample")),
            manifest.documents.len(),
            loader.len()
        );
    }

    let submission = manifest.into_submission();
    let outcome = orchestrator
        .process(&submission)
        .await
        .map_err(|e| e.to_string())?;

    if json {
        let value = serde_json::to_value(&outcome).map_err(|e| e.to_string())?;
        print_json(&value);
    } else {
        let label = if outcome.decision.is_ready() {
            style(outcome.decision.label()).green().bold()
        } else {
            style(outcome.decision.label()).red().bold()
        };
        println!("Workflow completed with decision: {}", label);
    }

    if outcome.decision.is_ready() {
        Ok(())
    } else {
        Err(format!(
            "Submission blocked. Required uploads missing for: {}",
            outcome.missing_fields().join(", ")
        ))
    }
}

/// Validate a manifest without running the workflow.
pub async fn validate(manifest_file: &str) -> Result<(), String> {
    let manifest =
        SubmissionManifest::from_file(Path::new(manifest_file)).map_err(|e| e.to_string())?;

    println!(
        "✅ Manifest '{}' is valid",
        manifest.name.as_deref().unwrap_or(manifest_file)
    );
    println!("   Documents: {}", manifest.documents.len());
    for (i, doc) in manifest.documents.iter().enumerate() {
        println!(
            "   {}. {} ({} chars)",
            i + 1,
            doc.document_type,
            doc.content.chars().count()
        );
    }
    Ok(())
}
