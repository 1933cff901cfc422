//! CLI command implementations.
//!
//! Each submodule corresponds to a top-level CLI command and goes through
//! the intake-core domain logic.

pub mod config;
pub mod run;
pub mod specialists;

use std::path::Path;

use intake_core::workflow::SpecialistLoader;

/// Built-ins plus either `specialist_dir` or the default search directories.
pub fn build_loader(specialist_dir: Option<&str>) -> Result<SpecialistLoader, String> {
    let mut loader = SpecialistLoader::with_builtins();
    match specialist_dir {
        Some(dir) => {
            let count = loader.load_dir(Path::new(dir)).map_err(|e| e.to_string())?;
            tracing::info!("[Intake] Loaded {} specialist(s) from '{}'", count, dir);
        }
        None => {
            loader.load_default_dirs();
        }
    }
    Ok(loader)
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) {
    println!(
        "{}",
        serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
    );
}

/// Load `.env.local` and `.env` from the working directory.
pub fn load_dotenv() {
    load_dotenv_from(Path::new("."));
}

/// Load `.env.local` then `.env` from `dir` if present. Variables already
/// set (including ones set by `.env.local`) win.
pub fn load_dotenv_from(dir: &Path) {
    for filename in &[".env.local", ".env"] {
        let path = dir.join(filename);
        let Ok(content) = std::fs::read_to_string(&path) else {
            continue;
        };
        for (key, value) in parse_dotenv(&content) {
            if std::env::var(&key).is_err() {
                std::env::set_var(&key, &value);
            }
        }
        tracing::info!("[Intake] Loaded environment from '{}'", path.display());
    }
}

/// Parse `KEY=VALUE` lines, skipping blanks and `#` comments and stripping
/// one layer of matching quotes.
pub fn parse_dotenv(content: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        if let Some((key, value)) = line.split_once('=') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            let mut value = value.trim();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = &value[1..value.len() - 1];
            }
            pairs.push((key.to_string(), value.to_string()));
        }
    }
    pairs
}

pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}
