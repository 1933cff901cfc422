//! Specialist agents — one per slice of the submission.
//!
//! Each specialist scans the uploaded document types for its keywords and
//! records the fields it is responsible for. Definitions can be supplied in
//! YAML to add or override the built-in three:
//!
//! ```yaml
//! id: "job-specialty"
//! name: "Job & Specialty Agent"
//! description: "Processes job and specialty information"
//! keywords: [job, specialty]
//! fields: [job_title, specialty]
//! ```

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::models::{Document, ProcessingResult};

/// Value recorded for a field found in a matching document.
pub const EXTRACTED_PLACEHOLDER: &str = "Extracted from document";

/// A stage that inspects the uploaded documents and reports what it found.
///
/// `process` is synchronous; the orchestrator runs every specialist on the
/// blocking pool concurrently.
pub trait Specialist: Send + Sync {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn process(&self, documents: &[Document]) -> ProcessingResult;
}

/// A specialist definition loaded from YAML (or built in).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SpecialistDef {
    /// Specialist ID (e.g., "job-specialty")
    pub id: String,

    /// Display name, also used as `agent_name` in results
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Case-insensitive substrings matched against each document type
    pub keywords: Vec<String>,

    /// Fields this specialist must extract for the submission to be complete
    pub fields: Vec<String>,
}

impl SpecialistDef {
    /// Parse and validate a specialist definition from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, IntakeError> {
        let def: Self = serde_yaml::from_str(yaml)
            .map_err(|e| IntakeError::Specialist(format!("Failed to parse specialist YAML: {}", e)))?;
        def.validate()?;
        Ok(def)
    }

    /// Load a specialist definition from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, IntakeError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content).map_err(|e| match e {
            IntakeError::Specialist(msg) => {
                IntakeError::Specialist(format!("{} ({})", msg, path.display()))
            }
            other => other,
        })
    }

    pub fn validate(&self) -> Result<(), IntakeError> {
        if self.id.trim().is_empty() {
            return Err(IntakeError::Specialist("specialist id must not be empty".to_string()));
        }
        if self.keywords.iter().all(|k| k.trim().is_empty()) {
            return Err(IntakeError::Specialist(format!(
                "specialist '{}' declares no keywords",
                self.id
            )));
        }
        if self.fields.is_empty() {
            return Err(IntakeError::Specialist(format!(
                "specialist '{}' declares no fields",
                self.id
            )));
        }
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.as_str()) {
                return Err(IntakeError::Specialist(format!(
                    "specialist '{}' declares field '{}' twice",
                    self.id, field
                )));
            }
        }
        Ok(())
    }

    fn builtin(id: &str, name: &str, description: &str, keywords: &[&str], fields: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            fields: fields.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// The keyword-matching specialist every definition turns into.
#[derive(Debug, Clone)]
pub struct KeywordSpecialist {
    def: SpecialistDef,
}

impl KeywordSpecialist {
    pub fn new(def: SpecialistDef) -> Self {
        Self { def }
    }

    pub fn def(&self) -> &SpecialistDef {
        &self.def
    }

    fn matches(&self, doc: &Document) -> bool {
        self.def
            .keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| doc.type_mentions(k))
    }
}

impl Specialist for KeywordSpecialist {
    fn id(&self) -> &str {
        &self.def.id
    }

    fn name(&self) -> &str {
        &self.def.name
    }

    fn process(&self, documents: &[Document]) -> ProcessingResult {
        tracing::info!("[{}] Processing {} documents...", self.def.name, documents.len());

        let mut data = BTreeMap::new();
        if documents.iter().any(|d| self.matches(d)) {
            for field in &self.def.fields {
                data.insert(field.clone(), EXTRACTED_PLACEHOLDER.to_string());
            }
        }

        let is_complete = data.len() >= self.def.fields.len();
        let missing_fields = if is_complete {
            Vec::new()
        } else {
            self.def.fields.clone()
        };

        ProcessingResult {
            agent_name: self.def.name.clone(),
            is_complete,
            is_consistent: true,
            missing_fields,
            data,
        }
    }
}

/// Where a loaded definition came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialistSource {
    Builtin,
    File(PathBuf),
}

impl SpecialistSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::File(_) => "file",
        }
    }
}

/// Ordered collection of specialist definitions.
///
/// A definition whose id is already present replaces it in place, so a
/// file can override a built-in without changing the run order.
#[derive(Debug, Clone, Default)]
pub struct SpecialistLoader {
    entries: Vec<(SpecialistDef, SpecialistSource)>,
}

impl SpecialistLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// A loader pre-populated with the three built-in specialists.
    pub fn with_builtins() -> Self {
        let mut loader = Self::new();
        for def in Self::builtin_specialists() {
            loader.insert(def, SpecialistSource::Builtin);
        }
        loader
    }

    pub fn insert(&mut self, def: SpecialistDef, source: SpecialistSource) {
        match self.entries.iter_mut().find(|(d, _)| d.id == def.id) {
            Some(entry) => *entry = (def, source),
            None => self.entries.push((def, source)),
        }
    }

    /// Load every `.yaml`/`.yml` file in `dir`, in file-name order.
    ///
    /// All files are parsed before any is applied: on error the loader is
    /// left unchanged.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, IntakeError> {
        if !dir.is_dir() {
            return Err(IntakeError::Specialist(format!(
                "Specialist directory '{}' does not exist",
                dir.display()
            )));
        }

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let path = entry?.path();
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if matches!(ext, "yaml" | "yml") {
                paths.push(path);
            }
        }
        paths.sort();

        let parsed = paths
            .into_iter()
            .map(|path| SpecialistDef::from_file(&path).map(|def| (def, path)))
            .collect::<Result<Vec<_>, _>>()?;

        let count = parsed.len();
        for (def, path) in parsed {
            tracing::info!("[SpecialistLoader] Loaded specialist: {} ({})", def.id, def.name);
            self.insert(def, SpecialistSource::File(path));
        }
        Ok(count)
    }

    /// `./specialists/`, then `<config dir>/intake/specialists/`.
    pub fn default_search_paths() -> Vec<PathBuf> {
        let mut search_paths = vec![PathBuf::from("specialists")];
        if let Some(config) = dirs::config_dir() {
            search_paths.push(config.join("intake").join("specialists"));
        }
        search_paths
    }

    /// Load from [`SpecialistLoader::default_search_paths`].
    pub fn load_default_dirs(&mut self) -> usize {
        self.load_search_paths(&Self::default_search_paths())
    }

    /// Load each existing directory in turn. A directory that fails is
    /// logged and contributes nothing.
    pub fn load_search_paths(&mut self, search_paths: &[PathBuf]) -> usize {
        let mut total = 0;
        for dir in search_paths {
            if !dir.is_dir() {
                continue;
            }
            match self.load_dir(dir) {
                Ok(n) => {
                    tracing::info!("[SpecialistLoader] Loaded {} specialists from '{}'", n, dir.display());
                    total += n;
                }
                Err(e) => {
                    tracing::warn!("[SpecialistLoader] Failed to load from '{}': {}", dir.display(), e);
                }
            }
        }
        total
    }

    pub fn get(&self, id: &str) -> Option<&SpecialistDef> {
        self.entries.iter().find(|(d, _)| d.id == id).map(|(d, _)| d)
    }

    pub fn entries(&self) -> &[(SpecialistDef, SpecialistSource)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Runnable specialists in load order.
    pub fn specialists(&self) -> Vec<Arc<dyn Specialist>> {
        self.entries
            .iter()
            .map(|(def, _)| Arc::new(KeywordSpecialist::new(def.clone())) as Arc<dyn Specialist>)
            .collect()
    }

    /// Job & Specialty, Beneficiary & Status, Employer Control & Company.
    pub fn builtin_specialists() -> Vec<SpecialistDef> {
        vec![
            SpecialistDef::builtin(
                "job-specialty",
                "Job & Specialty Agent",
                "Processes job and specialty information",
                &["job", "specialty"],
                &["job_title", "specialty"],
            ),
            SpecialistDef::builtin(
                "beneficiary-status",
                "Beneficiary & Status Agent",
                "Processes beneficiary and status information",
                &["beneficiary", "status"],
                &["beneficiary_name", "status"],
            ),
            SpecialistDef::builtin(
                "employer-company",
                "Employer Control & Company Agent",
                "Processes employer control and company information",
                &["employer", "company"],
                &["company_name", "control_number"],
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builtin(id: &str) -> KeywordSpecialist {
        let def = SpecialistLoader::builtin_specialists()
            .into_iter()
            .find(|d| d.id == id)
            .unwrap();
        KeywordSpecialist::new(def)
    }

    #[test]
    fn test_job_specialist_extracts_fields() {
        let result = builtin("job-specialty").process(&[Document::new("x", "job_description")]);
        assert_eq!(result.agent_name, "Job & Specialty Agent");
        assert!(result.is_complete);
        assert!(result.is_consistent);
        assert!(result.missing_fields.is_empty());
        assert_eq!(result.data.get("job_title").unwrap(), EXTRACTED_PLACEHOLDER);
        assert_eq!(result.data.get("specialty").unwrap(), EXTRACTED_PLACEHOLDER);
    }

    #[test]
    fn test_specialist_reports_all_fields_missing() {
        let result = builtin("employer-company").process(&[Document::new("x", "job_description")]);
        assert!(!result.is_complete);
        assert!(result.is_consistent);
        assert_eq!(result.missing_fields, vec!["company_name", "control_number"]);
        assert!(result.data.is_empty());
    }

    #[test]
    fn test_keyword_match_ignores_case() {
        let result = builtin("beneficiary-status").process(&[Document::new("", "Visa STATUS Letter")]);
        assert!(result.is_complete);
    }

    #[test]
    fn test_parse_specialist_yaml() {
        let yaml = r#"
id: "wage-level"
name: "Wage Level Agent"
keywords: [wage, salary]
fields: [wage_level, offered_wage]
"#;
        let def = SpecialistDef::from_yaml(yaml).unwrap();
        assert_eq!(def.id, "wage-level");
        assert_eq!(def.keywords, vec!["wage", "salary"]);
        assert!(def.description.is_none());
    }

    #[test]
    fn test_rejects_definition_without_fields() {
        let yaml = r#"
id: "empty"
name: "Empty"
keywords: [x]
fields: []
"#;
        let err = SpecialistDef::from_yaml(yaml).unwrap_err();
        assert!(err.to_string().contains("no fields"));
    }

    #[test]
    fn test_rejects_duplicate_fields() {
        let yaml = r#"
id: "dup"
name: "Dup"
keywords: [x]
fields: [a, a]
"#;
        assert!(SpecialistDef::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_builtin_specialists() {
        let loader = SpecialistLoader::with_builtins();
        let ids: Vec<_> = loader.entries().iter().map(|(d, _)| d.id.as_str()).collect();
        assert_eq!(ids, vec!["job-specialty", "beneficiary-status", "employer-company"]);
        assert!(loader
            .entries()
            .iter()
            .all(|(_, s)| *s == SpecialistSource::Builtin));
    }

    #[test]
    fn test_load_dir_overrides_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("employer.yaml"),
            "id: employer-company\nname: Employer Agent\nkeywords: [employer]\nfields: [company_name]\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("wage.yml"),
            "id: wage-level\nname: Wage Agent\nkeywords: [wage]\nfields: [wage_level]\n",
        )
        .unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut loader = SpecialistLoader::with_builtins();
        let count = loader.load_dir(dir.path()).unwrap();
        assert_eq!(count, 2);
        assert_eq!(loader.len(), 4);

        let (def, source) = &loader.entries()[2];
        assert_eq!(def.name, "Employer Agent");
        assert_eq!(source.label(), "file");
        assert_eq!(loader.entries()[3].0.id, "wage-level");
    }

    #[test]
    fn test_fields_recorded_once_for_many_matches() {
        let result = builtin("job-specialty").process(&[
            Document::new("a", "job_description"),
            Document::new("b", "specialty_letter"),
        ]);
        assert!(result.is_complete);
        assert_eq!(result.data.len(), 2);
    }

    fn write_mixed_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("a.yaml"),
            "id: employer-company\nname: Overridden\nkeywords: [employer]\nfields: [company_name]\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("b.yaml"),
            "id: broken\nname: Broken\nkeywords: [x]\nfields: []\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_load_dir_with_invalid_file_applies_nothing() {
        let dir = write_mixed_dir();
        let mut loader = SpecialistLoader::with_builtins();
        let err = loader.load_dir(dir.path()).unwrap_err();
        assert!(err.to_string().contains("no fields"));

        assert_eq!(loader.len(), 3);
        let employer = loader.get("employer-company").unwrap();
        assert_eq!(employer.name, "Employer Control & Company Agent");
        assert!(loader
            .entries()
            .iter()
            .all(|(_, s)| *s == SpecialistSource::Builtin));
    }

    #[test]
    fn test_load_search_paths_skips_missing_and_failing_dirs() {
        let good = tempfile::tempdir().unwrap();
        std::fs::write(
            good.path().join("wage.yaml"),
            "id: wage-level\nname: Wage Agent\nkeywords: [wage]\nfields: [wage_level]\n",
        )
        .unwrap();
        let mixed = write_mixed_dir();

        let mut loader = SpecialistLoader::with_builtins();
        let loaded = loader.load_search_paths(&[
            PathBuf::from("/definitely/not/here"),
            mixed.path().to_path_buf(),
            good.path().to_path_buf(),
        ]);

        assert_eq!(loaded, 1);
        assert_eq!(loader.len(), 4);
        assert_eq!(
            loader.get("employer-company").unwrap().name,
            "Employer Control & Company Agent"
        );
        assert!(loader.get("wage-level").is_some());
    }

    #[test]
    fn test_default_search_paths_start_with_local_dir() {
        let paths = SpecialistLoader::default_search_paths();
        assert_eq!(paths[0], PathBuf::from("specialists"));
        assert!(paths
            .iter()
            .skip(1)
            .all(|p| p.ends_with(Path::new("intake").join("specialists"))));
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let mut loader = SpecialistLoader::new();
        let err = loader.load_dir(Path::new("/definitely/not/here")).unwrap_err();
        assert!(matches!(err, IntakeError::Specialist(_)));
    }
}
