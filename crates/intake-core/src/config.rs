//! Settings for the hosted orchestration service (watsonx Orchestrate).
//!
//! The workflow runs entirely in-process; these values are resolved and
//! carried so a deployment can be pointed at a hosted instance later, but
//! nothing in this crate sends a request with them.
//!
//! Values may reference other environment variables:
//! `${VAR}` or `${VAR:-default}`.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

pub const ENV_API_KEY: &str = "WATSONX_API_KEY";
pub const ENV_PROJECT_ID: &str = "WATSONX_PROJECT_ID";
pub const ENV_SERVICE_URL: &str = "WATSONX_URL";
pub const ENV_INSTANCE_ID: &str = "WATSONX_INSTANCE_ID";

pub const DEFAULT_SERVICE_URL: &str = "https://us-south.watson-orchestrate.cloud.ibm.com";

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrchestrateConfig {
    #[serde(default, skip_serializing)]
    pub api_key: String,
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "default_service_url")]
    pub service_url: String,
    #[serde(default)]
    pub instance_id: String,
}

fn default_service_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

impl Default for OrchestrateConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            service_url: default_service_url(),
            instance_id: String::new(),
        }
    }
}

impl OrchestrateConfig {
    /// Build a config from explicit values. `${VAR}` references are expanded.
    pub fn new(
        api_key: impl Into<String>,
        project_id: impl Into<String>,
        service_url: impl Into<String>,
        instance_id: impl Into<String>,
    ) -> Self {
        Self {
            api_key: resolve_env_vars(&api_key.into()),
            project_id: resolve_env_vars(&project_id.into()),
            service_url: resolve_service_url(&service_url.into()),
            instance_id: resolve_env_vars(&instance_id.into()),
        }
    }

    /// Read the `WATSONX_*` variables. Missing values stay empty, except the
    /// service URL which falls back to the public default. References are
    /// expanded once, by [`OrchestrateConfig::new`].
    pub fn from_env() -> Self {
        let read = |key: &str| {
            std::env::var(key)
                .map(|v| v.trim().to_string())
                .unwrap_or_default()
        };
        let config = Self::new(
            read(ENV_API_KEY),
            read(ENV_PROJECT_ID),
            read(ENV_SERVICE_URL),
            read(ENV_INSTANCE_ID),
        );
        tracing::debug!("[OrchestrateConfig] Loaded from environment: {}", config);
        config
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = resolve_env_vars(&api_key.into());
        self
    }

    pub fn with_project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = resolve_env_vars(&project_id.into());
        self
    }

    pub fn with_service_url(mut self, service_url: impl Into<String>) -> Self {
        self.service_url = resolve_service_url(&service_url.into());
        self
    }

    pub fn with_instance_id(mut self, instance_id: impl Into<String>) -> Self {
        self.instance_id = resolve_env_vars(&instance_id.into());
        self
    }

    /// Credentials are present for a hosted instance.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && !self.instance_id.is_empty()
    }

    /// API key with everything but the last four characters masked.
    pub fn redacted_api_key(&self) -> String {
        let count = self.api_key.chars().count();
        if count == 0 {
            return "(unset)".to_string();
        }
        if count <= 4 {
            return "****".to_string();
        }
        let tail: String = self.api_key.chars().skip(count - 4).collect();
        format!("****{}", tail)
    }
}

impl std::fmt::Debug for OrchestrateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrchestrateConfig")
            .field("api_key", &self.redacted_api_key())
            .field("project_id", &self.project_id)
            .field("service_url", &self.service_url)
            .field("instance_id", &self.instance_id)
            .finish()
    }
}

impl std::fmt::Display for OrchestrateConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "url={} instance={} project={} key={}",
            self.service_url,
            or_unset(&self.instance_id),
            or_unset(&self.project_id),
            self.redacted_api_key()
        )
    }
}

/// Expand references; an empty result means the public default.
fn resolve_service_url(raw: &str) -> String {
    let url = resolve_env_vars(raw.trim());
    if url.is_empty() {
        default_service_url()
    } else {
        url
    }
}

fn or_unset(s: &str) -> &str {
    if s.is_empty() {
        "(unset)"
    } else {
        s
    }
}

fn env_ref_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern is valid"))
}

/// Expand `${VAR}` and `${VAR:-default}` references from the environment.
/// Unknown variables without a default are left as written.
pub fn resolve_env_vars(input: &str) -> String {
    env_ref_pattern()
        .replace_all(input, |caps: &regex::Captures| {
            let var_expr = &caps[1];
            if let Some(idx) = var_expr.find(":-") {
                let var_name = &var_expr[..idx];
                let default_val = &var_expr[idx + 2..];
                std::env::var(var_name).unwrap_or_else(|_| default_val.to_string())
            } else {
                std::env::var(var_expr).unwrap_or_else(|_| format!("${{{}}}", var_expr))
            }
        })
        .to_string()
}
