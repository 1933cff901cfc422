//! `intake config` — resolve and show the hosted-orchestration settings.

use clap::Args;
use intake_core::OrchestrateConfig;

use super::print_json;

/// Global flags that take precedence over the `WATSONX_*` environment.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// watsonx Orchestrate API key (overrides WATSONX_API_KEY)
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// watsonx project ID (overrides WATSONX_PROJECT_ID)
    #[arg(long, global = true)]
    pub project_id: Option<String>,

    /// Orchestrate service URL (overrides WATSONX_URL)
    #[arg(long, global = true)]
    pub service_url: Option<String>,

    /// Orchestrate instance ID (overrides WATSONX_INSTANCE_ID)
    #[arg(long, global = true)]
    pub instance_id: Option<String>,
}

impl ConfigOverrides {
    /// Apply every flag that was given on top of `config`.
    pub fn apply(&self, mut config: OrchestrateConfig) -> OrchestrateConfig {
        if let Some(ref v) = self.api_key {
            config = config.with_api_key(v.as_str());
        }
        if let Some(ref v) = self.project_id {
            config = config.with_project_id(v.as_str());
        }
        if let Some(ref v) = self.service_url {
            config = config.with_service_url(v.as_str());
        }
        if let Some(ref v) = self.instance_id {
            config = config.with_instance_id(v.as_str());
        }
        config
    }

    /// Environment first, then flags.
    pub fn resolve(&self) -> OrchestrateConfig {
        self.apply(OrchestrateConfig::from_env())
    }
}

pub async fn show(config: &OrchestrateConfig, json: bool) -> Result<(), String> {
    if json {
        let mut value = serde_json::to_value(config).map_err(|e| e.to_string())?;
        value["apiKey"] = serde_json::Value::String(config.redacted_api_key());
        value["configured"] = serde_json::Value::Bool(config.is_configured());
        print_json(&value);
        return Ok(());
    }

    println!("Service URL : {}", config.service_url);
    println!("Instance ID : {}", or_unset(&config.instance_id));
    println!("Project ID  : {}", or_unset(&config.project_id));
    println!("API key     : {}", config.redacted_api_key());
    println!(
        "Status      : {}",
        if config.is_configured() {
            "configured"
        } else {
            "not configured (workflow runs locally)"
        }
    );
    Ok(())
}

fn or_unset(s: &str) -> &str {
    if s.is_empty() {
        "(unset)"
    } else {
        s
    }
}
