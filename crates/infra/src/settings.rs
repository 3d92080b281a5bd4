// crates/infra/src/settings.rs
//! Startup configuration: the YAML settings file and integration endpoints
//! from the environment.

use std::path::Path;

use log::debug;
use project_radar_domain::RadarConfig;
use project_radar_shared_kernel::{ErrorContext, InfraResult, Result};

use crate::persistence::FileReader;

pub const TEAMS_WEBHOOK_URL_VAR: &str = "TEAMS_WEBHOOK_URL";
pub const OLLAMA_API_URL_VAR: &str = "OLLAMA_API_URL";
pub const AI_MODEL_VAR: &str = "AI_MODEL";

pub const DEFAULT_OLLAMA_API_URL: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_AI_MODEL: &str = "qwen2.5:3b";

/// Endpoints of the downstream collaborators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrationSettings {
    pub teams_webhook_url: Option<String>,
    pub ollama_api_url: String,
    pub ai_model: String,
}

impl IntegrationSettings {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to honour a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            teams_webhook_url: non_blank(TEAMS_WEBHOOK_URL_VAR),
            ollama_api_url: non_blank(OLLAMA_API_URL_VAR).unwrap_or_else(|| DEFAULT_OLLAMA_API_URL.to_string()),
            ai_model: non_blank(AI_MODEL_VAR).unwrap_or_else(|| DEFAULT_AI_MODEL.to_string()),
        }
    }

    /// The webhook URL, if it looks like one (must contain `http`).
    pub fn teams_webhook(&self) -> Option<&str> {
        self.teams_webhook_url.as_deref().filter(|url| url.contains("http"))
    }
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

/// Loads and validates the YAML settings file, or built-in defaults when `path` is `None`.
///
/// Missing keys fall back to their defaults; the project catalog is validated
/// while parsing.
pub fn load_config(path: Option<&Path>) -> Result<RadarConfig> {
    let config = match path {
        None => {
            debug!("no settings file given, using defaults");
            RadarConfig::default()
        }
        Some(path) => {
            let text = FileReader::read_settings(path)?;
            parse_config(&text).with_context(|| format!("settings file {}", path.display()))?
        }
    };
    config.validate()?;
    Ok(config)
}

#[cfg(feature = "yaml")]
pub fn parse_config(text: &str) -> InfraResult<RadarConfig> {
    if text.trim().is_empty() {
        return Ok(RadarConfig::default());
    }
    Ok(serde_yaml::from_str(text)?)
}

#[cfg(not(feature = "yaml"))]
pub fn parse_config(_text: &str) -> InfraResult<RadarConfig> {
    Err(project_radar_shared_kernel::InfrastructureError::SettingsParse {
        format: "YAML".to_string(),
        details: "built without the `yaml` feature".to_string(),
    })
}
