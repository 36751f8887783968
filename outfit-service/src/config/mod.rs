use crate::services::providers::gemini::GEMINI_API_BASE;
use crate::services::PromptStyle;
use secrecy::Secret;
use service_core::config::{self as core_config, get_env};
use service_core::error::AppError;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct OutfitConfig {
    pub common: core_config::Config,
    pub gemini: GeminiSettings,
    pub deployment: DeploymentSettings,
    pub prompt_style: PromptStyle,
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Where the service is deployed. Only surfaced in verbose error bodies.
#[derive(Debug, Clone)]
pub struct DeploymentSettings {
    pub project: String,
    pub location: String,
}

impl OutfitConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let is_prod = common.is_prod();

        let timeout_secs: u64 = get_env(
            "GENAI_TIMEOUT_SECS",
            Some(&DEFAULT_TIMEOUT_SECS.to_string()),
            false,
        )?
        .parse()
        .map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("GENAI_TIMEOUT_SECS is not a number: {}", e))
        })?;

        Ok(OutfitConfig {
            gemini: GeminiSettings {
                api_key: Secret::new(get_env("GOOGLE_API_KEY", None, is_prod)?),
                model: get_env("GENAI_TEXT_MODEL", Some("gemini-pro"), is_prod)?,
                api_base: get_env("GENAI_API_BASE", Some(GEMINI_API_BASE), false)?,
                timeout: Duration::from_secs(timeout_secs),
            },
            deployment: DeploymentSettings {
                project: get_env("GOOGLE_CLOUD_PROJECT", Some("fashion-hack-2024"), false)?,
                location: get_env("GOOGLE_CLOUD_LOCATION", Some("us-central1"), false)?,
            },
            prompt_style: get_env("OUTFIT_PROMPT_STYLE", Some("markdown"), false)?
                .parse()
                .map_err(|e: String| AppError::ConfigError(anyhow::anyhow!(e)))?,
            common,
        })
    }
}
