use crate::domain::error::{AppError, Result};
use crate::domain::llm_config::{LLMConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

const KEYRING_SERVICE: &str = "SheetSight";

/// Startup settings. Defaults, then `sheetsight.toml`, then `SHEETSIGHT_*`
/// environment variables (highest precedence).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file("sheetsight.toml"))
            .merge(Env::prefixed("SHEETSIGHT_"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load settings: {}", e)))
    }

    pub fn into_llm_config(self) -> LLMConfig {
        LLMConfig {
            base_url: self.base_url,
            model: self.model,
            api_key: self.api_key,
            ..LLMConfig::default()
        }
    }
}

/// API keys live in the OS keyring, keyed by provider name, never on disk.
pub struct ConfigService {
    service: String,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            service: KEYRING_SERVICE.to_string(),
        }
    }

    fn entry(&self, provider: &str) -> Result<keyring::Entry> {
        keyring::Entry::new(&self.service, provider)
            .map_err(|e| AppError::SecurityError(format!("Failed to create entry: {}", e)))
    }

    pub fn save_api_key(&self, provider: &str, key: &str) -> Result<()> {
        self.entry(provider)?
            .set_password(key)
            .map_err(|e| AppError::SecurityError(format!("Failed to set password: {}", e)))
    }

    pub fn get_api_key(&self, provider: &str) -> Result<String> {
        self.entry(provider)?
            .get_password()
            .map_err(|e| AppError::SecurityError(format!("Failed to get password: {}", e)))
    }

    pub fn delete_api_key(&self, provider: &str) -> Result<()> {
        self.entry(provider)?
            .delete_credential()
            .map_err(|e| AppError::SecurityError(format!("Failed to delete password: {}", e)))
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
