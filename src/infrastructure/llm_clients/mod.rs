pub mod gemini;

use crate::domain::error::Result;
use crate::domain::llm_config::LLMConfig;
use async_trait::async_trait;

pub use gemini::GeminiClient;

/// The external analysis collaborator: accepts a prompt, returns the first
/// generated completion if the service produced one. `Ok(None)` means the
/// call succeeded but the expected text field was absent; callers degrade
/// rather than crash.
#[async_trait]
pub trait LLMClient {
    async fn generate(&self, config: &LLMConfig, prompt: &str) -> Result<Option<String>>;
    async fn list_models(&self, config: &LLMConfig) -> Result<Vec<String>>;
}
