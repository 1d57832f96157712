//! Language model endpoint configuration from TOML (`[llm]` section)
//!
//! Any server speaking the OpenAI chat completions protocol works.
//!
//! ```toml
//! [llm]
//! base_url = "http://localhost:11434/v1"
//! model = "qwen2.5:14b"
//! api_key_env = "OPENAI_API_KEY"
//! timeout_seconds = 120
//! temperature = 0.7
//! ```

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    pub base_url: String,
    pub model: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub timeout_seconds: u64,
    pub temperature: f32,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_seconds: 120,
            temperature: 0.7,
        }
    }
}

impl FileLlmConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.model.trim().is_empty() {
            return Err(ConfigValidationError::EmptyModelName);
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        Ok(())
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}
