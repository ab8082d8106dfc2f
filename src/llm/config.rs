use serde::Deserialize;
use std::path::Path;

/// Configuration for a single model binding.
///
/// Providers take the whole struct at construction and read the fields that
/// apply to them; a local provider may consult none of it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelConfig {
    /// Provider type like `"canned"` or `"openai_chat"`.
    #[serde(default)]
    pub provider: String,
    /// Optional unique name used for selecting this binding.
    #[serde(default)]
    pub name: Option<String>,
    /// Model identifier like `"llama3"` or `"gpt-4o"`.
    #[serde(default)]
    pub model: String,
    /// API key for hosted services.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Base URL for self-hosted services.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Maximum concurrent requests the provider should issue.
    #[serde(default)]
    pub concurrency: Option<usize>,
    /// Canned responses for providers that replay a fixed script.
    #[serde(default)]
    pub responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelConfigFile {
    #[serde(rename = "model")]
    models: Vec<ModelConfig>,
}

/// Loads model bindings from a TOML file of `[[model]]` tables.
pub fn load_model_configs(path: &Path) -> anyhow::Result<Vec<ModelConfig>> {
    let text = std::fs::read_to_string(path)?;
    let file: ModelConfigFile = toml::from_str(&text)?;
    Ok(file.models)
}
