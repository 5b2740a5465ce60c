use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "TRUTH_BEACON_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const ENV_API_KEY: &str = "CEREBRAS_API_KEY";
const ENV_BASE_URL: &str = "CEREBRAS_BASE_URL";
const ENV_MODEL: &str = "FACTCHECK_MODEL";

const DEFAULT_BASE_URL: &str = "https://api.cerebras.ai/v1";
const DEFAULT_MODEL: &str = "qwen-3-32b";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Generation parameters sent with every completion request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub model: String,
    pub max_completion_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    /// Upper bound for a single provider call
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_completion_tokens: 16382,
            temperature: 0.7,
            top_p: 0.95,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Inference provider connection settings
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Read once at startup; `None` when the variable is unset
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub provider: ProviderConfig,
    pub generation: GenerationConfig,
    pub port: u16,
    pub host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: ProviderConfig::default(),
            generation: GenerationConfig::default(),
            port: 8080,
            host: "127.0.0.1".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let config_path = std::env::var(ENV_CONFIG_PATH)
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut generation = Self::load_config_file(&config_path)
            .map(|cf| cf.generation)
            .unwrap_or_default();

        // Model override wins over the file
        if let Ok(model) = std::env::var(ENV_MODEL)
            && !model.trim().is_empty()
        {
            generation.model = model;
        }

        let provider = ProviderConfig {
            api_key: std::env::var(ENV_API_KEY)
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var(ENV_BASE_URL)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        };

        Self {
            provider,
            generation,
            port,
            host,
        }
    }

    /// Name of the environment variable holding the provider credential
    pub fn api_key_var() -> &'static str {
        ENV_API_KEY
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse_config_file(&contents) {
                Ok(config) => {
                    tracing::info!(path = %path.display(), "Loaded configuration from file");
                    Some(config)
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }

    /// Parse YAML contents; an empty document yields the defaults
    ///
    /// A zero `timeout_secs` falls back to the default timeout.
    fn parse_config_file(contents: &str) -> Result<ConfigFile, serde_yaml::Error> {
        let contents = contents.trim();
        if contents.is_empty() {
            return Ok(ConfigFile::default());
        }
        let mut config: ConfigFile = serde_yaml::from_str(contents)?;
        if config.generation.timeout_secs == 0 {
            tracing::warn!(
                default = DEFAULT_TIMEOUT_SECS,
                "timeout_secs of 0 is not allowed, using default"
            );
            config.generation.timeout_secs = DEFAULT_TIMEOUT_SECS;
        }
        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_provider_contract() {
        let config = Config::default();
        assert_eq!(config.generation.model, "qwen-3-32b");
        assert_eq!(config.generation.max_completion_tokens, 16382);
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.generation.top_p, 0.95);
        assert_eq!(config.provider.base_url, "https://api.cerebras.ai/v1");
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let parsed = Config::parse_config_file("   \n").unwrap();
        assert_eq!(parsed.generation, GenerationConfig::default());
    }

    #[test]
    fn test_partial_generation_section() {
        let yaml = "generation:\n  temperature: 0.2\n  timeout_secs: 15\n";
        let parsed = Config::parse_config_file(yaml).unwrap();
        assert_eq!(parsed.generation.temperature, 0.2);
        assert_eq!(parsed.generation.timeout_secs, 15);
        assert_eq!(parsed.generation.model, "qwen-3-32b");
        assert_eq!(parsed.generation.max_completion_tokens, 16382);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let parsed = Config::parse_config_file("generation:\n  timeout_secs: 0\n").unwrap();
        assert_eq!(parsed.generation.timeout_secs, 120);
    }

    #[test]
    fn test_invalid_config_file_is_an_error() {
        assert!(Config::parse_config_file("generation: [1, 2").is_err());
    }
}
