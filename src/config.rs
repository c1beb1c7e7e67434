//! Client configuration, built explicitly and handed to [`crate::openai::ChatClient`].

use std::{env, time::Duration};

use crate::errors::ChatError;

/// Environment variable holding the bearer token.
pub const API_KEY_ENV: &str = "MOONSHOT_API_KEY";
/// Optional override for the API base URL.
pub const BASE_URL_ENV: &str = "MOONSHOT_BASE_URL";
/// Optional override for the model identifier.
pub const MODEL_ENV: &str = "MOONSHOT_MODEL";

pub const DEFAULT_BASE_URL: &str = "https://api.moonshot.cn/v1";
pub const DEFAULT_MODEL: &str = "moonshot-v1-8k";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_MAX_TOKENS: u32 = 900;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Everything the chat client needs to issue a request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: Option<f64>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// A config with the default endpoint and sampling parameters.
    pub fn new(api_key: impl Into<String>) -> Self {
        ClientConfig {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            top_p: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the config from the process environment.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary variable lookup. An unset or blank
    /// API key is `ConfigurationMissing`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ChatError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV)
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ChatError::ConfigurationMissing {
                var: API_KEY_ENV.to_string(),
            })?;
        let mut config = ClientConfig::new(api_key.trim());
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.trim().is_empty()) {
            config.base_url = base_url.trim().trim_end_matches('/').to_string();
        }
        if let Some(model) = lookup(MODEL_ENV).filter(|v| !v.trim().is_empty()) {
            config.model = model.trim().to_string();
        }
        Ok(config)
    }

    /// Full URL of the `chat/completions` endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_is_a_typed_error() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        match err {
            ChatError::ConfigurationMissing { var } => assert_eq!(var, API_KEY_ENV),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let err = ClientConfig::from_lookup(lookup(&[(API_KEY_ENV, "  ")])).unwrap_err();
        assert!(matches!(err, ChatError::ConfigurationMissing { .. }));
    }

    #[test]
    fn defaults_match_moonshot() {
        let config = ClientConfig::from_lookup(lookup(&[(API_KEY_ENV, "sk-test")])).unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "moonshot-v1-8k");
        assert_eq!(
            config.completions_url(),
            "https://api.moonshot.cn/v1/chat/completions"
        );
        assert_eq!(config.max_tokens, 900);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.top_p.is_none());
    }

    #[test]
    fn env_overrides_apply() {
        let config = ClientConfig::from_lookup(lookup(&[
            (API_KEY_ENV, "sk-test"),
            (BASE_URL_ENV, "http://localhost:8080/v1/"),
            (MODEL_ENV, "moonshot-v1-32k"),
        ]))
        .unwrap();
        assert_eq!(config.model, "moonshot-v1-32k");
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }
}
