use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_key_var() -> String {
    "DEEPL_API_KEY".to_string()
}

fn default_free_api_url() -> String {
    "https://api-free.deepl.com".to_string()
}

fn default_api_url() -> String {
    "https://api.deepl.com".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Name of the environment variable holding the provider key
    #[serde(default = "default_key_var")]
    pub key_var: String,
    /// Base URL used for `:fx` (free tier) keys
    #[serde(default = "default_free_api_url")]
    pub free_api_url: String,
    /// Provider default base URL
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// None keeps the HTTP client's own default
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

impl TranslatorConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let key_var = lookup("YIWEN_KEY_VAR")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_key_var);

        let free_api_url = lookup("DEEPL_FREE_API_URL").unwrap_or_else(default_free_api_url);

        let api_url = lookup("DEEPL_API_URL").unwrap_or_else(default_api_url);

        let timeout_seconds = lookup("TRANSLATE_TIMEOUT_SECONDS")
            .and_then(|v| v.trim().parse().ok())
            .filter(|secs: &u64| *secs > 0);

        Self {
            key_var,
            free_api_url,
            api_url,
            timeout_seconds,
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            key_var: default_key_var(),
            free_api_url: default_free_api_url(),
            api_url: default_api_url(),
            timeout_seconds: None,
        }
    }
}
