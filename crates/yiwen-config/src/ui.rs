use serde::{Deserialize, Serialize};

fn default_language() -> String {
    "英语".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Display name of the language selected on startup
    #[serde(default = "default_language")]
    pub default_language: String,
    /// Log filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl UiConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_language = lookup("DEFAULT_TARGET_LANGUAGE")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_language);

        let log_filter = lookup("YIWEN_LOG").unwrap_or_else(default_log_filter);

        Self {
            default_language,
            log_filter,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            log_filter: default_log_filter(),
        }
    }
}
