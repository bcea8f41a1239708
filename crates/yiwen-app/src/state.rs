use yiwen_config::Config;
use yiwen_translator::{Gateway, Language};

pub struct AppState {
    pub config: Config,
    pub gateway: Gateway,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let gateway = Gateway::new(&config.translator);
        Self { config, gateway }
    }

    /// Language from `--to`, else the configured default, else the first selector entry
    pub fn initial_language(&self, requested: Option<&str>) -> anyhow::Result<Language> {
        if let Some(name) = requested {
            return Ok(name.parse()?);
        }

        let configured = &self.config.ui.default_language;
        Ok(configured.parse().unwrap_or_else(|e| {
            tracing::warn!("Ignoring DEFAULT_TARGET_LANGUAGE: {}", e);
            Language::default()
        }))
    }
}
