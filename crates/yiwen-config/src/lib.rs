use std::env;

use serde::{Deserialize, Serialize};

use self::translator::TranslatorConfig;
use self::ui::UiConfig;

pub mod translator;
pub mod ui;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub translator: TranslatorConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn new() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build the config from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            translator: TranslatorConfig::from_lookup(&lookup),
            ui: UiConfig::from_lookup(&lookup),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
