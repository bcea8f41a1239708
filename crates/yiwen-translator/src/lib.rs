use std::fmt;

pub mod credential;
pub mod deepl;
pub mod error;
pub mod gateway;
pub mod language;
pub mod request;

pub use credential::{
    Credential, CredentialSource, EnvCredentialSource, Endpoint, ResolvedCredential, Resolver,
};
pub use deepl::{DeeplClient, DeeplFactory};
pub use error::{ProviderError, TranslateError};
pub use gateway::{Gateway, ProviderFactory};
pub use language::Language;
pub use request::TranslationRequest;

/// Provider target language code, e.g. `JA` or `EN-US`
pub type LanguageCode = str;

/// Translation provider interface
#[async_trait::async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Translate text into the target language, returning the provider output as is
    async fn translate(&self, text: &str, to: &LanguageCode) -> Result<String, ProviderError>;

    /// Character usage of the current billing period
    async fn usage(&self) -> Result<Usage, ProviderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    pub character_count: u64,
    pub character_limit: u64,
}

impl Usage {
    pub fn limit_reached(&self) -> bool {
        self.character_limit > 0 && self.character_count >= self.character_limit
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Characters: {} of {}",
            self.character_count, self.character_limit
        )
    }
}
