use std::time::Instant;

use yiwen_config::translator::TranslatorConfig;

use crate::credential::{Credential, Endpoint, Resolver};
use crate::deepl::DeeplFactory;
use crate::error::{ProviderError, TranslateError};
use crate::language::Language;
use crate::request::TranslationRequest;
use crate::TranslationProvider;

/// Creates a provider client bound to one credential and endpoint
pub trait ProviderFactory: Send + Sync {
    fn build(
        &self,
        credential: &Credential,
        endpoint: &Endpoint,
    ) -> Result<Box<dyn TranslationProvider>, ProviderError>;
}

/// Stateless boundary between the presentation layer and the provider.
///
/// Every call resolves the key again, builds a fresh client and makes exactly
/// one provider request. Nothing is cached or retried.
pub struct Gateway {
    resolver: Resolver,
    factory: Box<dyn ProviderFactory>,
}

impl Gateway {
    /// Environment backed resolver and DeepL client
    pub fn new(config: &TranslatorConfig) -> Self {
        Self::with_parts(
            Resolver::from_env(&config.key_var, &config.free_api_url),
            DeeplFactory::new(&config.api_url, config.timeout()),
        )
    }

    pub fn with_parts(resolver: Resolver, factory: impl ProviderFactory + 'static) -> Self {
        Self {
            resolver,
            factory: Box::new(factory),
        }
    }

    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let resolved = self.resolver.resolve()?;
        let language = request.language();

        let provider = self
            .factory
            .build(&resolved.credential, &resolved.endpoint)
            .map_err(classify)?;

        tracing::info!(
            "Translating {} chars to {} ({}) via {} endpoint",
            request.text().chars().count(),
            language,
            language.code(),
            resolved.endpoint.label()
        );

        let started = Instant::now();
        let result = provider.translate(request.text(), language.code()).await;

        match result {
            Ok(text) => {
                tracing::debug!("Translation finished in {:?}", started.elapsed());
                Ok(text)
            }
            Err(err) => {
                tracing::error!("Translation failed after {:?}: {}", started.elapsed(), err);
                Err(classify(err))
            }
        }
    }

    /// Validates raw presentation input, then calls [`Gateway::translate`]
    pub async fn translate_text(
        &self,
        text: &str,
        language_name: &str,
    ) -> Result<String, TranslateError> {
        let language: Language = language_name.parse()?;
        let request = TranslationRequest::new(text, language)?;
        self.translate(&request).await
    }
}

/// Maps a provider failure onto the user facing taxonomy
pub fn classify(err: ProviderError) -> TranslateError {
    match err {
        ProviderError::Status {
            status: 401 | 403, ..
        } => TranslateError::AuthenticationError,
        // 456 is DeepL's quota exceeded status
        ProviderError::Status {
            status: 429 | 456, ..
        } => TranslateError::QuotaExceeded,
        ProviderError::Status { message, .. } => TranslateError::UnknownProvider(message),
        ProviderError::Transport(message) => TranslateError::NetworkError(message),
        ProviderError::Decode(message) | ProviderError::Request(message) => {
            TranslateError::UnknownProvider(message)
        }
    }
}
