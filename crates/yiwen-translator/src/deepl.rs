use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::credential::{Credential, Endpoint};
use crate::error::ProviderError;
use crate::gateway::ProviderFactory;
use crate::{LanguageCode, TranslationProvider, Usage};

#[derive(Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    api_key: Credential,
    api_url: String,
}

impl DeeplClient {
    /// `api_url` is the service base, without the `/v2` path
    pub fn new(
        api_key: Credential,
        api_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ProviderError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("yiwen/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            api_url: api_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn auth_header(&self) -> String {
        format!("DeepL-Auth-Key {}", self.api_key.as_str())
    }
}

#[async_trait]
impl TranslationProvider for DeeplClient {
    async fn translate(&self, text: &str, to: &LanguageCode) -> Result<String, ProviderError> {
        let params = [("text", text), ("target_lang", to)];

        tracing::debug!(
            "POST {}/v2/translate target_lang={} ({} chars)",
            self.api_url,
            to,
            text.chars().count()
        );

        let response = self
            .client
            .post(format!("{}/v2/translate", self.api_url))
            .header("Authorization", self.auth_header())
            .form(&params)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: TranslateResponse = response.json().await?;

        body.translations
            .into_iter()
            .next()
            .map(|t| {
                if let Some(detected) = &t.detected_source_language {
                    tracing::debug!("Detected source language: {}", detected);
                }
                t.text
            })
            .ok_or_else(|| ProviderError::Decode("No translation in response".to_string()))
    }

    async fn usage(&self) -> Result<Usage, ProviderError> {
        tracing::debug!("GET {}/v2/usage", self.api_url);

        let response = self
            .client
            .get(format!("{}/v2/usage", self.api_url))
            .header("Authorization", self.auth_header())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let body: UsageResponse = response.json().await?;

        Ok(Usage {
            character_count: body.character_count,
            character_limit: body.character_limit,
        })
    }
}

/// Builds a [`DeeplClient`] per call. `Endpoint::Standard` falls back to `default_api_url`.
#[derive(Debug, Clone)]
pub struct DeeplFactory {
    default_api_url: String,
    timeout: Option<Duration>,
}

impl DeeplFactory {
    pub fn new(default_api_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            default_api_url: default_api_url.into(),
            timeout,
        }
    }
}

impl ProviderFactory for DeeplFactory {
    fn build(
        &self,
        credential: &Credential,
        endpoint: &Endpoint,
    ) -> Result<Box<dyn TranslationProvider>, ProviderError> {
        let api_url = endpoint.server_url().unwrap_or(&self.default_api_url);
        let client = DeeplClient::new(credential.clone(), api_url, self.timeout)?;
        Ok(Box::new(client))
    }
}

async fn status_error(response: reqwest::Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .or_else(|| Some(body.trim().to_string()).filter(|b| !b.is_empty()))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    tracing::warn!("DeepL returned {}: {}", status, message);

    ProviderError::Status {
        status: status.as_u16(),
        message,
    }
}

#[derive(Deserialize)]
struct TranslateResponse {
    translations: Vec<TranslationItem>,
}

#[derive(Deserialize)]
struct TranslationItem {
    text: String,
    #[serde(default)]
    detected_source_language: Option<String>,
}

#[derive(Deserialize)]
struct UsageResponse {
    character_count: u64,
    character_limit: u64,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
}
