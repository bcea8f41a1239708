use std::env;
use std::fmt;

use crate::error::TranslateError;

/// Key suffix marking a free tier account
pub const FREE_KEY_SUFFIX: &str = ":fx";

/// Free tier base URL
pub const FREE_API_URL: &str = "https://api-free.deepl.com";

/// Provider API key. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_free_tier(&self) -> bool {
        self.0.ends_with(FREE_KEY_SUFFIX)
    }

    /// First five characters followed by `...`
    pub fn masked_prefix(&self) -> String {
        let prefix: String = self.0.chars().take(5).collect();
        format!("{prefix}...")
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked_prefix())
    }
}

/// Which service base the client should target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// Provider default, no override
    Standard,
    /// Free tier base URL
    Restricted(String),
}

impl Endpoint {
    /// URL to override the client's default with, if any
    pub fn server_url(&self) -> Option<&str> {
        match self {
            Endpoint::Standard => None,
            Endpoint::Restricted(url) => Some(url.as_str()),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Endpoint::Standard => "Pro",
            Endpoint::Restricted(_) => "Free",
        }
    }
}

pub fn select_endpoint(credential: &Credential, free_api_url: &str) -> Endpoint {
    if credential.is_free_tier() {
        Endpoint::Restricted(free_api_url.to_string())
    } else {
        Endpoint::Standard
    }
}

/// Where the raw key comes from
pub trait CredentialSource: Send + Sync {
    /// Name reported when the key is missing
    fn name(&self) -> &str;

    fn read(&self) -> Option<String>;
}

/// Reads the key from a process environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var: String,
}

impl EnvCredentialSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn name(&self) -> &str {
        &self.var
    }

    fn read(&self) -> Option<String> {
        env::var(&self.var).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub credential: Credential,
    pub endpoint: Endpoint,
}

pub struct Resolver {
    source: Box<dyn CredentialSource>,
    free_api_url: String,
}

impl Resolver {
    pub fn new(source: impl CredentialSource + 'static, free_api_url: impl Into<String>) -> Self {
        Self {
            source: Box::new(source),
            free_api_url: free_api_url.into(),
        }
    }

    pub fn from_env(var: impl Into<String>, free_api_url: impl Into<String>) -> Self {
        Self::new(EnvCredentialSource::new(var), free_api_url)
    }

    pub fn resolve(&self) -> Result<ResolvedCredential, TranslateError> {
        let key = self
            .source
            .read()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| TranslateError::MissingCredential {
                var: self.source.name().to_string(),
            })?;

        let credential = Credential::new(key);
        let endpoint = select_endpoint(&credential, &self.free_api_url);

        tracing::debug!(
            "Resolved credential {:?} for {} endpoint",
            credential,
            endpoint.label()
        );

        Ok(ResolvedCredential {
            credential,
            endpoint,
        })
    }
}
