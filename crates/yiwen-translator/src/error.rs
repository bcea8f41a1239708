/// Failures surfaced to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("API key is not configured: set {var}")]
    MissingCredential { var: String },

    #[error("Authentication error: the provider rejected the API key")]
    AuthenticationError,

    #[error("Quota exceeded: the provider usage limit has been reached")]
    QuotaExceeded,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("{0}")]
    UnknownProvider(String),

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Input text is empty")]
    EmptyInput,
}

/// Raw failures reported by a provider client
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected response: {0}")]
    Decode(String),

    /// The request could not be built, nothing was sent
    #[error("Invalid request: {0}")]
    Request(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return ProviderError::Decode(err.to_string());
        }

        let message = match std::error::Error::source(&err) {
            Some(source) => format!("{err}: {source}"),
            None => err.to_string(),
        };

        if err.is_builder() {
            ProviderError::Request(message)
        } else {
            ProviderError::Transport(message)
        }
    }
}
