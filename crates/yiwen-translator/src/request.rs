use crate::error::TranslateError;
use crate::language::Language;

/// Validated input for a single translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    text: String,
    language: Language,
}

impl TranslationRequest {
    /// Rejects text that is empty after trimming. The text is kept as given.
    pub fn new(text: impl Into<String>, language: Language) -> Result<Self, TranslateError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(TranslateError::EmptyInput);
        }

        Ok(Self { text, language })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn language(&self) -> Language {
        self.language
    }
}
