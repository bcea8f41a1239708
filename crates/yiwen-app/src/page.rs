use yiwen_translator::{Gateway, Language, TranslateError, TranslationRequest};

pub const TITLE: &str = "📝 文本翻译";
pub const EMPTY_INPUT_WARNING: &str = "⚠️ 请输入要翻译的文本！";

/// State of the translation page, owned by the front-end
#[derive(Debug, Clone, Default)]
pub struct TranslatePage {
    pub language: Language,
    pub translated_text: String,
}

impl TranslatePage {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            translated_text: String::new(),
        }
    }

    pub fn select_language(&mut self, name: &str) -> Result<Language, TranslateError> {
        self.language = name.parse()?;
        Ok(self.language)
    }

    /// Translate `input` into the selected language.
    ///
    /// On failure the previous translation stays on the page.
    pub async fn submit(&mut self, gateway: &Gateway, input: &str) -> Result<&str, TranslateError> {
        let request = TranslationRequest::new(input, self.language)?;

        tracing::debug!("Translating...");
        self.translated_text = gateway.translate(&request).await?;

        Ok(&self.translated_text)
    }
}

/// Message shown to the user for a failed action
pub fn user_message(err: &TranslateError) -> String {
    match err {
        TranslateError::EmptyInput => EMPTY_INPUT_WARNING.to_string(),
        other => format!("❌ 翻译失败: {other}"),
    }
}

pub fn language_table() -> String {
    Language::ALL
        .iter()
        .map(|lang| format!("{}\t{}", lang.display_name(), lang.code()))
        .collect::<Vec<_>>()
        .join("\n")
}
