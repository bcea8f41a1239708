use std::fmt;
use std::str::FromStr;

use crate::error::TranslateError;

/// Target languages offered by the translation page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Japanese,
    Korean,
    French,
    German,
    Spanish,
    Russian,
    Italian,
    Portuguese,
    Arabic,
    Thai,
    Vietnamese,
    Indonesian,
    Dutch,
    Swedish,
    Norwegian,
    Danish,
    Finnish,
    Polish,
    Turkish,
}

impl Language {
    /// Display order of the language selector
    pub const ALL: [Language; 20] = [
        Language::English,
        Language::Japanese,
        Language::Korean,
        Language::French,
        Language::German,
        Language::Spanish,
        Language::Russian,
        Language::Italian,
        Language::Portuguese,
        Language::Arabic,
        Language::Thai,
        Language::Vietnamese,
        Language::Indonesian,
        Language::Dutch,
        Language::Swedish,
        Language::Norwegian,
        Language::Danish,
        Language::Finnish,
        Language::Polish,
        Language::Turkish,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "英语",
            Language::Japanese => "日语",
            Language::Korean => "韩语",
            Language::French => "法语",
            Language::German => "德语",
            Language::Spanish => "西班牙语",
            Language::Russian => "俄语",
            Language::Italian => "意大利语",
            Language::Portuguese => "葡萄牙语",
            Language::Arabic => "阿拉伯语",
            Language::Thai => "泰语",
            Language::Vietnamese => "越南语",
            Language::Indonesian => "印尼语",
            Language::Dutch => "荷兰语",
            Language::Swedish => "瑞典语",
            Language::Norwegian => "挪威语",
            Language::Danish => "丹麦语",
            Language::Finnish => "芬兰语",
            Language::Polish => "波兰语",
            Language::Turkish => "土耳其语",
        }
    }

    /// DeepL `target_lang` value
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "EN-US",
            Language::Japanese => "JA",
            Language::Korean => "KO",
            Language::French => "FR",
            Language::German => "DE",
            Language::Spanish => "ES",
            Language::Russian => "RU",
            Language::Italian => "IT",
            Language::Portuguese => "PT-PT",
            Language::Arabic => "AR",
            Language::Thai => "TH",
            Language::Vietnamese => "VI",
            Language::Indonesian => "ID",
            Language::Dutch => "NL",
            Language::Swedish => "SV",
            Language::Norwegian => "NB",
            Language::Danish => "DA",
            Language::Finnish => "FI",
            Language::Polish => "PL",
            Language::Turkish => "TR",
        }
    }

    pub fn from_display_name(name: &str) -> Option<Language> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.display_name() == name)
    }

    pub fn from_code(code: &str) -> Option<Language> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts a display name or a provider code
impl FromStr for Language {
    type Err = TranslateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_display_name(s)
            .or_else(|| Language::from_code(s))
            .ok_or_else(|| TranslateError::UnsupportedLanguage(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const SELECTOR: [&str; 20] = [
        "英语", "日语", "韩语", "法语", "德语",
        "西班牙语", "俄语", "意大利语", "葡萄牙语", "阿拉伯语",
        "泰语", "越南语", "印尼语", "荷兰语", "瑞典语",
        "挪威语", "丹麦语", "芬兰语", "波兰语", "土耳其语",
    ];

    #[test]
    fn test_mapping_is_total_over_selector() {
        for name in SELECTOR {
            let lang = Language::from_display_name(name)
                .unwrap_or_else(|| panic!("{name} has no mapping"));
            assert_eq!(lang.display_name(), name);
            assert!(!lang.code().is_empty());
        }

        let listed: Vec<&str> = Language::ALL.iter().map(|l| l.display_name()).collect();
        assert_eq!(listed, SELECTOR);
    }

    #[test]
    fn test_names_and_codes_are_unique() {
        let names: HashSet<_> = Language::ALL.iter().map(|l| l.display_name()).collect();
        let codes: HashSet<_> = Language::ALL.iter().map(|l| l.code()).collect();

        assert_eq!(names.len(), Language::ALL.len());
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn test_codes_are_deepl_shaped() {
        for lang in Language::ALL {
            let code = lang.code();
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '-'),
                "{code}"
            );
            assert_eq!(Language::from_code(&code.to_lowercase()), Some(lang));
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("英语".parse::<Language>(), Ok(Language::English));
        assert_eq!(" 日语 ".parse::<Language>(), Ok(Language::Japanese));
        assert_eq!("pt-pt".parse::<Language>(), Ok(Language::Portuguese));
        assert_eq!(
            "克林贡语".parse::<Language>(),
            Err(TranslateError::UnsupportedLanguage("克林贡语".to_string()))
        );
    }

    #[test]
    fn test_default_is_first_entry() {
        assert_eq!(Language::default(), Language::ALL[0]);
    }
}
