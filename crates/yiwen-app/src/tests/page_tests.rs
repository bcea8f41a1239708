use std::sync::atomic::Ordering;

use yiwen_translator::{Language, TranslateError};

use super::mock::gateway;
use crate::page::{TranslatePage, user_message};

#[tokio::test]
async fn test_submit_stores_translation() {
    let (gateway, _) = gateway(Some("abc123"), 403);
    let mut page = TranslatePage::new(Language::Japanese);

    let text = page.submit(&gateway, "hello").await.unwrap().to_string();

    assert_eq!(text, "JA:HELLO");
    assert_eq!(page.translated_text, "JA:HELLO");
}

#[tokio::test]
async fn test_failed_submit_keeps_previous_translation() {
    let (gateway, _) = gateway(Some("abc123"), 403);
    let mut page = TranslatePage::new(Language::English);

    page.submit(&gateway, "hello").await.unwrap();
    let err = page.submit(&gateway, "fail").await.unwrap_err();

    assert_eq!(err, TranslateError::AuthenticationError);
    assert_eq!(page.translated_text, "EN-US:HELLO");
    assert_eq!(
        user_message(&err),
        "❌ 翻译失败: Authentication error: the provider rejected the API key"
    );
}

#[tokio::test]
async fn test_blank_submit_is_warning_without_provider_call() {
    let (gateway, builds) = gateway(Some("abc123"), 403);
    let mut page = TranslatePage::new(Language::English);

    let err = page.submit(&gateway, "  \n").await.unwrap_err();

    assert_eq!(err, TranslateError::EmptyInput);
    assert_eq!(user_message(&err), "⚠️ 请输入要翻译的文本！");
    assert_eq!(builds.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_missing_key_is_reported_not_fatal() {
    let (gateway, builds) = gateway(None, 403);
    let mut page = TranslatePage::new(Language::English);

    let err = page.submit(&gateway, "hello").await.unwrap_err();

    assert!(matches!(err, TranslateError::MissingCredential { .. }));
    assert_eq!(builds.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_quota_failure() {
    let (gateway, _) = gateway(Some("abc123:fx"), 456);
    let mut page = TranslatePage::new(Language::English);

    assert_eq!(
        page.submit(&gateway, "fail").await,
        Err(TranslateError::QuotaExceeded)
    );
}
