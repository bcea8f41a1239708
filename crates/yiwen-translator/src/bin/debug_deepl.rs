//! DeepL connectivity check - run with: cargo run -p yiwen-translator --bin debug_deepl
//!
//! Failures always print a backtrace. With `RUST_BACKTRACE=1` it is the one
//! captured where the error was created, otherwise the one of the report site.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;
use yiwen_config::Config;
use yiwen_config::translator::TranslatorConfig;
use yiwen_translator::{DeeplClient, Resolver, TranslateError, TranslationProvider};

/// Fixed sample request
const SAMPLE_TEXT: &str = "Hello World";
const SAMPLE_TARGET: &str = "ZH";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new();
    let translator = &config.translator;
    let resolver = Resolver::from_env(&translator.key_var, &translator.free_api_url);

    if let Err(e) = debug(translator, &resolver, &mut io::stdout()).await {
        eprintln!("Failed to write report: {e}");
    }
}

/// Runs every check, reporting a failure on `out` instead of returning it
async fn debug<W: Write>(
    translator: &TranslatorConfig,
    resolver: &Resolver,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "Beginning DeepL Debug...")?;

    if let Err(e) = run(translator, resolver, out).await {
        report_failure(&e, out)?;
    }

    Ok(())
}

async fn run<W: Write>(
    translator: &TranslatorConfig,
    resolver: &Resolver,
    out: &mut W,
) -> Result<()> {
    let resolved = match resolver.resolve() {
        Ok(resolved) => resolved,
        Err(TranslateError::MissingCredential { var }) => {
            writeln!(out, "{var} missing!")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out, "Key found: {}", resolved.credential.masked_prefix())?;

    let api_url = match resolved.endpoint.server_url() {
        Some(url) => {
            writeln!(out, "Using Free API URL")?;
            url
        }
        None => {
            writeln!(out, "Using Pro API URL")?;
            translator.api_url.as_str()
        }
    };
    tracing::debug!("Base URL: {}", api_url);

    let client = DeeplClient::new(resolved.credential.clone(), api_url, translator.timeout())
        .context("Failed to create DeepL client")?;

    writeln!(out, "Translator created. Attempting usage call...")?;
    let usage = client.usage().await.context("Usage request failed")?;
    writeln!(out, "Usage: {usage}")?;
    if usage.limit_reached() {
        tracing::warn!("Character limit reached, translation will be rejected");
    }

    writeln!(out, "Attempting translation...")?;
    let text = client
        .translate(SAMPLE_TEXT, SAMPLE_TARGET)
        .await
        .context("Translation request failed")?;
    writeln!(out, "Translation result: {text}")?;

    Ok(())
}

fn report_failure<W: Write>(e: &anyhow::Error, out: &mut W) -> io::Result<()> {
    writeln!(out, "Exception: {e}")?;
    for cause in e.chain().skip(1) {
        writeln!(out, "  caused by: {cause}")?;
    }

    writeln!(out, "Backtrace:")?;
    let backtrace = e.backtrace();
    if backtrace.status() == BacktraceStatus::Captured {
        writeln!(out, "{backtrace}")
    } else {
        writeln!(out, "{}", Backtrace::force_capture())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};
    use yiwen_translator::CredentialSource;

    use super::*;

    const UNUSED_URL: &str = "http://127.0.0.1:9";

    struct FixedSource(Option<&'static str>);

    impl CredentialSource for FixedSource {
        fn name(&self) -> &str {
            "DEEPL_API_KEY"
        }

        fn read(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    async fn mount_healthy(server: &MockServer, key: &str) {
        let auth = format!("DeepL-Auth-Key {key}");
        Mock::given(method("GET"))
            .and(path("/v2/usage"))
            .and(header("Authorization", auth.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "character_count": 42,
                "character_limit": 500000
            })))
            .expect(1)
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v2/translate"))
            .and(header("Authorization", auth.as_str()))
            .and(body_string_contains("text=Hello+World"))
            .and(body_string_contains("target_lang=ZH"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "translations": [{"detected_source_language": "EN", "text": "你好，世界"}]
            })))
            .expect(1)
            .mount(server)
            .await;
    }

    async fn report(translator: &TranslatorConfig, resolver: &Resolver) -> Vec<String> {
        let mut out = Vec::new();
        debug(translator, resolver, &mut out).await.unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[tokio::test]
    async fn test_missing_key() {
        let resolver = Resolver::new(FixedSource(None), UNUSED_URL);

        let lines = report(&TranslatorConfig::default(), &resolver).await;

        assert_eq!(lines, ["Beginning DeepL Debug...", "DEEPL_API_KEY missing!"]);
    }

    #[tokio::test]
    async fn test_free_key_uses_free_url() {
        let server = MockServer::start().await;
        mount_healthy(&server, "abcdef123:fx").await;

        let translator = TranslatorConfig {
            api_url: UNUSED_URL.to_string(),
            ..TranslatorConfig::default()
        };
        let resolver = Resolver::new(FixedSource(Some("abcdef123:fx")), server.uri());

        let lines = report(&translator, &resolver).await;

        assert_eq!(
            lines,
            [
                "Beginning DeepL Debug...",
                "Key found: abcde...",
                "Using Free API URL",
                "Translator created. Attempting usage call...",
                "Usage: Characters: 42 of 500000",
                "Attempting translation...",
                "Translation result: 你好，世界",
            ]
        );
    }

    #[tokio::test]
    async fn test_standard_key_uses_default_url() {
        let server = MockServer::start().await;
        mount_healthy(&server, "pro-key-1").await;

        let translator = TranslatorConfig {
            api_url: server.uri(),
            ..TranslatorConfig::default()
        };
        let resolver = Resolver::new(FixedSource(Some("pro-key-1")), UNUSED_URL);

        let lines = report(&translator, &resolver).await;

        assert_eq!(lines[1], "Key found: pro-k...");
        assert_eq!(lines[2], "Using Pro API URL");
        assert_eq!(lines.last().map(String::as_str), Some("Translation result: 你好，世界"));
    }

    #[tokio::test]
    async fn test_failed_usage_prints_exception_and_stops() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v2/usage"))
            .respond_with(
                ResponseTemplate::new(403).set_body_json(json!({"message": "Forbidden"})),
            )
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let translator = TranslatorConfig {
            api_url: server.uri(),
            ..TranslatorConfig::default()
        };
        let resolver = Resolver::new(FixedSource(Some("rejected")), UNUSED_URL);

        let lines = report(&translator, &resolver).await;

        assert_eq!(
            lines[..7],
            [
                "Beginning DeepL Debug...",
                "Key found: rejec...",
                "Using Pro API URL",
                "Translator created. Attempting usage call...",
                "Exception: Usage request failed",
                "  caused by: HTTP 403: Forbidden",
                "Backtrace:",
            ]
        );
        assert!(!lines.iter().any(|l| l == "Attempting translation..."));
    }
}
