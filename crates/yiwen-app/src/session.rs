use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use yiwen_translator::Gateway;

use crate::page::{self, TranslatePage};
use crate::slides;

const HELP: &str = ":lang <语言> 切换目标语言  :langs 列出语言  :slides  :quit 退出";

/// Interactive page: one translation per input line until EOF or `:quit`.
///
/// Failures are reported and the session keeps going.
pub async fn run_session<R, W>(
    page: &mut TranslatePage,
    gateway: &Gateway,
    input: R,
    output: &mut W,
    prompt: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    if prompt {
        write_line(output, &format!("{}\n{}", page::TITLE, HELP)).await?;
    }

    loop {
        if prompt {
            output
                .write_all(format!("[{}] > ", page.language).as_bytes())
                .await?;
            output.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let reply = match line.trim() {
            ":quit" | ":q" => break,
            ":langs" => page::language_table(),
            ":slides" => slides::render(),
            ":help" => HELP.to_string(),
            ":lang" => format!(
                "当前目标语言: {} ({})\n{}",
                page.language,
                page.language.code(),
                HELP
            ),
            command if command.starts_with(":lang ") => {
                let name = command.trim_start_matches(":lang ");
                match page.select_language(name) {
                    Ok(language) => format!("→ {language}"),
                    Err(e) => page::user_message(&e),
                }
            }
            _ => match page.submit(gateway, &line).await {
                Ok(text) => text.to_string(),
                Err(e) => {
                    tracing::warn!("Translation request failed: {}", e);
                    page::user_message(&e)
                }
            },
        };

        write_line(output, &reply).await?;
    }

    tracing::info!("Session finished");
    Ok(())
}

async fn write_line<W>(output: &mut W, text: &str) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await?;
    Ok(())
}
