use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use yiwen_config::Config;

pub mod page;
pub mod session;
pub mod slides;
pub mod state;

#[cfg(test)]
mod tests;

use self::page::TranslatePage;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "yiwen", version, about = "Paste text, pick a language, get a DeepL translation")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Translate TEXT, or stdin when TEXT is omitted
    Translate {
        /// Target language, display name (英语) or code (EN-US)
        #[arg(short, long)]
        to: Option<String>,
        text: Option<String>,
    },
    /// Interactive translation page (default)
    Session {
        #[arg(short, long)]
        to: Option<String>,
    },
    /// List supported target languages
    Languages,
    /// Slide deck generation (placeholder)
    Slides,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let config = Config::new();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.ui.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let state = AppState::new(config);

    match run(&state, cli.command).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(state: &AppState, command: Option<Command>) -> anyhow::Result<ExitCode> {
    match command.unwrap_or(Command::Session { to: None }) {
        Command::Translate { to, text } => {
            let mut page = TranslatePage::new(state.initial_language(to.as_deref())?);

            let text = match text {
                Some(text) => text,
                None => {
                    let mut buf = String::new();
                    tokio::io::stdin().read_to_string(&mut buf).await?;
                    buf
                }
            };

            match page.submit(&state.gateway, &text).await {
                Ok(translated) => {
                    println!("{translated}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(e) => {
                    eprintln!("{}", page::user_message(&e));
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Session { to } => {
            let mut page = TranslatePage::new(state.initial_language(to.as_deref())?);
            let interactive = atty::is(atty::Stream::Stdin);
            let input = BufReader::new(tokio::io::stdin());
            let mut output = tokio::io::stdout();

            session::run_session(&mut page, &state.gateway, input, &mut output, interactive)
                .await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Languages => {
            println!("{}", page::language_table());
            Ok(ExitCode::SUCCESS)
        }
        Command::Slides => {
            println!("{}", slides::render());
            Ok(ExitCode::SUCCESS)
        }
    }
}
