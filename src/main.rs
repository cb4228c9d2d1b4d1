// src/main.rs - chatdeck entry point

use std::sync::Arc;

use clap::Parser;

use chatdeck::cli::list::{run_list, ListOptions};
use chatdeck::cli::show::{run_show, ShowOptions};
use chatdeck::cli::{Cli, Commands};
use chatdeck::infra::config::Config;
use chatdeck::infra::errors::ChatdeckError;
use chatdeck::infra::{logger, paths};
use chatdeck::source::{HttpSessionSource, SessionSource};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        match e.downcast_ref::<ChatdeckError>() {
            Some(err) if err.is_load_failure() => {
                tracing::warn!("{err}");
                eprintln!("error: {}", err.user_message());
            }
            _ => eprintln!("error: {e}"),
        }
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The viewer owns the terminal, so it logs to a file instead of stderr.
    if cli.command.is_none() {
        logger::init_file_logging("info", &paths::log_file_path())?;
    } else {
        logger::init_logging("warn");
    }

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };
    let config = config.with_url(cli.url.clone())?;

    let source = HttpSessionSource::new(&config.source)?;
    tracing::info!(url = source.url(), per_page = source.per_page(), "session source ready");

    let mut stdout = std::io::stdout();
    match cli.command {
        None => chatdeck::tui::run_viewer(&config, Arc::new(source)),
        Some(Commands::List { page, all, json }) => {
            run_list(&source, &ListOptions { page, all, json }, &mut stdout).await
        }
        Some(Commands::Show {
            id,
            max_pages,
            json,
        }) => {
            run_show(
                &source,
                &ShowOptions {
                    id,
                    max_pages,
                    json,
                },
                &mut stdout,
            )
            .await
        }
    }
}
