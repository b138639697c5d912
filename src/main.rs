use std::fs::OpenOptions;
use std::sync::{Arc, Mutex};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use warta::app::AppContext;
use warta::cli::{commands, Cli, Commands};
use warta::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let is_tui = matches!(cli.command, Commands::Tui);

    // The TUI owns the terminal, so its logs go to a file instead.
    if is_tui {
        let log_path = AppContext::default_data_dir()?.join("warta.log");
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(log_file)))
            .with(EnvFilter::from_default_env())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }

    let config = Config::load()?;
    let ctx = AppContext::new(config, cli.db)?;

    match cli.command {
        Commands::Home { term, open } => {
            commands::home(&ctx, &term, open).await?;
        }
        Commands::Search { query, sort, open } => {
            commands::search(&ctx, &query, sort, open).await?;
        }
        Commands::History => {
            commands::history(&ctx)?;
        }
        Commands::Tui => {
            warta::tui::run(Arc::new(ctx)).await?;
        }
    }

    Ok(())
}
