pub mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::editorial::SortOrder;

#[derive(Parser)]
#[command(name = "warta")]
#[command(about = "A terminal news reader", long_about = None)]
pub struct Cli {
    /// Bookmark database (default: <data dir>/warta/warta.db)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the editorial front page
    Home {
        /// Term to build the page from (default: configured trending term)
        #[arg(short, long, default_value = "")]
        term: String,

        /// Open the article with this number and save it to history
        #[arg(short, long)]
        open: Option<usize>,
    },
    /// Search articles by keyword
    Search {
        /// Search query
        query: String,

        /// Sort order: newest or oldest
        #[arg(short, long, default_value = "newest")]
        sort: SortOrder,

        /// Open the article with this number and save it to history
        #[arg(short, long)]
        open: Option<usize>,
    },
    /// List articles you have opened
    History,
    /// Launch the TUI
    Tui,
}
