//! # Warta
//!
//! A terminal news reader on top of the NewsAPI search endpoint.
//!
//! ## Architecture
//!
//! ```text
//! Keystrokes → Query (debounce) → Fetcher → Normalizer → Search (image filter)
//!                                                          │
//!                        Editorial grid / sorted results ←─┘
//! Open article → Bookmark store → History
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! export NEWSAPI_KEY=...
//!
//! # Editorial front page for the default trending term
//! warta home
//!
//! # Keyword search, oldest first, opening the third result
//! warta search "pemilu" --sort oldest --open 3
//!
//! # Everything you have opened
//! warta history
//!
//! # Interactive reader
//! warta tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together config,
/// search and the bookmark store.
pub mod app;

/// Command-line interface using clap.
///
/// - `home [--term T] [--open N]` - Editorial front page
/// - `search <query> [--sort newest|oldest] [--open N]` - Keyword search
/// - `history` - Opened articles
/// - `tui` - Launch the TUI
pub mod cli;

/// Configuration loaded from `~/.config/warta/config.toml`.
///
/// - API endpoint, key and default term
/// - Debounce window
/// - Custom colors (named or hex)
/// - Custom keybindings
pub mod config;

/// Core domain models.
///
/// - [`Article`](domain::Article): one search result, NewsAPI field names
///   on the wire
pub mod domain;

/// Home page arrangement, result sorting and the quick filter.
pub mod editorial;

/// HTTP access to the news search endpoint.
///
/// - [`Fetcher`](fetcher::Fetcher): Async trait for one search request
/// - [`HttpFetcher`](fetcher::http_fetcher::HttpFetcher): reqwest-based implementation
pub mod fetcher;

/// Decodes search responses into [`Article`](domain::Article)s.
pub mod normalizer;

/// Debounced search input and request sequencing.
pub mod query;

/// Fail-soft article search with the image filter applied.
pub mod search;

/// Local storage.
///
/// - [`KeyValueStore`](store::KeyValueStore): named text slots
/// - [`SqliteStore`](store::SqliteStore): SQLite implementation
/// - [`BookmarkStore`](store::BookmarkStore): history of opened articles
pub mod store;

/// Terminal user interface.
///
/// Three views built with ratatui:
/// - Home: editorial grid with a quick filter
/// - Search: debounced keyword search with a sort toggle
/// - History: articles opened so far
///
/// Keybindings: j/k navigate, Tab cycles views, / searches, f filters,
/// s toggles sort, Enter opens in browser, R refreshes, q quits.
pub mod tui;
