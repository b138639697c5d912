use std::path::PathBuf;
use std::sync::Arc;

use crate::app::error::{Result, WartaError};
use crate::config::Config;
use crate::domain::Article;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::search::ArticleSearch;
use crate::store::{BookmarkStore, SqliteStore};

pub struct AppContext {
    pub config: Arc<Config>,
    pub search: ArticleSearch,
    pub bookmarks: BookmarkStore<SqliteStore>,
}

impl AppContext {
    pub fn new(config: Config, db_path: Option<PathBuf>) -> Result<Self> {
        let db_path = match db_path {
            Some(p) => p,
            None => Self::default_data_dir()?.join("warta.db"),
        };

        let storage = Arc::new(SqliteStore::new(&db_path)?);
        tracing::debug!("Using bookmark database at {}", db_path.display());
        Self::with_storage(config, storage)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        Self::with_storage(config, Arc::new(SqliteStore::in_memory()?))
    }

    fn with_storage(config: Config, storage: Arc<SqliteStore>) -> Result<Self> {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new(&config.api)?);
        let search = ArticleSearch::new(fetcher, config.api.default_term.clone());

        Ok(Self {
            config: Arc::new(config),
            search,
            bookmarks: BookmarkStore::new(storage),
        })
    }

    /// Open an article in the browser, bookmarking it first.
    ///
    /// The bookmark is kept even if no browser could be launched.
    pub fn open_article(&self, article: &Article) -> Result<()> {
        if self.bookmarks.record(article)? {
            tracing::info!("Saved {} to history", article.url);
        }
        open::that(&article.url)?;
        Ok(())
    }

    /// `<data_dir>/warta`, created on first use.
    pub fn default_data_dir() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| WartaError::Config("Could not find data directory".into()))?;
        let warta_dir = data_dir.join("warta");
        std::fs::create_dir_all(&warta_dir)?;
        Ok(warta_dir)
    }
}
