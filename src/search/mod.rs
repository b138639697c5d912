//! Article search: one fetch, decoded, filtered to displayable articles.
//!
//! Failures never propagate to views. They come back as an empty article
//! list with [`SearchStatus::Failed`] so the diagnostic channel can still
//! tell "nothing matched" apart from "the request broke".

use std::sync::Arc;

use crate::app::Result;
use crate::domain::Article;
use crate::fetcher::Fetcher;
use crate::normalizer::Normalizer;

pub const DEFAULT_TERM: &str = "viral";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    Ok,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct SearchResults {
    pub term: String,
    pub articles: Vec<Article>,
    pub status: SearchStatus,
}

impl SearchResults {
    pub fn is_failed(&self) -> bool {
        matches!(self.status, SearchStatus::Failed(_))
    }
}

#[derive(Clone)]
pub struct ArticleSearch {
    fetcher: Arc<dyn Fetcher + Send + Sync>,
    normalizer: Normalizer,
    default_term: String,
}

impl ArticleSearch {
    pub fn new(fetcher: Arc<dyn Fetcher + Send + Sync>, default_term: impl Into<String>) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            default_term: default_term.into(),
        }
    }

    pub fn default_term(&self) -> &str {
        &self.default_term
    }

    /// Query the source once and keep only articles that have an image.
    pub async fn search(&self, term: &str) -> SearchResults {
        match self.fetch_articles(term).await {
            Ok(articles) => {
                let articles: Vec<Article> =
                    articles.into_iter().filter(Article::has_image).collect();
                tracing::info!("Search {:?} returned {} articles", term, articles.len());
                SearchResults {
                    term: term.to_string(),
                    articles,
                    status: SearchStatus::Ok,
                }
            }
            Err(e) => {
                tracing::warn!("Search {:?} failed: {}", term, e);
                SearchResults {
                    term: term.to_string(),
                    articles: Vec::new(),
                    status: SearchStatus::Failed(e.to_string()),
                }
            }
        }
    }

    /// Home view: a blank term falls back to the configured default.
    pub async fn home(&self, term: &str) -> SearchResults {
        let term = if term.trim().is_empty() {
            self.default_term.as_str()
        } else {
            term
        };
        self.search(term).await
    }

    /// Search view: a blank query issues no request at all.
    pub async fn search_view(&self, query: &str) -> Option<SearchResults> {
        if query.trim().is_empty() {
            return None;
        }
        Some(self.search(query).await)
    }

    async fn fetch_articles(&self, term: &str) -> Result<Vec<Article>> {
        let body = self.fetcher.fetch(term).await?;
        self.normalizer.normalize(&body)
    }
}
