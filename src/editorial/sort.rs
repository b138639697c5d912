use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::domain::Article;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

impl SortOrder {
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::NewestFirst => SortOrder::OldestFirst,
            SortOrder::OldestFirst => SortOrder::NewestFirst,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::NewestFirst => "Newest",
            SortOrder::OldestFirst => "Oldest",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "newest" | "newest-first" | "terbaru" => Ok(SortOrder::NewestFirst),
            "oldest" | "oldest-first" | "terlama" => Ok(SortOrder::OldestFirst),
            _ => Err(format!("Unknown sort order: {} (use newest or oldest)", s)),
        }
    }
}

/// Sort key for an article. Timestamps that do not parse count as the
/// oldest possible instant.
fn sort_key(article: &Article) -> DateTime<Utc> {
    article
        .published_instant()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Stable sort by `publishedAt`.
pub fn sort_by_published_at(articles: &mut [Article], order: SortOrder) {
    match order {
        SortOrder::NewestFirst => articles.sort_by(|a, b| sort_key(b).cmp(&sort_key(a))),
        SortOrder::OldestFirst => articles.sort_by_key(sort_key),
    }
}
