use std::sync::Arc;

use crate::app::Result;
use crate::domain::Article;
use crate::store::KeyValueStore;

/// Slot holding the JSON array of opened articles.
pub const BOOKMARKS_KEY: &str = "savedArticles";

/// Every article the user has opened, oldest first.
///
/// Entries are unique by `url` and never change once written: opening the
/// same article again leaves the stored copy as it was.
pub struct BookmarkStore<S: KeyValueStore> {
    storage: Arc<S>,
}

impl<S: KeyValueStore> Clone for BookmarkStore<S> {
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
        }
    }
}

impl<S: KeyValueStore> BookmarkStore<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    /// Append `article` unless its URL is already stored.
    ///
    /// Returns whether anything was written. A slot that cannot be read or
    /// parsed is an error and is left untouched.
    pub fn record(&self, article: &Article) -> Result<bool> {
        let mut saved: Vec<Article> = match self.storage.get(BOOKMARKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        if saved.iter().any(|a| a.url == article.url) {
            return Ok(false);
        }

        saved.push(article.clone());
        let json = serde_json::to_string(&saved)?;
        self.storage.set(BOOKMARKS_KEY, &json)?;

        tracing::debug!("Bookmarked {} ({} total)", article.url, saved.len());
        Ok(true)
    }

    /// All bookmarks in insertion order. A missing or unreadable slot reads
    /// as empty.
    pub fn list_all(&self) -> Vec<Article> {
        let raw = match self.storage.get(BOOKMARKS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::debug!("Could not read bookmarks: {}", e);
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!("Ignoring unparsable bookmarks: {}", e);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;
    use crate::app::WartaError;
    use crate::store::{MemoryStore, SqliteStore};

    fn article(url: &str, title: &str) -> Article {
        let mut article = Article::new(title, url);
        article.image_url = format!("{}.jpg", url);
        article
    }

    fn memory_store() -> (Arc<MemoryStore>, BookmarkStore<MemoryStore>) {
        let storage = Arc::new(MemoryStore::new());
        (storage.clone(), BookmarkStore::new(storage))
    }

    #[test]
    fn test_empty_when_slot_missing() {
        let (_, bookmarks) = memory_store();
        assert!(bookmarks.list_all().is_empty());
    }

    #[test]
    fn test_record_appends_in_order() {
        let (_, bookmarks) = memory_store();
        assert!(bookmarks.record(&article("https://e.com/1", "one")).unwrap());
        assert!(bookmarks.record(&article("https://e.com/2", "two")).unwrap());

        let urls: Vec<String> = bookmarks.list_all().into_iter().map(|a| a.url).collect();
        assert_eq!(urls, vec!["https://e.com/1", "https://e.com/2"]);
    }

    #[test]
    fn test_record_is_idempotent() {
        let (_, once) = memory_store();
        let (_, twice) = memory_store();
        let x = article("https://e.com/1", "one");

        once.record(&x).unwrap();
        twice.record(&x).unwrap();
        assert!(!twice.record(&x).unwrap());

        assert_eq!(once.list_all(), twice.list_all());
    }

    #[test]
    fn test_first_write_wins() {
        let (_, bookmarks) = memory_store();
        bookmarks.record(&article("https://e.com/1", "first")).unwrap();
        bookmarks.record(&article("https://e.com/1", "edited")).unwrap();

        let saved = bookmarks.list_all();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].title, "first");
    }

    #[test]
    fn test_urls_stay_unique() {
        let (_, bookmarks) = memory_store();
        let urls = ["a", "b", "a", "c", "b", "a", "d", "c"];
        for url in urls {
            bookmarks.record(&article(url, url)).unwrap();
        }

        let saved: Vec<String> = bookmarks.list_all().into_iter().map(|a| a.url).collect();
        assert_eq!(saved, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_unparsable_slot_reads_empty_and_is_kept() {
        let (storage, bookmarks) = memory_store();
        storage.set(BOOKMARKS_KEY, "{not json").unwrap();
        assert!(bookmarks.list_all().is_empty());

        let result = bookmarks.record(&article("https://e.com/1", "one"));
        assert!(matches!(result, Err(WartaError::Json(_))));
        assert_eq!(
            storage.get(BOOKMARKS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    /// Storage whose reads can be switched to fail.
    struct UnreadableStore {
        inner: MemoryStore,
        fail_reads: AtomicBool,
    }

    impl KeyValueStore for UnreadableStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            if self.fail_reads.load(Ordering::SeqCst) {
                return Err(WartaError::Other("database is locked".into()));
            }
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<()> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn test_failed_read_does_not_overwrite_history() {
        let storage = Arc::new(UnreadableStore {
            inner: MemoryStore::new(),
            fail_reads: AtomicBool::new(false),
        });
        let bookmarks = BookmarkStore::new(storage.clone());
        for n in 1..=3 {
            let url = format!("https://e.com/{}", n);
            bookmarks.record(&article(&url, "old")).unwrap();
        }

        storage.fail_reads.store(true, Ordering::SeqCst);
        assert!(bookmarks.record(&article("https://e.com/new", "new")).is_err());
        assert!(bookmarks.list_all().is_empty());

        storage.fail_reads.store(false, Ordering::SeqCst);
        let urls: Vec<String> = bookmarks.list_all().into_iter().map(|a| a.url).collect();
        assert_eq!(urls, vec!["https://e.com/1", "https://e.com/2", "https://e.com/3"]);
    }

    #[test]
    fn test_stored_shape_matches_upstream_fields() {
        let (storage, bookmarks) = memory_store();
        bookmarks.record(&article("https://e.com/1", "one")).unwrap();

        let raw = storage.get(BOOKMARKS_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["url"], "https://e.com/1");
        assert_eq!(value[0]["urlToImage"], "https://e.com/1.jpg");
    }

    #[test]
    fn test_reads_array_written_by_other_clients() {
        let (storage, bookmarks) = memory_store();
        storage
            .set(
                BOOKMARKS_KEY,
                r#"[{"title":"t","url":"https://e.com/x","urlToImage":"i","source":{"name":"S"}}]"#,
            )
            .unwrap();

        let saved = bookmarks.list_all();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].source_name(), "S");
        assert!(!bookmarks.record(&article("https://e.com/x", "again")).unwrap());
    }

    #[test]
    fn test_sqlite_backed_bookmarks_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("warta.db");

        {
            let bookmarks = BookmarkStore::new(Arc::new(SqliteStore::new(&path).unwrap()));
            bookmarks.record(&article("https://e.com/1", "one")).unwrap();
        }

        let bookmarks = BookmarkStore::new(Arc::new(SqliteStore::new(&path).unwrap()));
        assert_eq!(bookmarks.list_all().len(), 1);
        assert!(!bookmarks.record(&article("https://e.com/1", "one")).unwrap());
    }
}
