pub mod bookmarks;
pub mod memory;
pub mod sqlite;

use crate::app::Result;

pub use bookmarks::{BookmarkStore, BOOKMARKS_KEY};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Named text slots on the local device.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
