use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::debug;

use crate::cache::KeywordCache;
use crate::store::KeywordStore;

/// Result of [`KeywordService::add`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddOutcome {
    /// A new row was written to the store.
    pub persisted: bool,
    /// The lowercase form was appended to the cache.
    pub cached: bool,
}

/// Result of [`KeywordService::remove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemoveOutcome {
    pub deleted_rows: u64,
    pub evicted: usize,
}

/// Keeps the keyword cache in step with the durable store.
///
/// Store writes and the matching cache update run under one mutation guard, so
/// concurrent add/remove commands cannot interleave between the two steps.
/// Reads (`list`, filter matching through [`KeywordService::cache`]) never
/// take the guard.
#[derive(Clone, Debug)]
pub struct KeywordService<S> {
    store: S,
    cache: KeywordCache,
    mutation: Arc<Mutex<()>>,
}

impl<S: KeywordStore> KeywordService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: KeywordCache::new(),
            mutation: Arc::new(Mutex::new(())),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &KeywordCache {
        &self.cache
    }

    /// Ensure the backing table exists.
    pub async fn initialize(&self) -> anyhow::Result<()> {
        self.store.initialize().await
    }

    /// Ensure the table exists, then rebuild the cache from it. Run on every startup.
    pub async fn load(&self) -> anyhow::Result<usize> {
        self.initialize().await?;
        self.reload().await
    }

    /// Rebuild the cache from the store. Returns the number of cached keywords.
    pub async fn reload(&self) -> anyhow::Result<usize> {
        let _guard = self.mutation.lock().await;
        let words = self.store.list().await?;
        Ok(self.cache.replace_all(words).await)
    }

    /// Persist `word` verbatim, then append its lowercase form to the cache.
    ///
    /// The cache is untouched when the store call fails.
    pub async fn add(&self, word: &str) -> anyhow::Result<AddOutcome> {
        let _guard = self.mutation.lock().await;
        let persisted = self.store.add(word).await?;
        let cached = self.cache.add_local(word).await;
        debug!(word, persisted, cached, "keyword add applied");
        Ok(AddOutcome { persisted, cached })
    }

    /// Delete `word` from the store ignoring case, then evict it from the cache.
    pub async fn remove(&self, word: &str) -> anyhow::Result<RemoveOutcome> {
        let _guard = self.mutation.lock().await;
        let deleted_rows = self.store.remove(word).await?;
        let evicted = self.cache.remove_local(word).await;
        debug!(word, deleted_rows, evicted, "keyword remove applied");
        Ok(RemoveOutcome {
            deleted_rows,
            evicted,
        })
    }

    /// Current cached keywords, in cache order.
    pub async fn list(&self) -> Vec<String> {
        self.cache.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::{AddOutcome, KeywordService};
    use crate::store::{KeywordStore, MemoryKeywordStore};

    #[tokio::test]
    async fn reload_rebuilds_cache_from_store() {
        let store = MemoryKeywordStore::with_words(["Spam", "Eggs"]).await;
        let service = KeywordService::new(store);

        service.initialize().await.unwrap();
        assert_eq!(service.reload().await.unwrap(), 2);
        assert_eq!(service.list().await, vec!["spam", "eggs"]);
    }

    #[tokio::test]
    async fn load_initializes_before_reading() {
        let store = MemoryKeywordStore::with_words(["Cat"]).await;
        let service = KeywordService::new(store.clone());

        assert_eq!(service.load().await.unwrap(), 1);
        assert_eq!(service.list().await, vec!["cat"]);

        store.set_unavailable(true);
        assert!(service.load().await.is_err());
        assert_eq!(service.list().await, vec!["cat"]);
    }

    #[tokio::test]
    async fn duplicate_adds_are_cached_once() {
        let service = KeywordService::new(MemoryKeywordStore::new());

        let first = service.add("foo").await.unwrap();
        let second = service.add("foo").await.unwrap();
        let third = service.add("FOO").await.unwrap();

        assert_eq!(
            first,
            AddOutcome {
                persisted: true,
                cached: true
            }
        );
        assert_eq!(
            second,
            AddOutcome {
                persisted: false,
                cached: false
            }
        );
        assert_eq!(
            third,
            AddOutcome {
                persisted: true,
                cached: false
            }
        );

        assert_eq!(service.list().await, vec!["foo"]);
        assert_eq!(service.store().list().await.unwrap(), vec!["foo", "FOO"]);
    }

    #[tokio::test]
    async fn add_then_remove_clears_store_and_cache() {
        let service = KeywordService::new(MemoryKeywordStore::new());
        service.add("Foo").await.unwrap();
        service.add("foo").await.unwrap();

        let outcome = service.remove("FOO").await.unwrap();

        assert_eq!(outcome.deleted_rows, 2);
        assert_eq!(outcome.evicted, 1);
        assert!(service.list().await.is_empty());
        assert!(service.store().list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn removing_unknown_word_is_a_no_op() {
        let service = KeywordService::new(MemoryKeywordStore::new());
        service.add("keep").await.unwrap();

        let outcome = service.remove("never-added").await.unwrap();

        assert_eq!(outcome.deleted_rows, 0);
        assert_eq!(outcome.evicted, 0);
        assert_eq!(service.list().await, vec!["keep"]);
    }

    #[tokio::test]
    async fn store_failure_leaves_cache_untouched() {
        let store = MemoryKeywordStore::new();
        let service = KeywordService::new(store.clone());
        service.add("kept").await.unwrap();

        store.set_unavailable(true);
        assert!(service.add("lost").await.is_err());
        assert!(service.remove("kept").await.is_err());

        assert_eq!(service.list().await, vec!["kept"]);
    }

    #[tokio::test]
    async fn concurrent_adds_cache_each_word_once() {
        let service = KeywordService::new(MemoryKeywordStore::new());

        let mut handles = Vec::new();
        for casing in ["word", "Word", "WORD", "word"] {
            let service = service.clone();
            handles.push(tokio::spawn(async move { service.add(casing).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(service.list().await, vec!["word"]);
        assert_eq!(service.store().list().await.unwrap().len(), 3);
    }
}
