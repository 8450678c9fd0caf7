#[cfg(any(test, feature = "test-util"))]
mod memory_store;

use async_trait::async_trait;

use crate::database::Database;
use crate::impls::keywords;

#[cfg(any(test, feature = "test-util"))]
pub use memory_store::MemoryKeywordStore;

/// Durable source of truth for censored keywords.
#[async_trait]
pub trait KeywordStore: Send + Sync {
    /// Ensure the backing table exists. Idempotent.
    async fn initialize(&self) -> anyhow::Result<()>;

    /// All stored words, in persisted order.
    async fn list(&self) -> anyhow::Result<Vec<String>>;

    /// Insert `word` verbatim; a byte-identical duplicate is a no-op.
    async fn add(&self, word: &str) -> anyhow::Result<bool>;

    /// Delete all rows equal to `word` ignoring case.
    async fn remove(&self, word: &str) -> anyhow::Result<u64>;
}

#[async_trait]
impl KeywordStore for Database {
    async fn initialize(&self) -> anyhow::Result<()> {
        keywords::ensure_schema(self).await
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        keywords::list_keywords(self).await
    }

    async fn add(&self, word: &str) -> anyhow::Result<bool> {
        keywords::add_keyword(self, word).await
    }

    async fn remove(&self, word: &str) -> anyhow::Result<u64> {
        keywords::remove_keyword(self, word).await
    }
}
