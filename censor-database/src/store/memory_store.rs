use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::KeywordStore;
use crate::model::keyword::Keyword;

#[derive(Debug, Default)]
struct MemoryRows {
    next_id: i32,
    rows: Vec<Keyword>,
}

/// Process-local [`KeywordStore`] with the same uniqueness and deletion rules
/// as the PostgreSQL table.
#[derive(Clone, Debug, Default)]
pub struct MemoryKeywordStore {
    inner: Arc<Mutex<MemoryRows>>,
    unavailable: Arc<AtomicBool>,
}

impl MemoryKeywordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate the store, applying the usual insert rules.
    pub async fn with_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let store = Self::new();
        {
            let mut inner = store.inner.lock().await;
            for word in words {
                insert_row(&mut inner, word.as_ref());
            }
        }
        store
    }

    /// Make every subsequent call fail, simulating a lost connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn rows(&self) -> Vec<Keyword> {
        self.inner.lock().await.rows.clone()
    }

    fn ensure_available(&self) -> anyhow::Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            anyhow::bail!("keyword store unavailable");
        }
        Ok(())
    }
}

fn insert_row(inner: &mut MemoryRows, word: &str) -> bool {
    if inner.rows.iter().any(|row| row.word == word) {
        return false;
    }

    inner.next_id += 1;
    let id = inner.next_id;
    inner.rows.push(Keyword {
        id,
        word: word.to_owned(),
    });
    true
}

#[async_trait]
impl KeywordStore for MemoryKeywordStore {
    async fn initialize(&self) -> anyhow::Result<()> {
        self.ensure_available()
    }

    async fn list(&self) -> anyhow::Result<Vec<String>> {
        self.ensure_available()?;
        let inner = self.inner.lock().await;
        Ok(inner.rows.iter().map(|row| row.word.clone()).collect())
    }

    async fn add(&self, word: &str) -> anyhow::Result<bool> {
        self.ensure_available()?;
        let mut inner = self.inner.lock().await;
        Ok(insert_row(&mut inner, word))
    }

    async fn remove(&self, word: &str) -> anyhow::Result<u64> {
        self.ensure_available()?;
        let lower = word.to_lowercase();
        let mut inner = self.inner.lock().await;
        let before = inner.rows.len();
        inner.rows.retain(|row| row.word.to_lowercase() != lower);
        Ok((before - inner.rows.len()) as u64)
    }
}
