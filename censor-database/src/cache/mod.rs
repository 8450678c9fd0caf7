use std::sync::Arc;

use tokio::sync::RwLock;

/// In-memory, lowercase working copy of the keyword list.
///
/// Cloning the handle shares the underlying list.
#[derive(Clone, Debug, Default)]
pub struct KeywordCache {
    words: Arc<RwLock<Vec<String>>>,
}

impl KeywordCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with the lowercase form of `words`.
    ///
    /// Entries that fold to the same lowercase text are kept once, at the
    /// position of their first occurrence. Empty entries are skipped.
    pub async fn replace_all<I, W>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut rebuilt: Vec<String> = Vec::new();
        for word in words {
            let lower = word.as_ref().to_lowercase();
            if lower.is_empty() || rebuilt.contains(&lower) {
                continue;
            }
            rebuilt.push(lower);
        }

        let count = rebuilt.len();
        *self.words.write().await = rebuilt;
        count
    }

    pub async fn contains_lowercase(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words.read().await.contains(&lower)
    }

    /// Append the lowercase form of `word` unless it is already present.
    /// Returns `true` if the list changed.
    pub async fn add_local(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        if lower.is_empty() {
            return false;
        }

        let mut words = self.words.write().await;
        if words.contains(&lower) {
            return false;
        }
        words.push(lower);
        true
    }

    /// Drop every entry equal to the lowercase form of `word`.
    /// Returns the number of removed entries.
    pub async fn remove_local(&self, word: &str) -> usize {
        let lower = word.to_lowercase();
        let mut words = self.words.write().await;
        let before = words.len();
        words.retain(|entry| *entry != lower);
        before - words.len()
    }

    pub async fn snapshot(&self) -> Vec<String> {
        self.words.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.words.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.words.read().await.is_empty()
    }

    /// Return the first cached keyword (in list order) contained in `content`,
    /// ignoring case. Plain substring containment: "cat" matches "category".
    pub async fn first_match(&self, content: &str) -> Option<String> {
        let content_lower = content.to_lowercase();
        self.words
            .read()
            .await
            .iter()
            .find(|word| content_lower.contains(word.as_str()))
            .cloned()
    }
}
