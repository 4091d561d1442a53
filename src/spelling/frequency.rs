//! Word frequency store backing the prior probability P(w).

use ahash::AHashMap;

use crate::error::{Result, SpellfixError};

/// Unigram word counts and the total corpus size they sum to.
///
/// Keys are stored lowercased; every lookup lowercases its argument, so the
/// store is case-insensitive by construction.
#[derive(Debug, Clone, Default)]
pub struct FrequencyStore {
    /// Words and their counts
    words: AHashMap<String, u64>,
    /// Sum of all counts (N)
    total: u64,
}

impl FrequencyStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        FrequencyStore {
            words: AHashMap::new(),
            total: 0,
        }
    }

    /// Add `count` occurrences of a word.
    ///
    /// Repeated words accumulate. A zero count adds nothing and does not
    /// make the word known. Counts saturate at `u64::MAX`; use
    /// [`try_insert`](Self::try_insert) to reject overflow instead.
    pub fn insert(&mut self, word: &str, count: u64) {
        if count == 0 {
            return;
        }

        let entry = self.words.entry(word.to_lowercase()).or_insert(0);
        *entry = entry.saturating_add(count);
        self.total = self.total.saturating_add(count);
    }

    /// Add `count` occurrences of a word, failing if N would overflow.
    ///
    /// The store is left untouched on error.
    pub fn try_insert(&mut self, word: &str, count: u64) -> Result<()> {
        if count == 0 {
            return Ok(());
        }

        let total = self.total.checked_add(count).ok_or_else(|| {
            SpellfixError::parse(format!("total count overflows u64 at {word:?}"))
        })?;
        // A single word's count never exceeds N.
        *self.words.entry(word.to_lowercase()).or_insert(0) += count;
        self.total = total;
        Ok(())
    }

    /// Check if a word is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(&word.to_lowercase())
    }

    /// Get the count of a word, 0 when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.words.get(&word.to_lowercase()).copied().unwrap_or(0)
    }

    /// Total count of all words (N).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the store holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Natural log of `count(word) / N`, or `None` for unknown words.
    pub fn log_prior(&self, word: &str) -> Option<f64> {
        let count = self.words.get(&word.to_lowercase())?;
        Some((*count as f64 / self.total as f64).ln())
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.words.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl<S: AsRef<str>> FromIterator<(S, u64)> for FrequencyStore {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut store = FrequencyStore::new();
        for (word, count) in iter {
            store.insert(word.as_ref(), count);
        }
        store
    }
}
