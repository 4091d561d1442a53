//! Edit-count tables and the smoothed channel probability P(x|w).
//!
//! Every table is an explicit zero-default mapping: a key that never occurred
//! in the training data counts 0. All three table-backed edit kinds are
//! smoothed the same way, with add-1 on the numerator and the distinct key
//! count of the denominator's table (V) added below:
//!
//! ```text
//! P = (count(numerator) + 1) / (count(denominator) + V)
//! ```
//!
//! Transpositions have no table and use `1 / N`, N being the vocabulary total.

use std::hash::Hash;

use ahash::AHashMap;

use crate::error::{Result, SpellfixError};
use crate::spelling::candidates::Edit;
use crate::spelling::frequency::FrequencyStore;

/// A read-only count table returning 0 for absent keys.
#[derive(Debug, Clone)]
pub struct CountTable<K> {
    counts: AHashMap<K, u64>,
}

impl<K: Eq + Hash> CountTable<K> {
    /// Create a new empty table.
    pub fn new() -> Self {
        CountTable {
            counts: AHashMap::new(),
        }
    }

    /// Add `count` to a key. Repeated keys accumulate.
    pub fn insert(&mut self, key: K, count: u64) {
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// The count of a key, 0 when absent.
    pub fn count(&self, key: &K) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys (V).
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no keys.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Add-1 smoothed ratio of a numerator key in this table over a
    /// denominator key in `context`.
    pub fn smoothed<D: Eq + Hash>(
        &self,
        numerator: &K,
        context: &CountTable<D>,
        denominator: &D,
    ) -> f64 {
        let top = self.count(numerator) + 1;
        let bottom = context.count(denominator) + context.distinct() as u64;
        top as f64 / bottom as f64
    }
}

impl<K: Eq + Hash> Default for CountTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> FromIterator<(K, u64)> for CountTable<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for (key, count) in iter {
            table.insert(key, count);
        }
        table
    }
}

/// Character-context table keyed by one- or two-character strings.
pub type ContextTable = CountTable<String>;

/// Edit table keyed by a character pair.
pub type PairTable = CountTable<(char, char)>;

/// The five count tables of the channel model plus the vocabulary total
/// used for transpositions.
#[derive(Debug, Clone)]
pub struct EditTables {
    unigrams: ContextTable,
    bigrams: ContextTable,
    deletions: PairTable,
    additions: PairTable,
    substitutions: PairTable,
    vocabulary_total: u64,
}

/// Builder-style bundle of the raw tables handed to [`EditTables::new`].
#[derive(Debug, Clone, Default)]
pub struct RawTables {
    /// Single-character counts.
    pub unigrams: ContextTable,
    /// Two-character counts.
    pub bigrams: ContextTable,
    /// (prefix, deleted) counts.
    pub deletions: PairTable,
    /// (prefix, added) counts.
    pub additions: PairTable,
    /// (original, substituted) counts.
    pub substitutions: PairTable,
}

impl EditTables {
    /// Bundle the tables with the vocabulary whose total backs transpositions.
    ///
    /// The context tables and the vocabulary must be non-empty, otherwise a
    /// smoothed probability could divide by zero.
    pub fn new(raw: RawTables, vocabulary: &FrequencyStore) -> Result<Self> {
        if raw.unigrams.is_empty() {
            return Err(SpellfixError::invalid_config("unigram table is empty"));
        }
        if raw.bigrams.is_empty() {
            return Err(SpellfixError::invalid_config("bigram table is empty"));
        }
        if vocabulary.total() == 0 {
            return Err(SpellfixError::invalid_config("vocabulary is empty"));
        }

        Ok(EditTables {
            unigrams: raw.unigrams,
            bigrams: raw.bigrams,
            deletions: raw.deletions,
            additions: raw.additions,
            substitutions: raw.substitutions,
            vocabulary_total: vocabulary.total(),
        })
    }

    /// P(x|w) for a single edit.
    pub fn channel_probability(&self, edit: &Edit) -> f64 {
        match *edit {
            Edit::Deletion { prefix, deleted } => {
                let bigram: String = [prefix, deleted].iter().collect();
                self.deletions
                    .smoothed(&(prefix, deleted), &self.bigrams, &bigram)
            }
            Edit::Insertion { prefix, inserted } => {
                self.additions
                    .smoothed(&(prefix, inserted), &self.unigrams, &prefix.to_string())
            }
            Edit::Substitution { original, typed } => self.substitutions.smoothed(
                &(original, typed),
                &self.unigrams,
                &original.to_string(),
            ),
            Edit::Transposition { .. } => 1.0 / self.vocabulary_total as f64,
        }
    }

    /// Natural log of [`channel_probability`](Self::channel_probability).
    pub fn log_channel_probability(&self, edit: &Edit) -> f64 {
        self.channel_probability(edit).ln()
    }

    /// The vocabulary total (N) the tables were built against.
    pub fn vocabulary_total(&self) -> u64 {
        self.vocabulary_total
    }

    /// Single-character counts.
    pub fn unigrams(&self) -> &ContextTable {
        &self.unigrams
    }

    /// Two-character counts.
    pub fn bigrams(&self) -> &ContextTable {
        &self.bigrams
    }

    /// (prefix, deleted) counts.
    pub fn deletions(&self) -> &PairTable {
        &self.deletions
    }

    /// (prefix, added) counts.
    pub fn additions(&self) -> &PairTable {
        &self.additions
    }

    /// (original, substituted) counts.
    pub fn substitutions(&self) -> &PairTable {
        &self.substitutions
    }
}
