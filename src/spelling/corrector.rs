//! Main spelling corrector that ties the noisy-channel pieces together.
//!
//! A word goes through two states only. If it is already in the vocabulary
//! it is returned as is. Otherwise its single-edit neighbourhood is
//! generated, filtered to known words, scored and the best word returned;
//! when no neighbour is known the input is echoed back.

use std::path::Path;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::candidates::CandidateGenerator;
use crate::spelling::config::CorrectorConfig;
use crate::spelling::frequency::FrequencyStore;
use crate::spelling::loader::DataFiles;
use crate::spelling::scorer::{ScoredCandidate, Scorer};
use crate::spelling::tables::EditTables;

/// Outcome of correcting a single word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum Correction {
    /// The word is in the vocabulary and was left alone.
    Known(String),
    /// A known single-edit neighbour was chosen.
    Corrected {
        /// The lowercased input.
        original: String,
        /// The winning candidate.
        best: ScoredCandidate,
    },
    /// No single-edit neighbour is a known word; the input is echoed.
    Unchanged(String),
}

impl Correction {
    /// The word this outcome resolves to.
    pub fn word(&self) -> &str {
        match self {
            Correction::Known(word) | Correction::Unchanged(word) => word,
            Correction::Corrected { best, .. } => &best.word,
        }
    }

    /// Whether a different word was chosen.
    pub fn is_corrected(&self) -> bool {
        matches!(self, Correction::Corrected { .. })
    }
}

/// Noisy-channel spelling corrector over immutable, preloaded tables.
///
/// All state is read-only after construction, so one corrector can serve
/// any number of threads through `&self`.
#[derive(Debug, Clone)]
pub struct Corrector {
    vocabulary: FrequencyStore,
    tables: EditTables,
    generator: CandidateGenerator,
    config: CorrectorConfig,
}

impl Corrector {
    /// Create a corrector with the default English alphabet.
    pub fn new(vocabulary: FrequencyStore, tables: EditTables) -> Result<Self> {
        Self::with_config(vocabulary, tables, CorrectorConfig::default())
    }

    /// Create a corrector with custom configuration.
    ///
    /// `tables` must have been built against `vocabulary`, so that the prior
    /// and the transposition probability share the same N.
    pub fn with_config(
        vocabulary: FrequencyStore,
        tables: EditTables,
        config: CorrectorConfig,
    ) -> Result<Self> {
        config.validate()?;
        if tables.vocabulary_total() != vocabulary.total() {
            return Err(SpellfixError::invalid_config(format!(
                "edit tables were built for a vocabulary of {} words, got {}",
                tables.vocabulary_total(),
                vocabulary.total()
            )));
        }
        let generator = CandidateGenerator::new(&config.alphabet, config.boundary);

        Ok(Corrector {
            vocabulary,
            tables,
            generator,
            config,
        })
    }

    /// Load all tables from the given files.
    pub fn from_files(files: &DataFiles, config: CorrectorConfig) -> Result<Self> {
        let (vocabulary, tables) = files.load()?;
        Self::with_config(vocabulary, tables, config)
    }

    /// Load all tables from the default file names inside `dir`.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::from_files(&DataFiles::in_dir(dir), CorrectorConfig::default())
    }

    /// Correct a single word.
    ///
    /// Never fails: known words, words without a known neighbour and words
    /// that cannot be scored (empty, or containing letters outside the
    /// alphabet) all come back lowercased and otherwise unchanged.
    pub fn correct(&self, word: &str) -> String {
        match self.analyze(word) {
            Ok(correction) => correction.word().to_string(),
            Err(e) => {
                debug!("Not correcting {word:?}: {e}");
                word.to_lowercase()
            }
        }
    }

    /// Correct a single word and report how the result was reached.
    ///
    /// Vocabulary words are recognised before the alphabet is checked, so a
    /// known word such as `o'clock` is `Known` even if `'` is not a letter.
    pub fn analyze(&self, word: &str) -> Result<Correction> {
        let word = lowercase(word)?;

        if self.vocabulary.contains(&word) {
            return Ok(Correction::Known(word));
        }
        self.check_alphabet(&word)?;

        let candidates = self.generator.generate(&word);
        let scorer = Scorer::new(&self.vocabulary, &self.tables);

        match scorer.best(&candidates) {
            Some(best) => {
                debug!(
                    "{word:?} -> {:?} via {} (score {:.4})",
                    best.word, best.edit, best.score
                );
                Ok(Correction::Corrected {
                    original: word,
                    best,
                })
            }
            None => {
                debug!(
                    "{word:?}: none of {} candidates is a known word",
                    candidates.len()
                );
                Ok(Correction::Unchanged(word))
            }
        }
    }

    /// Up to `limit` known single-edit neighbours, best first.
    ///
    /// Known words still get their neighbours ranked; the word itself is
    /// never among them.
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<ScoredCandidate>> {
        let word = lowercase(word)?;
        if !self.vocabulary.contains(&word) {
            self.check_alphabet(&word)?;
        }
        let candidates = self.generator.generate(&word);
        let scorer = Scorer::new(&self.vocabulary, &self.tables);

        let mut ranked = scorer.rank(&candidates);
        ranked.truncate(limit);
        Ok(ranked)
    }

    /// Correct many words in parallel.
    pub fn correct_batch<S: AsRef<str> + Sync>(&self, words: &[S]) -> Vec<String> {
        words
            .par_iter()
            .map(|word| self.correct(word.as_ref()))
            .collect()
    }

    /// The vocabulary backing the prior.
    pub fn vocabulary(&self) -> &FrequencyStore {
        &self.vocabulary
    }

    /// The edit-count tables backing the channel model.
    pub fn tables(&self) -> &EditTables {
        &self.tables
    }

    /// The active configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    fn check_alphabet(&self, word: &str) -> Result<()> {
        match word
            .chars()
            .find(|c| !self.generator.alphabet().contains(c))
        {
            Some(c) => Err(SpellfixError::invalid_input(format!(
                "{word:?} contains {c:?}, which is not in the alphabet"
            ))),
            None => Ok(()),
        }
    }
}

/// Trim and lowercase `word`, rejecting empty input.
fn lowercase(word: &str) -> Result<String> {
    let word = word.trim().to_lowercase();

    if word.is_empty() {
        return Err(SpellfixError::invalid_input("empty word"));
    }
    Ok(word)
}
