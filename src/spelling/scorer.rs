//! Noisy-channel scoring: `log P(w) + log P(x|w)` over known candidates.

use std::cmp::Ordering;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::spelling::candidates::{Candidate, Edit};
use crate::spelling::frequency::FrequencyStore;
use crate::spelling::tables::EditTables;

/// A vocabulary word with its combined log score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// The candidate word.
    pub word: String,
    /// The edit that gave the best score for this word.
    pub edit: Edit,
    /// `ln P(w)`.
    pub log_prior: f64,
    /// `ln P(x|w)`.
    pub log_channel: f64,
    /// `log_prior + log_channel`.
    pub score: f64,
}

impl ScoredCandidate {
    /// Ranking order: higher score first, then the lexicographically
    /// smaller word.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| self.word.cmp(&other.word))
    }
}

/// Scores candidates against a vocabulary and a set of edit tables.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'a> {
    vocabulary: &'a FrequencyStore,
    tables: &'a EditTables,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over borrowed, read-only model data.
    pub fn new(vocabulary: &'a FrequencyStore, tables: &'a EditTables) -> Self {
        Scorer { vocabulary, tables }
    }

    /// Score one candidate, or `None` when it is not a known word.
    pub fn score(&self, candidate: &Candidate) -> Option<ScoredCandidate> {
        let log_prior = self.vocabulary.log_prior(&candidate.word)?;
        let log_channel = self.tables.log_channel_probability(&candidate.edit);

        Some(ScoredCandidate {
            word: candidate.word.clone(),
            edit: candidate.edit,
            log_prior,
            log_channel,
            score: log_prior + log_channel,
        })
    }

    /// Known candidates, one per word (its best derivation), best first.
    pub fn rank<'c, I>(&self, candidates: I) -> Vec<ScoredCandidate>
    where
        I: IntoIterator<Item = &'c Candidate>,
    {
        let mut best: AHashMap<&str, ScoredCandidate> = AHashMap::new();

        for candidate in candidates {
            let Some(scored) = self.score(candidate) else {
                continue;
            };
            let improves = best
                .get(candidate.word.as_str())
                .is_none_or(|current| scored.score > current.score);
            if improves {
                best.insert(candidate.word.as_str(), scored);
            }
        }

        let mut ranked: Vec<ScoredCandidate> = best.into_values().collect();
        ranked.sort_by(ScoredCandidate::rank_cmp);
        ranked
    }

    /// The single best known candidate.
    pub fn best<'c, I>(&self, candidates: I) -> Option<ScoredCandidate>
    where
        I: IntoIterator<Item = &'c Candidate>,
    {
        self.rank(candidates).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spelling::tables::RawTables;

    fn model() -> (FrequencyStore, EditTables) {
        let vocabulary: FrequencyStore = vec![("cat", 50), ("cot", 50), ("coat", 10)]
            .into_iter()
            .collect();
        let raw = RawTables {
            unigrams: vec![("a".to_string(), 10), ("o".to_string(), 10)]
                .into_iter()
                .collect(),
            bigrams: vec![("oa".to_string(), 5)].into_iter().collect(),
            ..Default::default()
        };
        let tables = EditTables::new(raw, &vocabulary).unwrap();
        (vocabulary, tables)
    }

    fn sub(word: &str, original: char, typed: char) -> Candidate {
        Candidate {
            word: word.to_string(),
            edit: Edit::Substitution { original, typed },
        }
    }

    #[test]
    fn test_unknown_words_are_filtered() {
        let (vocabulary, tables) = model();
        let scorer = Scorer::new(&vocabulary, &tables);

        assert!(scorer.score(&sub("cut", 'u', 'i')).is_none());
        assert!(scorer.best(&[sub("cut", 'u', 'i')]).is_none());
    }

    #[test]
    fn test_score_is_prior_plus_channel() {
        let (vocabulary, tables) = model();
        let scorer = Scorer::new(&vocabulary, &tables);

        let scored = scorer.score(&sub("cat", 'a', 'i')).unwrap();
        let prior = (50.0f64 / 110.0).ln();
        let channel = (1.0f64 / 12.0).ln();
        assert!((scored.log_prior - prior).abs() < 1e-12);
        assert!((scored.log_channel - channel).abs() < 1e-12);
        assert!((scored.score - (prior + channel)).abs() < 1e-12);
    }

    #[test]
    fn test_ties_break_lexicographically() {
        let (vocabulary, tables) = model();
        let scorer = Scorer::new(&vocabulary, &tables);

        // "cat" and "cot" have equal priors and equal smoothed channels.
        let candidates = vec![sub("cot", 'o', 'i'), sub("cat", 'a', 'i')];
        let ranked = scorer.rank(&candidates);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(ranked[0].word, "cat");
        assert_eq!(scorer.best(candidates.iter().rev()).unwrap().word, "cat");
    }

    #[test]
    fn test_best_derivation_per_word() {
        let (vocabulary, tables) = model();
        let scorer = Scorer::new(&vocabulary, &tables);

        let via_table = Candidate {
            word: "coat".to_string(),
            edit: Edit::Deletion {
                prefix: 'o',
                deleted: 'a',
            },
        };
        let via_swap = Candidate {
            word: "coat".to_string(),
            edit: Edit::Transposition {
                first: 'o',
                second: 'a',
            },
        };
        let ranked = scorer.rank(&[via_swap, via_table.clone()]);

        assert_eq!(ranked.len(), 1);
        // 1/6 beats 1/110
        assert_eq!(ranked[0].edit, via_table.edit);
    }
}
