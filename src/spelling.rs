//! Noisy-channel spelling correction.
//!
//! This module ranks single-edit neighbours of a misspelled word by
//! `log P(w) + log P(x|w)`: a word frequency prior combined with smoothed
//! edit-count tables for deletions, insertions and substitutions, plus a
//! flat probability for transpositions.

pub mod candidates;
pub mod config;
pub mod corrector;
pub mod evaluate;
pub mod frequency;
pub mod loader;
pub mod scorer;
pub mod tables;

// Re-export commonly used types
pub use candidates::{Candidate, CandidateGenerator, Edit};
pub use config::{ConfigFile, CorrectorConfig};
pub use corrector::{Correction, Corrector};
pub use evaluate::{CaseOutcome, Evaluation, TestCase};
pub use frequency::FrequencyStore;
pub use loader::DataFiles;
pub use scorer::{ScoredCandidate, Scorer};
pub use tables::{CountTable, EditTables, RawTables};
