//! Single-edit candidate generation.
//!
//! Every candidate is a string one edit away from the observed word, tagged
//! with the typing error that would turn the candidate back into that word.
//! The tag names the count table the scorer has to consult.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default alphabet for generated letters.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Preceding-character marker used at the start of a word.
pub const DEFAULT_BOUNDARY: char = '#';

/// The typing error that produced the observed word from an intended word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Edit {
    /// `deleted` was dropped after `prefix`.
    Deletion { prefix: char, deleted: char },
    /// `inserted` was typed after `prefix`.
    Insertion { prefix: char, inserted: char },
    /// The intended `original` was typed as `typed`.
    Substitution { original: char, typed: char },
    /// The intended adjacent pair `first second` was typed as `second first`.
    Transposition { first: char, second: char },
}

impl Edit {
    /// Short name of the edit kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Edit::Deletion { .. } => "deletion",
            Edit::Insertion { .. } => "insertion",
            Edit::Substitution { .. } => "substitution",
            Edit::Transposition { .. } => "transposition",
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Deletion { prefix, deleted } => write!(f, "del[{prefix},{deleted}]"),
            Edit::Insertion { prefix, inserted } => write!(f, "ins[{prefix},{inserted}]"),
            Edit::Substitution { original, typed } => write!(f, "sub[{original},{typed}]"),
            Edit::Transposition { first, second } => write!(f, "trans[{first}{second}]"),
        }
    }
}

/// A possible intended word plus the edit that explains the observation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// The candidate word.
    pub word: String,
    /// The typing error relating it to the observed word.
    pub edit: Edit,
}

impl Candidate {
    fn new(chars: &[char], edit: Edit) -> Self {
        Candidate {
            word: chars.iter().collect(),
            edit,
        }
    }
}

/// Enumerates the complete distance-1 neighbourhood of a word.
#[derive(Debug, Clone)]
pub struct CandidateGenerator {
    alphabet: Vec<char>,
    boundary: char,
}

impl CandidateGenerator {
    /// Create a generator over the given letters and start-of-word marker.
    pub fn new(alphabet: &str, boundary: char) -> Self {
        CandidateGenerator {
            alphabet: alphabet.chars().collect(),
            boundary,
        }
    }

    /// The letters tried for insertions and substitutions.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// The start-of-word marker.
    pub fn boundary(&self) -> char {
        self.boundary
    }

    /// Generate every candidate exactly one edit away from `word`.
    ///
    /// `word` is expected lowercase. The same string may appear more than
    /// once with different edits; identical pairs are collapsed.
    pub fn generate(&self, word: &str) -> BTreeSet<Candidate> {
        let chars: Vec<char> = word.chars().collect();
        let mut candidates = BTreeSet::new();

        self.removals(&chars, &mut candidates);
        self.additions(&chars, &mut candidates);
        self.replacements(&chars, &mut candidates);
        self.swaps(&chars, &mut candidates);

        candidates
    }

    fn preceding(&self, chars: &[char], i: usize) -> char {
        if i == 0 { self.boundary } else { chars[i - 1] }
    }

    /// Removing a letter undoes an insertion error.
    fn removals(&self, chars: &[char], out: &mut BTreeSet<Candidate>) {
        for i in 0..chars.len() {
            let mut buf = chars.to_vec();
            let inserted = buf.remove(i);
            let edit = Edit::Insertion {
                prefix: self.preceding(chars, i),
                inserted,
            };
            out.insert(Candidate::new(&buf, edit));
        }
    }

    /// Adding a letter undoes a deletion error.
    fn additions(&self, chars: &[char], out: &mut BTreeSet<Candidate>) {
        for i in 0..=chars.len() {
            let prefix = self.preceding(chars, i);
            for &letter in &self.alphabet {
                let mut buf = chars.to_vec();
                buf.insert(i, letter);
                let edit = Edit::Deletion {
                    prefix,
                    deleted: letter,
                };
                out.insert(Candidate::new(&buf, edit));
            }
        }
    }

    fn replacements(&self, chars: &[char], out: &mut BTreeSet<Candidate>) {
        for (i, &typed) in chars.iter().enumerate() {
            for &letter in self.alphabet.iter().filter(|&&c| c != typed) {
                let mut buf = chars.to_vec();
                buf[i] = letter;
                let edit = Edit::Substitution {
                    original: letter,
                    typed,
                };
                out.insert(Candidate::new(&buf, edit));
            }
        }
    }

    fn swaps(&self, chars: &[char], out: &mut BTreeSet<Candidate>) {
        for i in 0..chars.len().saturating_sub(1) {
            if chars[i] == chars[i + 1] {
                continue;
            }
            let mut buf = chars.to_vec();
            buf.swap(i, i + 1);
            let edit = Edit::Transposition {
                first: buf[i],
                second: buf[i + 1],
            };
            out.insert(Candidate::new(&buf, edit));
        }
    }
}

impl Default for CandidateGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_ALPHABET, DEFAULT_BOUNDARY)
    }
}
