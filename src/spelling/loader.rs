//! Loading the vocabulary and count tables from disk.
//!
//! The vocabulary is a whitespace separated `word count` list. The count
//! tables are CSV files with a header row:
//!
//! ```text
//! unigrams.csv       unigram,count
//! bigrams.csv        bigram,count
//! substitutions.csv  original,substituted,count
//! deletions.csv      prefix,deleted,count
//! additions.csv      prefix,added,count
//! ```
//!
//! Any missing file or malformed row fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};
use crate::spelling::frequency::FrequencyStore;
use crate::spelling::tables::{ContextTable, EditTables, PairTable, RawTables};

/// Paths of the six files a corrector is built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataFiles {
    /// Word frequency list.
    pub vocabulary: PathBuf,
    /// Character unigram counts.
    pub unigrams: PathBuf,
    /// Character bigram counts.
    pub bigrams: PathBuf,
    /// Substitution counts.
    pub substitutions: PathBuf,
    /// Deletion counts.
    pub deletions: PathBuf,
    /// Addition counts.
    pub additions: PathBuf,
}

impl DataFiles {
    /// The default file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        DataFiles {
            vocabulary: dir.join("word_frequencies.txt"),
            unigrams: dir.join("unigrams.csv"),
            bigrams: dir.join("bigrams.csv"),
            substitutions: dir.join("substitutions.csv"),
            deletions: dir.join("deletions.csv"),
            additions: dir.join("additions.csv"),
        }
    }

    /// Load the vocabulary and all count tables.
    pub fn load(&self) -> Result<(FrequencyStore, EditTables)> {
        let vocabulary = load_vocabulary(&self.vocabulary)?;
        let raw = RawTables {
            unigrams: load_context_table(&self.unigrams, "unigram", 1)?,
            bigrams: load_context_table(&self.bigrams, "bigram", 2)?,
            substitutions: load_pair_table(&self.substitutions)?,
            deletions: load_pair_table(&self.deletions)?,
            additions: load_pair_table(&self.additions)?,
        };

        info!(
            "Loaded {} words (N = {}), {} unigrams, {} bigrams, {} substitutions, {} deletions, {} additions",
            vocabulary.len(),
            vocabulary.total(),
            raw.unigrams.distinct(),
            raw.bigrams.distinct(),
            raw.substitutions.distinct(),
            raw.deletions.distinct(),
            raw.additions.distinct(),
        );

        let tables = EditTables::new(raw, &vocabulary)?;
        Ok((vocabulary, tables))
    }
}

/// Load a word frequency file.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<FrequencyStore> {
    let path = path.as_ref();
    debug!("Reading vocabulary from {}", path.display());
    read_vocabulary(File::open(path)?)
}

/// Parse `word count` lines. Blank lines are skipped.
pub fn read_vocabulary<R: Read>(reader: R) -> Result<FrequencyStore> {
    let mut store = FrequencyStore::new();

    for (line_num, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => continue,
            [word, count] => {
                let count = count.parse::<u64>().map_err(|e| {
                    SpellfixError::parse(format!("vocabulary line {}: {e}", line_num + 1))
                })?;
                if count == 0 {
                    warn!("Skipping zero-count word {word:?} on line {}", line_num + 1);
                }
                store.try_insert(word, count).map_err(|_| {
                    SpellfixError::parse(format!(
                        "vocabulary line {}: total word count overflows u64",
                        line_num + 1
                    ))
                })?;
            }
            _ => {
                return Err(SpellfixError::parse(format!(
                    "vocabulary line {}: expected `word count`, got {:?}",
                    line_num + 1,
                    line
                )));
            }
        }
    }

    Ok(store)
}

#[derive(Debug, Deserialize)]
struct ContextRow {
    #[serde(alias = "unigram", alias = "bigram")]
    key: String,
    count: u64,
}

#[derive(Debug, Deserialize)]
struct PairRow {
    #[serde(alias = "original", alias = "prefix")]
    context: String,
    #[serde(alias = "substituted", alias = "deleted", alias = "added")]
    edited: String,
    count: u64,
}

/// Load a unigram or bigram CSV whose keys must be `width` characters long.
pub fn load_context_table<P: AsRef<Path>>(
    path: P,
    name: &str,
    width: usize,
) -> Result<ContextTable> {
    let path = path.as_ref();
    debug!("Reading {name} table from {}", path.display());
    read_context_table(File::open(path)?, name, width)
}

/// Parse a `key,count` CSV.
pub fn read_context_table<R: Read>(reader: R, name: &str, width: usize) -> Result<ContextTable> {
    let mut table = ContextTable::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for row in csv_reader.deserialize() {
        let row: ContextRow = row?;
        let key = row.key.to_lowercase();
        if key.chars().count() != width {
            return Err(SpellfixError::parse(format!(
                "{name} key {:?} is not {width} character(s) long",
                row.key
            )));
        }
        table.insert(key, row.count);
    }

    Ok(table)
}

/// Load a `(context, edited, count)` CSV.
pub fn load_pair_table<P: AsRef<Path>>(path: P) -> Result<PairTable> {
    let path = path.as_ref();
    debug!("Reading edit table from {}", path.display());
    read_pair_table(File::open(path)?)
}

/// Parse a three-column edit-count CSV.
pub fn read_pair_table<R: Read>(reader: R) -> Result<PairTable> {
    let mut table = PairTable::new();
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    for row in csv_reader.deserialize() {
        let row: PairRow = row?;
        let key = (single_char(&row.context)?, single_char(&row.edited)?);
        table.insert(key, row.count);
    }

    Ok(table)
}

fn single_char(field: &str) -> Result<char> {
    let mut chars = field.chars().flat_map(char::to_lowercase);
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(SpellfixError::parse(format!(
            "expected a single character, got {field:?}"
        ))),
    }
}
