//! Running a corrector over a labelled list of misspellings.
//!
//! Cases come from a CSV file with a `typo,expected` header and an optional
//! `expect_failure` column. Cases marked `expect_failure` document known
//! limitations of the model (real-word errors, edit distance 2, no known
//! neighbour); they are reported separately from the regular cases.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::spelling::corrector::Corrector;

/// One labelled misspelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// The observed (possibly misspelled) word.
    pub typo: String,
    /// The word the corrector should return.
    pub expected: String,
    /// The case documents a known limitation of the model.
    #[serde(default)]
    pub expect_failure: bool,
}

impl TestCase {
    /// Create a regular case.
    pub fn new<S: Into<String>>(typo: S, expected: S) -> Self {
        TestCase {
            typo: typo.into(),
            expected: expected.into(),
            expect_failure: false,
        }
    }
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    /// The case that was run.
    #[serde(flatten)]
    pub case: TestCase,
    /// What the corrector returned.
    pub actual: String,
    /// `actual == expected`.
    pub passed: bool,
}

impl CaseOutcome {
    /// Human status label for the outcome.
    pub fn status(&self) -> &'static str {
        match (self.case.expect_failure, self.passed) {
            (false, true) => "PASSED",
            (false, false) => "FAILED",
            (true, true) => "FAIL (AS EXPECTED)",
            (true, false) => "UNEXPECTEDLY PASSED",
        }
    }
}

/// Outcomes of a whole case list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Evaluation {
    /// Per-case outcomes in input order.
    pub outcomes: Vec<CaseOutcome>,
}

impl Evaluation {
    /// Run every case through the corrector.
    pub fn run(corrector: &Corrector, cases: Vec<TestCase>) -> Self {
        let typos: Vec<&str> = cases.iter().map(|case| case.typo.as_str()).collect();
        let results = corrector.correct_batch(&typos);

        let outcomes = cases
            .into_iter()
            .zip(results)
            .map(|(case, actual)| {
                let passed = actual == case.expected.to_lowercase();
                CaseOutcome {
                    case,
                    actual,
                    passed,
                }
            })
            .collect();

        Evaluation { outcomes }
    }

    /// `(passed, total)` over regular cases.
    pub fn regular_summary(&self) -> (usize, usize) {
        self.summary(false)
    }

    /// `(passed, total)` over cases marked `expect_failure`.
    pub fn limitation_summary(&self) -> (usize, usize) {
        self.summary(true)
    }

    /// Whether every regular case passed.
    pub fn all_regular_passed(&self) -> bool {
        let (passed, total) = self.regular_summary();
        passed == total
    }

    fn summary(&self, expect_failure: bool) -> (usize, usize) {
        let selected = self
            .outcomes
            .iter()
            .filter(|outcome| outcome.case.expect_failure == expect_failure);
        let (mut passed, mut total) = (0, 0);
        for outcome in selected {
            total += 1;
            if outcome.passed {
                passed += 1;
            }
        }
        (passed, total)
    }
}

/// Load cases from a CSV file.
pub fn load_cases<P: AsRef<Path>>(path: P) -> Result<Vec<TestCase>> {
    read_cases(File::open(path)?)
}

/// Parse a `typo,expected[,expect_failure]` CSV.
pub fn read_cases<R: Read>(reader: R) -> Result<Vec<TestCase>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut cases = Vec::new();
    for row in csv_reader.deserialize() {
        cases.push(row?);
    }
    Ok(cases)
}
