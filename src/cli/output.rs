//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpellfixArgs};
use crate::error::Result;
use crate::spelling::corrector::Correction;
use crate::spelling::evaluate::Evaluation;
use crate::spelling::scorer::ScoredCandidate;

/// Result structure for the `correct` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct CorrectionResults {
    pub corrections: Vec<WordCorrection>,
    pub duration_ms: u64,
}

/// One corrected word.
#[derive(Debug, Serialize, Deserialize)]
pub struct WordCorrection {
    pub input: String,
    pub output: String,
    /// Present when `--explain` was given and the input could be scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<Correction>,
    /// Why the input could not be scored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejected: Option<String>,
}

/// Result structure for the `suggest` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct SuggestionResults {
    pub word: String,
    pub known: bool,
    pub suggestions: Vec<ScoredCandidate>,
}

/// Model statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelStats {
    pub vocabulary_words: usize,
    pub vocabulary_total: u64,
    pub unigrams: usize,
    pub bigrams: usize,
    pub deletions: usize,
    pub additions: usize,
    pub substitutions: usize,
    pub alphabet: String,
    pub boundary: char,
}

/// Types that know how to print themselves for people.
pub trait HumanOutput {
    fn print_human(&self, args: &SpellfixArgs);
}

/// Output a result in the specified format.
pub fn output_result<T>(message: &str, result: &T, args: &SpellfixArgs) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => {
            if args.verbosity() > 1 {
                println!("{message}");
                println!();
            }
            result.print_human(args);
            Ok(())
        }
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpellfixArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn describe(correction: &Correction) -> String {
    match correction {
        Correction::Known(_) => "known word".to_string(),
        Correction::Unchanged(_) => "no known single-edit neighbour".to_string(),
        Correction::Corrected { best, .. } => format!(
            "{} (prior {:.3}, channel {:.3}, score {:.3})",
            best.edit, best.log_prior, best.log_channel, best.score
        ),
    }
}

impl HumanOutput for CorrectionResults {
    fn print_human(&self, args: &SpellfixArgs) {
        for correction in &self.corrections {
            println!("{} -> {}", correction.input, correction.output);
            if let Some(detail) = &correction.detail {
                println!("    {}", describe(detail));
            }
            if let Some(reason) = &correction.rejected {
                println!("    not scored: {reason}");
            }
        }

        if args.verbosity() > 1 {
            println!();
            println!("Correction time: {}ms", self.duration_ms);
        }
    }
}

impl HumanOutput for SuggestionResults {
    fn print_human(&self, _args: &SpellfixArgs) {
        if self.known {
            println!("{} is a known word", self.word);
        }

        if self.suggestions.is_empty() {
            println!("No known single-edit neighbours of {}", self.word);
            return;
        }

        println!("Suggestions for {}:", self.word);
        println!("═══════════════");
        for (i, suggestion) in self.suggestions.iter().enumerate() {
            println!(
                "{:>2}. {:<20} {:>10.4}  {}",
                i + 1,
                suggestion.word,
                suggestion.score,
                suggestion.edit
            );
        }
    }
}

impl HumanOutput for Evaluation {
    fn print_human(&self, _args: &SpellfixArgs) {
        for outcome in &self.outcomes {
            println!(
                "Input: '{}' -> Output: '{}' (Expected: '{}') - {}",
                outcome.case.typo,
                outcome.actual,
                outcome.case.expected,
                outcome.status()
            );
        }

        println!();
        let (passed, total) = self.regular_summary();
        println!("Regular cases: {passed}/{total} passed");
        let (passed, total) = self.limitation_summary();
        if total > 0 {
            println!("Known limitations: {passed}/{total} behaved as expected");
        }
    }
}

impl HumanOutput for ModelStats {
    fn print_human(&self, _args: &SpellfixArgs) {
        println!("Model Statistics:");
        println!("════════════════");
        println!("Vocabulary words: {}", self.vocabulary_words);
        println!("Vocabulary total (N): {}", self.vocabulary_total);
        println!("Unigrams: {}", self.unigrams);
        println!("Bigrams: {}", self.bigrams);
        println!("Deletion pairs: {}", self.deletions);
        println!("Addition pairs: {}", self.additions);
        println!("Substitution pairs: {}", self.substitutions);
        println!("Alphabet: {}", self.alphabet);
        println!("Boundary marker: {}", self.boundary);
    }
}
