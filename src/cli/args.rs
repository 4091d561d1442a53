//! Command line argument parsing for the spellfix CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// spellfix - noisy-channel spelling correction
#[derive(Parser, Debug, Clone)]
#[command(name = "spellfix")]
#[command(about = "Correct single-word spelling errors with a noisy-channel model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellfixArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Directory holding word_frequencies.txt and the count tables
    #[arg(
        short,
        long,
        value_name = "DIR",
        env = "SPELLFIX_DATA_DIR",
        default_value = "data"
    )]
    pub data_dir: PathBuf,

    /// JSON configuration file (alphabet, boundary marker, data paths)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellfixArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Correct one or more words
    Correct(CorrectArgs),

    /// Rank the known single-edit neighbours of a word
    Suggest(SuggestArgs),

    /// Run a labelled CSV of misspellings
    Evaluate(EvaluateArgs),

    /// Show vocabulary and table statistics
    Stats,
}

/// Arguments for correcting words
#[derive(Parser, Debug, Clone)]
pub struct CorrectArgs {
    /// Words to correct
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    /// Also show how each result was reached
    #[arg(short, long)]
    pub explain: bool,
}

/// Arguments for ranking suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Word to look up
    #[arg(value_name = "WORD")]
    pub word: String,

    /// Maximum number of suggestions to return
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,
}

/// Arguments for evaluating a case file
#[derive(Parser, Debug, Clone)]
pub struct EvaluateArgs {
    /// CSV file with a `typo,expected[,expect_failure]` header
    #[arg(value_name = "CASES_FILE")]
    pub cases_file: PathBuf,

    /// Exit with an error when a regular case fails
    #[arg(long)]
    pub strict: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_correct_command() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "correct",
            "speling",
            "hapy",
            "--explain",
        ])
        .unwrap();

        if let Command::Correct(correct_args) = args.command {
            assert_eq!(correct_args.words, vec!["speling", "hapy"]);
            assert!(correct_args.explain);
        } else {
            panic!("Expected Correct command");
        }
        assert_eq!(args.data_dir, PathBuf::from("data"));
    }

    #[test]
    fn test_correct_requires_a_word() {
        assert!(SpellfixArgs::try_parse_from(["spellfix", "correct"]).is_err());
    }

    #[test]
    fn test_suggest_command() {
        let args = SpellfixArgs::try_parse_from([
            "spellfix",
            "--data-dir",
            "/tmp/tables",
            "suggest",
            "acress",
            "-n",
            "3",
        ])
        .unwrap();

        assert_eq!(args.data_dir, PathBuf::from("/tmp/tables"));
        if let Command::Suggest(suggest_args) = args.command {
            assert_eq!(suggest_args.word, "acress");
            assert_eq!(suggest_args.limit, 3);
        } else {
            panic!("Expected Suggest command");
        }
    }

    #[test]
    fn test_evaluate_command() {
        let args =
            SpellfixArgs::try_parse_from(["spellfix", "evaluate", "cases.csv", "--strict"]).unwrap();

        if let Command::Evaluate(evaluate_args) = args.command {
            assert_eq!(evaluate_args.cases_file, PathBuf::from("cases.csv"));
            assert!(evaluate_args.strict);
        } else {
            panic!("Expected Evaluate command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = SpellfixArgs::try_parse_from(["spellfix", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = SpellfixArgs::try_parse_from(["spellfix", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = SpellfixArgs::try_parse_from(["spellfix", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        // Quiet flag
        let args = SpellfixArgs::try_parse_from(["spellfix", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args = SpellfixArgs::try_parse_from(["spellfix", "--format", "json", "stats"]).unwrap();
        assert!(matches!(args.output_format, OutputFormat::Json));
    }
}
