//! Command implementations for the spellfix CLI.

use std::time::Instant;

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, SpellfixError};
use crate::spelling::config::{ConfigFile, CorrectorConfig};
use crate::spelling::corrector::Corrector;
use crate::spelling::evaluate::{Evaluation, load_cases};
use crate::spelling::loader::DataFiles;

/// Execute a CLI command.
pub fn execute_command(args: SpellfixArgs) -> Result<()> {
    let corrector = load_corrector(&args)?;

    match &args.command {
        Command::Correct(correct_args) => correct_words(&corrector, correct_args, &args),
        Command::Suggest(suggest_args) => suggest_word(&corrector, suggest_args, &args),
        Command::Evaluate(evaluate_args) => evaluate_cases(&corrector, evaluate_args, &args),
        Command::Stats => show_stats(&corrector, &args),
    }
}

/// Build the corrector from `--config` and `--data-dir`.
///
/// Data paths in the config file take precedence over the data directory.
pub fn load_corrector(args: &SpellfixArgs) -> Result<Corrector> {
    let (config, files) = match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            let file = ConfigFile::load(path)?;
            let files = file
                .data
                .unwrap_or_else(|| DataFiles::in_dir(&args.data_dir));
            (file.corrector, files)
        }
        None => (CorrectorConfig::default(), DataFiles::in_dir(&args.data_dir)),
    };

    let start_time = Instant::now();
    let corrector = Corrector::from_files(&files, config)?;
    info!("Model loaded in {}ms", start_time.elapsed().as_millis());

    Ok(corrector)
}

/// Correct the given words.
fn correct_words(
    corrector: &Corrector,
    args: &CorrectArgs,
    cli_args: &SpellfixArgs,
) -> Result<()> {
    let start_time = Instant::now();

    let corrections = args
        .words
        .iter()
        .map(|word| {
            let output = corrector.correct(word);
            let (detail, rejected) = if args.explain {
                match corrector.analyze(word) {
                    Ok(correction) => (Some(correction), None),
                    Err(e) => (None, Some(e.to_string())),
                }
            } else {
                (None, None)
            };
            WordCorrection {
                input: word.clone(),
                output,
                detail,
                rejected,
            }
        })
        .collect();

    output_result(
        "Corrections",
        &CorrectionResults {
            corrections,
            duration_ms: start_time.elapsed().as_millis() as u64,
        },
        cli_args,
    )
}

/// Rank the neighbours of one word.
fn suggest_word(
    corrector: &Corrector,
    args: &SuggestArgs,
    cli_args: &SpellfixArgs,
) -> Result<()> {
    let suggestions = corrector.suggest(&args.word, args.limit)?;

    output_result(
        "Suggestions",
        &SuggestionResults {
            word: args.word.trim().to_lowercase(),
            known: corrector.vocabulary().contains(args.word.trim()),
            suggestions,
        },
        cli_args,
    )
}

/// Run a case file.
fn evaluate_cases(
    corrector: &Corrector,
    args: &EvaluateArgs,
    cli_args: &SpellfixArgs,
) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Loading cases from: {}", args.cases_file.display());
    }

    let cases = load_cases(&args.cases_file)?;
    let evaluation = Evaluation::run(corrector, cases);

    output_result("Evaluation", &evaluation, cli_args)?;

    if args.strict && !evaluation.all_regular_passed() {
        let (passed, total) = evaluation.regular_summary();
        return Err(SpellfixError::other(format!(
            "{} of {total} regular cases failed",
            total - passed
        )));
    }

    Ok(())
}

/// Show model statistics.
fn show_stats(corrector: &Corrector, cli_args: &SpellfixArgs) -> Result<()> {
    let vocabulary = corrector.vocabulary();
    let tables = corrector.tables();
    let config = corrector.config();

    output_result(
        "Model statistics",
        &ModelStats {
            vocabulary_words: vocabulary.len(),
            vocabulary_total: vocabulary.total(),
            unigrams: tables.unigrams().distinct(),
            bigrams: tables.bigrams().distinct(),
            deletions: tables.deletions().distinct(),
            additions: tables.additions().distinct(),
            substitutions: tables.substitutions().distinct(),
            alphabet: config.alphabet.clone(),
            boundary: config.boundary,
        },
        cli_args,
    )
}
