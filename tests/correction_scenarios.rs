use std::path::PathBuf;

use spellfix::error::SpellfixError;
use spellfix::spelling::evaluate::{Evaluation, load_cases};
use spellfix::spelling::{CandidateGenerator, Correction, Corrector, DataFiles, Edit};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn corrector() -> Corrector {
    Corrector::from_dir(fixtures()).unwrap()
}

#[test]
fn test_reference_corrections() {
    let corrector = corrector();

    assert_eq!(corrector.correct("speling"), "spelling");
    assert_eq!(corrector.correct("hapy"), "happy");
    assert_eq!(corrector.correct("cak"), "cake");
    assert_eq!(corrector.correct("acress"), "across");
    assert_eq!(corrector.correct("wether"), "weather");
}

#[test]
fn test_known_limitations() {
    let corrector = corrector();

    // Real-word error: left alone.
    assert_eq!(
        corrector.analyze("peace").unwrap(),
        Correction::Known("peace".to_string())
    );
    // Edit distance 2 from "inconvenient".
    assert_eq!(
        corrector.analyze("inconvient").unwrap(),
        Correction::Unchanged("inconvient".to_string())
    );
    // No known neighbour at all.
    assert_eq!(
        corrector.analyze("zzxyy").unwrap(),
        Correction::Unchanged("zzxyy".to_string())
    );
    assert_eq!(corrector.correct("zzxyy"), "zzxyy");
}

#[test]
fn test_edits_behind_reference_corrections() {
    let corrector = corrector();

    let edit_for = |word: &str| match corrector.analyze(word).unwrap() {
        Correction::Corrected { best, .. } => best.edit,
        other => panic!("{word} was not corrected: {other:?}"),
    };

    assert_eq!(
        edit_for("speling"),
        Edit::Deletion {
            prefix: 'l',
            deleted: 'l'
        }
    );
    assert_eq!(
        edit_for("acress"),
        Edit::Substitution {
            original: 'o',
            typed: 'e'
        }
    );
    assert_eq!(
        edit_for("wether"),
        Edit::Deletion {
            prefix: 'e',
            deleted: 'a'
        }
    );
}

#[test]
fn test_acress_ranking() {
    let corrector = corrector();
    let suggestions = corrector.suggest("acress", 10).unwrap();
    let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();

    assert_eq!(
        words,
        vec!["across", "actress", "cress", "access", "acres", "caress"]
    );
}

#[test]
fn test_known_words_are_never_altered() {
    let corrector = corrector();

    for (word, _) in corrector.vocabulary().iter() {
        assert_eq!(corrector.correct(word), word);
    }
}

#[test]
fn test_results_stay_within_one_edit() {
    let corrector = corrector();
    let generator = CandidateGenerator::default();

    for typo in ["speling", "hapy", "cak", "acress", "wether", "caks", "ther", "zzxyy"] {
        let result = corrector.correct(typo);
        if result != typo {
            assert!(
                generator.generate(typo).iter().any(|c| c.word == result),
                "{typo} -> {result} is not a single edit"
            );
        }
    }
}

#[test]
fn test_case_insensitive_and_deterministic() {
    let corrector = corrector();

    for typo in ["Speling", "HAPY", "cAk", "ACRESS", "Wether", "ZZXYY", "Peace"] {
        let expected = corrector.correct(&typo.to_lowercase());
        assert_eq!(corrector.correct(typo), expected);
        assert_eq!(corrector.correct(typo), corrector.correct(typo));
    }
}

#[test]
fn test_parallel_batch_matches_sequential() {
    let corrector = corrector();
    let words = vec!["speling", "hapy", "cak", "acress", "wether", "peace", "zzxyy"];

    let sequential: Vec<String> = words.iter().map(|w| corrector.correct(w)).collect();
    assert_eq!(corrector.correct_batch(&words), sequential);
}

#[test]
fn test_shared_across_threads() {
    let corrector = &corrector();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["speling", "hapy", "cak", "acress"]
            .into_iter()
            .map(|typo| scope.spawn(move || corrector.correct(typo)))
            .collect();
        let results: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec!["spelling", "happy", "cake", "across"]);
    });
}

#[test]
fn test_invalid_input() {
    let corrector = corrector();

    assert!(matches!(
        corrector.analyze(""),
        Err(SpellfixError::InvalidInput(_))
    ));
    assert!(matches!(
        corrector.analyze("sp3lling"),
        Err(SpellfixError::InvalidInput(_))
    ));
    assert_eq!(corrector.correct("sp3lling"), "sp3lling");
}

#[test]
fn test_reference_case_file() {
    let corrector = corrector();
    let cases = load_cases(fixtures().join("cases.csv")).unwrap();
    let evaluation = Evaluation::run(&corrector, cases);

    assert_eq!(evaluation.regular_summary(), (5, 5));
    assert_eq!(evaluation.limitation_summary(), (3, 3));
    assert!(evaluation.all_regular_passed());
}

#[test]
fn test_fixture_table_sizes() {
    let (vocabulary, tables) = DataFiles::in_dir(fixtures()).load().unwrap();

    assert_eq!(tables.unigrams().distinct(), 26);
    assert_eq!(tables.bigrams().distinct(), 107);
    // The boundary marker has dedicated edit rows but no context rows.
    assert!(tables.deletions().count(&('#', 'a')) > 0);
    assert!(tables.additions().count(&('#', 'a')) > 0);
    assert_eq!(tables.unigrams().count(&"#".to_string()), 0);
    assert!(vocabulary.contains("across"));
}
