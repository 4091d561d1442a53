//! # spellfix
//!
//! Single-word spelling correction with a noisy-channel model.
//!
//! A misspelled word `x` is corrected to the vocabulary word `w` one edit
//! away that maximises `log P(w) + log P(x|w)`. The prior comes from word
//! frequencies; the channel probability comes from add-1 smoothed counts of
//! deletions, insertions and substitutions, with a flat probability for
//! transpositions.
//!
//! ```no_run
//! use spellfix::spelling::Corrector;
//!
//! let corrector = Corrector::from_dir("data")?;
//! assert_eq!(corrector.correct("speling"), "spelling");
//! # Ok::<(), spellfix::error::SpellfixError>(())
//! ```

pub mod cli;
pub mod error;
pub mod spelling;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
