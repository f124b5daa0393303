//! Per-game question strategies.
//!
//! Every strategy has the same shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(
//!     rng: &mut R,
//!     level: u32,
//!     count: usize,
//!     config: &QuizConfig,
//! ) -> Result<Vec<Question>, QuizError>
//! ```
//!
//! and returns exactly `count` questions over distinct bank items, in random
//! order. Only counting scales with `level`; the word games are flat.
//! The generator dispatches to these via `generator.rs`.

/// Count (CT), addition and subtraction with numeric distractors
pub mod counting;
/// Letter, word-picture and syllable recognition (RD)
pub mod reading;
/// Syllables shown, pick the matching picture (RM)
pub mod read_match;
/// Letter (WA), syllable (SA) and sentence (SE) arranging
pub mod arrange;
/// Passage comprehension with authored options (ST)
pub mod story;
/// Free-hand writing (WR) and drawing (DR), always accepted
pub mod practice;
