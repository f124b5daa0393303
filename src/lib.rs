//! # edu_quiz_gen
//!
//! An offline, deterministic quiz engine for early-literacy and numeracy
//! games.
//!
//! The library builds short sessions of questions for nine child-facing
//! games: counting, reading, letter/syllable/sentence arranging,
//! read-and-match, story comprehension, writing and drawing practice. Every
//! question comes from a static bank, multiple-choice options carry
//! plausible distractors, and answers are checked and tallied into a star
//! rating.
//!
//! ## How it works
//!
//! 1. Create a [`SessionRequest`] with a game, a level and an optional seed.
//! 2. Call [`new_session`]: the engine samples distinct items from the
//!    game's bank, picks distractors or scrambles tokens, and shuffles the
//!    options.
//! 3. Read [`Session::current_question`], pass the child's answer to
//!    [`Session::submit_answer`], and play the returned [`QuizEvent`]s.
//! 4. Apply the returned [`ProgressDelta`]s to a [`Progress`] store (or any
//!    [`ProgressSink`]) and read the final [`SessionResult`].
//!
//! ## Key features
//!
//! - **Deterministic**: `rng_seed: Some(u64)` reproduces the exact session.
//! - **No repeats**: items are drawn without replacement within a session.
//! - **Branch keys**: each question carries a `branch_key` (e.g.
//!   `"Addition"`, `"Syllables:3"`) for tracking which kinds a child has
//!   mastered.
//! - **No I/O**: the engine never touches storage; progress is handed back
//!   as deltas and serialises to JSON on request.
//!
//! ## Quick start
//!
//! ```rust
//! use edu_quiz_gen::{new_session, GameType, Progress, ProgressSink, SessionRequest, Submission};
//!
//! let mut progress = Progress::new();
//! let level = progress.level(GameType::Counting);
//!
//! let mut session = new_session(
//!     SessionRequest::new(GameType::Counting).level(level).seed(42),
//! )?;
//!
//! while let Some(q) = session.current_question() {
//!     println!("{}", q.prompt.text);
//!     // Tap the first option, right or wrong.
//!     let outcome = session.submit_answer(Submission::OptionId("A".into()))?;
//!     progress.apply_all(&outcome.progress);
//! }
//!
//! let result = session.result();
//! println!("{}/{} -> {} stars", result.correct_count, result.total_questions, result.stars_earned);
//! # Ok::<(), edu_quiz_gen::QuizError>(())
//! ```

pub mod quiz_engine;

// Convenience re-exports so callers can use `edu_quiz_gen::new_session`
// directly without reaching into `quiz_engine::`.
pub use quiz_engine::{
    client_view, new_session, new_session_with_config, stars_for_session, AnswerOption,
    AnswerOutcome, ChoiceValue, CountingCurve, GameProgress, GameType, Progress, ProgressDelta,
    ProgressSink, Prompt, Question, QuestionFormat, QuizConfig, QuizError, QuizEvent, Session,
    SessionRequest, SessionResult, Submission, TokenUnit,
};
