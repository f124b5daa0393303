//! Core quiz engine: banks, question generation, scoring and progress.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `models`      | Shared types: games, questions, submissions, events |
//! | `bank`        | `QuestionBank` and without-replacement sampling |
//! | `banks`       | Static item catalogues (themes, letters, words, sentences, stories) |
//! | `shuffle`     | Fisher-Yates shuffle and token scrambling |
//! | `distractors` | Numeric and categorical wrong-answer selection |
//! | `helpers`     | Shared builder functions used by every game |
//! | `games`       | One strategy per game type |
//! | `generator`   | Entry point `new_session()`, dispatches to games |
//! | `session`     | Answer checking, tallying and star tiers |
//! | `progress`    | Per-game stars and levels, `ProgressSink` |
//! | `config`      | `QuizConfig` and the counting difficulty curve |
//! | `client_view` | JSON projection for UI clients, answers stripped |
//! | `error`       | `QuizError` |

pub mod bank;
pub mod banks;
pub mod client_view;
pub mod config;
pub mod distractors;
pub mod error;
pub mod games;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod progress;
pub mod session;
pub mod shuffle;

pub use config::{CountingCurve, QuizConfig};
pub use error::QuizError;
pub use generator::{generate_questions, new_session, new_session_with_config};
pub use models::{
    AnswerOption, AnswerOutcome, ChoiceValue, GameType, ProgressDelta, Prompt, Question,
    QuestionFormat, QuizEvent, SessionRequest, SessionResult, Submission, TokenUnit,
};
pub use progress::{GameProgress, Progress, ProgressSink};
pub use session::{stars_for_session, Session};
