//! Per-session scoring.
//!
//! A [`Session`] owns its questions and walks through them one answer at a
//! time. Every accepted answer advances the position, right or wrong; only a
//! correct one bumps the tally. The session never touches storage: it hands
//! back [`QuizEvent`]s for the UI and [`ProgressDelta`]s for whoever keeps
//! the player's progress.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::quiz_engine::{
    config::QuizConfig,
    error::QuizError,
    generator::new_session_with_config,
    models::{
        AnswerOutcome, GameType, ProgressDelta, Question, QuestionFormat, QuizEvent,
        SessionRequest, SessionResult, Submission,
    },
};

/// Star tier for a finished session.
///
/// `correct ≥ ⌈0.8·total⌉` → 3, `≥ ⌈0.6·total⌉` → 2, at least one → 1,
/// otherwise 0.
pub fn stars_for_session(correct: usize, total: usize) -> u8 {
    let three = (4 * total).div_ceil(5);
    let two = (3 * total).div_ceil(5);
    if correct == 0 {
        0
    } else if correct >= three {
        3
    } else if correct >= two {
        2
    } else {
        1
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SessionState")]
pub struct Session {
    pub session_id: String,
    pub game: GameType,
    pub level: u32,
    questions: Vec<Question>,
    position: usize,
    correct_count: usize,
}

/// Unchecked wire form of a [`Session`].
#[derive(Deserialize)]
struct SessionState {
    session_id: String,
    game: GameType,
    level: u32,
    questions: Vec<Question>,
    position: usize,
    correct_count: usize,
}

impl TryFrom<SessionState> for Session {
    type Error = QuizError;

    /// Restores a saved session, holding `correct_count ≤ position ≤ len`.
    fn try_from(s: SessionState) -> Result<Self, Self::Error> {
        if s.position > s.questions.len() {
            return Err(QuizError::InvalidSession(format!(
                "position {} beyond {} questions",
                s.position,
                s.questions.len()
            )));
        }
        if s.correct_count > s.position {
            return Err(QuizError::InvalidSession(format!(
                "{} correct after {} answers",
                s.correct_count, s.position
            )));
        }
        if s.questions.iter().any(|q| q.game != s.game) {
            return Err(QuizError::InvalidSession("question from another game".into()));
        }
        Ok(Session {
            session_id: s.session_id,
            game: s.game,
            level: s.level,
            questions: s.questions,
            position: s.position,
            correct_count: s.correct_count,
        })
    }
}

impl Session {
    pub fn new(session_id: String, game: GameType, level: u32, questions: Vec<Question>) -> Self {
        Session { session_id, game, level, questions, position: 0, correct_count: 0 }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// The question awaiting an answer; `None` once complete.
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.questions.len()
    }

    /// Fraction of questions answered, for a progress bar.
    pub fn progress_fraction(&self) -> f32 {
        if self.questions.is_empty() {
            return 1.0;
        }
        self.position as f32 / self.questions.len() as f32
    }

    pub fn result(&self) -> SessionResult {
        SessionResult {
            correct_count: self.correct_count,
            total_questions: self.questions.len(),
            stars_earned: stars_for_session(self.correct_count, self.questions.len()),
            is_complete: self.is_complete(),
        }
    }

    /// Check `submission` against the current question and advance.
    ///
    /// A rejected submission (wrong shape, unknown option, finished session)
    /// leaves the session untouched.
    pub fn submit_answer(&mut self, submission: Submission) -> Result<AnswerOutcome, QuizError> {
        let question = self.current_question().ok_or(QuizError::SessionComplete)?;
        let is_correct = check(question, &submission)?;
        let correct_answer = question.answer_text();

        if is_correct {
            self.correct_count += 1;
        }
        self.position += 1;

        debug!(
            session = %self.session_id,
            position = self.position,
            is_correct,
            "answer recorded"
        );

        let mut events = vec![if is_correct { QuizEvent::Correct } else { QuizEvent::Incorrect }];
        let mut progress = Vec::new();
        if is_correct {
            progress.push(ProgressDelta::AddStars { game: self.game, amount: 1 });
        }

        if self.is_complete() {
            let result = self.result();
            info!(
                session = %self.session_id,
                correct = result.correct_count,
                total = result.total_questions,
                stars = result.stars_earned,
                "session complete"
            );
            events.push(QuizEvent::SessionComplete { stars_earned: result.stars_earned });
            progress.push(ProgressDelta::CompleteLevel { game: self.game });
        }

        Ok(AnswerOutcome { is_correct, correct_answer, events, progress })
    }

    /// A new session for the same game, level and length ("play again").
    pub fn replay(&self, rng_seed: Option<u64>) -> Result<Session, QuizError> {
        self.replay_with_config(rng_seed, &QuizConfig::default())
    }

    pub fn replay_with_config(
        &self,
        rng_seed: Option<u64>,
        config: &QuizConfig,
    ) -> Result<Session, QuizError> {
        new_session_with_config(
            SessionRequest {
                game: self.game,
                level: self.level,
                count: Some(self.questions.len()),
                rng_seed,
            },
            config,
        )
    }
}

/// Compare a submission with the question's answer. Shape mismatches are
/// errors, never coerced.
fn check(question: &Question, submission: &Submission) -> Result<bool, QuizError> {
    let mismatch = || QuizError::InvalidSubmission {
        expected: question.format.kind(),
        found: submission.kind(),
    };

    match (&question.format, submission) {
        (QuestionFormat::MultipleChoice { answer, .. }, Submission::Choice(value)) => {
            Ok(value == answer)
        }
        (QuestionFormat::MultipleChoice { options, .. }, Submission::OptionId(id)) => options
            .iter()
            .find(|o| &o.id == id)
            .map(|o| o.is_correct)
            .ok_or_else(|| QuizError::UnknownOption(id.clone())),
        (QuestionFormat::Arrange { answer, unit, .. }, Submission::Arrangement(tokens)) => {
            Ok(unit.join(tokens) == unit.join(answer))
        }
        (QuestionFormat::Practice { .. }, Submission::PracticeDone) => Ok(true),
        _ => Err(mismatch()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{
        helpers::{multiple_choice, question},
        distractors::Candidate,
        models::{ChoiceValue, Prompt, TokenUnit},
    };
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn choice_q(answer: u32) -> Question {
        let mut rng = StdRng::seed_from_u64(answer as u64);
        question(
            GameType::Counting,
            format!("count:t:{answer}"),
            "Count",
            Prompt::default(),
            multiple_choice(
                &mut rng,
                Candidate::number(answer),
                vec![Candidate::number(answer + 1), Candidate::number(answer + 2)],
            ),
        )
    }

    fn arrange_q(words: &[&str]) -> Question {
        let answer: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        question(
            GameType::SentenceArrange,
            "s",
            "Words",
            Prompt::default(),
            QuestionFormat::Arrange { tokens: answer.iter().rev().cloned().collect(), answer, unit: TokenUnit::Word },
        )
    }

    fn session(questions: Vec<Question>) -> Session {
        Session::new("T-1".into(), GameType::Counting, 1, questions)
    }

    #[test]
    fn star_tiers_for_five_questions() {
        assert_eq!(stars_for_session(5, 5), 3);
        assert_eq!(stars_for_session(4, 5), 3);
        assert_eq!(stars_for_session(3, 5), 2);
        assert_eq!(stars_for_session(2, 5), 1);
        assert_eq!(stars_for_session(1, 5), 1);
        assert_eq!(stars_for_session(0, 5), 0);
    }

    #[test]
    fn star_tiers_for_seven_questions() {
        assert_eq!(stars_for_session(6, 7), 3);
        assert_eq!(stars_for_session(5, 7), 2);
        assert_eq!(stars_for_session(4, 7), 1);
    }

    #[test]
    fn wrong_answer_advances_without_scoring() {
        let mut s = session(vec![choice_q(3), choice_q(4)]);
        let out = s.submit_answer(Submission::Choice(ChoiceValue::Number(9))).unwrap();
        assert!(!out.is_correct);
        assert_eq!(out.correct_answer, "3");
        assert_eq!(out.events, vec![QuizEvent::Incorrect]);
        assert!(out.progress.is_empty());
        assert_eq!(s.position(), 1);
        assert_eq!(s.correct_count(), 0);
    }

    #[test]
    fn last_answer_completes_and_emits_level_delta_once() {
        let mut s = session(vec![choice_q(3)]);
        let out = s.submit_answer(Submission::Choice(3.into())).unwrap();
        assert!(out.is_correct);
        assert_eq!(
            out.events,
            vec![QuizEvent::Correct, QuizEvent::SessionComplete { stars_earned: 3 }]
        );
        assert_eq!(
            out.progress,
            vec![
                ProgressDelta::AddStars { game: GameType::Counting, amount: 1 },
                ProgressDelta::CompleteLevel { game: GameType::Counting },
            ]
        );
        assert!(s.is_complete());
        assert!(s.current_question().is_none());
        assert!(matches!(
            s.submit_answer(Submission::Choice(3.into())),
            Err(QuizError::SessionComplete)
        ));
    }

    #[test]
    fn option_id_submission_uses_the_labelled_slot() {
        let q = choice_q(5);
        let right = match &q.format {
            QuestionFormat::MultipleChoice { options, .. } => {
                options.iter().find(|o| o.is_correct).unwrap().id.clone()
            }
            _ => unreachable!(),
        };
        let mut s = session(vec![q]);
        assert!(s.submit_answer(Submission::OptionId(right)).unwrap().is_correct);
    }

    #[test]
    fn unknown_option_id_is_rejected_without_advancing() {
        let mut s = session(vec![choice_q(5)]);
        assert!(matches!(
            s.submit_answer(Submission::OptionId("Q".into())),
            Err(QuizError::UnknownOption(id)) if id == "Q"
        ));
        assert_eq!(s.position(), 0);
    }

    #[test]
    fn shape_mismatch_is_an_error_not_a_wrong_answer() {
        let mut s = session(vec![arrange_q(&["Adik", "minum", "susu"])]);
        match s.submit_answer(Submission::Choice(3.into())) {
            Err(QuizError::InvalidSubmission { expected, found }) => {
                assert_eq!(expected, "arrange");
                assert_eq!(found, "choice");
            }
            other => panic!("expected InvalidSubmission, got {other:?}"),
        }
        assert_eq!(s.position(), 0);
        assert_eq!(s.correct_count(), 0);
    }

    #[test]
    fn arrangement_must_match_in_order() {
        let mut s = session(vec![arrange_q(&["Adik", "minum", "susu"]), arrange_q(&["Adik", "minum", "susu"])]);
        let tokens = |w: &[&str]| w.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        assert!(!s.submit_answer(Submission::Arrangement(tokens(&["susu", "minum", "Adik"]))).unwrap().is_correct);
        assert!(s.submit_answer(Submission::Arrangement(tokens(&["Adik", "minum", "susu"]))).unwrap().is_correct);
        assert_eq!(s.result().correct_count, 1);
        assert_eq!(s.result().stars_earned, 1);
    }

    #[test]
    fn practice_is_always_accepted() {
        let q = question(
            GameType::Drawing,
            "awan",
            "Practice",
            Prompt::default(),
            QuestionFormat::Practice { target: "AWAN".into(), guide: "Bulat-bulat mengembang".into() },
        );
        let mut s = session(vec![q]);
        let out = s.submit_answer(Submission::PracticeDone).unwrap();
        assert!(out.is_correct);
        assert_eq!(out.correct_answer, "AWAN");
    }

    #[test]
    fn restored_session_must_keep_its_counters_consistent() {
        let mut s = session(vec![choice_q(1), choice_q(2)]);
        s.submit_answer(Submission::Choice(1.into())).unwrap();
        let mut json = serde_json::to_value(&s).unwrap();

        let back: Session = serde_json::from_value(json.clone()).unwrap();
        assert_eq!((back.position(), back.correct_count()), (1, 1));

        json["correct_count"] = 2.into();
        let err = serde_json::from_value::<Session>(json.clone()).unwrap_err();
        assert!(err.to_string().contains("2 correct after 1 answers"), "{err}");

        json["correct_count"] = 0.into();
        json["position"] = 3.into();
        assert!(serde_json::from_value::<Session>(json).is_err());
    }

    #[test]
    fn progress_fraction_tracks_position() {
        let mut s = session(vec![choice_q(1), choice_q(2), choice_q(3), choice_q(4)]);
        assert_eq!(s.progress_fraction(), 0.0);
        s.submit_answer(Submission::Choice(1.into())).unwrap();
        assert_eq!(s.progress_fraction(), 0.25);
    }
}
