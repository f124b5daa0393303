//! Tunable session parameters.
//!
//! Every field has a default, so an empty JSON object (or no config at all)
//! reproduces the stock game: five questions, four options, and a counting
//! range that grows by two per level up to fifteen.

use serde::{Deserialize, Serialize};

use crate::quiz_engine::error::QuizError;

/// Upper bound for every counting number, so item lists stay small.
pub const MAX_COUNTING_VALUE: u32 = 100;

/// Longest session a request or config may ask for.
pub const MAX_SESSION_QUESTIONS: usize = 100;

/// Option ids run "A" to "Z".
pub const MAX_OPTIONS: usize = 26;

/// Numeric range for the counting game at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountingCurve {
    pub base: u32,
    pub step: u32,
    pub cap: u32,
    /// Largest addend in an addition question.
    pub addend_cap: u32,
    /// Extra room above the level range for addition options.
    pub addition_headroom: u32,
}

impl Default for CountingCurve {
    fn default() -> Self {
        CountingCurve { base: 5, step: 2, cap: 15, addend_cap: 5, addition_headroom: 5 }
    }
}

impl CountingCurve {
    /// `min(base + level * step, cap)`; levels below 1 count as 1.
    pub fn max_value(&self, level: u32) -> u32 {
        let level = level.max(1);
        self.base
            .saturating_add(level.saturating_mul(self.step))
            .min(self.cap)
    }

    pub fn addend_max(&self, level: u32) -> u32 {
        self.addend_cap.min(self.max_value(level)).max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    pub question_count: usize,
    /// Options per question in counting and reading.
    pub choice_options: usize,
    /// Options per question in read-and-match.
    pub read_match_options: usize,
    pub counting: CountingCurve,
}

impl Default for QuizConfig {
    fn default() -> Self {
        QuizConfig {
            question_count: 5,
            choice_options: 4,
            read_match_options: 3,
            counting: CountingCurve::default(),
        }
    }
}

impl QuizConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, QuizError> {
        let config: QuizConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), QuizError> {
        if self.question_count == 0 || self.question_count > MAX_SESSION_QUESTIONS {
            return Err(QuizError::InvalidConfig(format!(
                "question_count must be between 1 and {MAX_SESSION_QUESTIONS}"
            )));
        }
        for options in [self.choice_options, self.read_match_options] {
            if !(2..=MAX_OPTIONS).contains(&options) {
                return Err(QuizError::InvalidConfig(format!(
                    "a question needs between 2 and {MAX_OPTIONS} options"
                )));
            }
        }
        let c = &self.counting;
        if c.cap > MAX_COUNTING_VALUE
            || c.addend_cap > MAX_COUNTING_VALUE
            || c.addition_headroom > MAX_COUNTING_VALUE
        {
            return Err(QuizError::InvalidConfig(format!(
                "counting values must not exceed {MAX_COUNTING_VALUE}"
            )));
        }
        // Subtraction draws its minuend from 3 upward.
        if self.counting.cap < 3 || self.counting.base.saturating_add(self.counting.step) < 3 {
            return Err(QuizError::InvalidConfig("counting range must reach at least 3".into()));
        }
        if self.counting.addend_cap == 0 {
            return Err(QuizError::InvalidConfig("addend_cap must be at least 1".into()));
        }
        Ok(())
    }
}
