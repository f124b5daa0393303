use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Game catalogue
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GameType {
    Counting,
    Reading,
    WordArrange,
    SyllableArrange,
    ReadMatch,
    SentenceArrange,
    Story,
    Writing,
    Drawing,
}

impl GameType {
    pub const ALL: [GameType; 9] = [
        GameType::Counting,
        GameType::Reading,
        GameType::WordArrange,
        GameType::SyllableArrange,
        GameType::ReadMatch,
        GameType::SentenceArrange,
        GameType::Story,
        GameType::Writing,
        GameType::Drawing,
    ];

    /// Two-letter prefix used in session ids (e.g. `"CT-1A2B3C4D"`).
    pub fn id_prefix(self) -> &'static str {
        match self {
            GameType::Counting        => "CT",
            GameType::Reading         => "RD",
            GameType::WordArrange     => "WA",
            GameType::SyllableArrange => "SA",
            GameType::ReadMatch       => "RM",
            GameType::SentenceArrange => "SE",
            GameType::Story           => "ST",
            GameType::Writing         => "WR",
            GameType::Drawing         => "DR",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GameType::Counting        => "Berhitung",
            GameType::Reading         => "Membaca",
            GameType::WordArrange     => "Susun Kata",
            GameType::SyllableArrange => "Susun Suku Kata",
            GameType::ReadMatch       => "Baca & Cocokkan",
            GameType::SentenceArrange => "Susun Kalimat",
            GameType::Story           => "Cerita",
            GameType::Writing         => "Menulis",
            GameType::Drawing         => "Menggambar",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    pub game: GameType,
    /// 1-based level; values below 1 are treated as 1.
    pub level: u32,
    /// Number of questions; `None` uses the configured default.
    pub count: Option<usize>,
    pub rng_seed: Option<u64>,
}

impl SessionRequest {
    /// Level 1, configured question count, entropy seed.
    pub fn new(game: GameType) -> Self {
        SessionRequest { game, level: 1, count: None, rng_seed: None }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }
}

// ---------------------------------------------------------------------------
// Question
// ---------------------------------------------------------------------------

/// The value carried by a multiple-choice option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    Number(u32),
    Text(String),
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Number(n) => write!(f, "{}", n),
            ChoiceValue::Text(s)   => write!(f, "{}", s),
        }
    }
}

impl From<u32> for ChoiceValue {
    fn from(n: u32) -> Self {
        ChoiceValue::Number(n)
    }
}

impl From<&str> for ChoiceValue {
    fn from(s: &str) -> Self {
        ChoiceValue::Text(s.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(s: String) -> Self {
        ChoiceValue::Text(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
    pub image: Option<String>,
    pub value: ChoiceValue,
    pub is_correct: bool,
}

/// Granularity of an arrange-style question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenUnit {
    Letter,
    Syllable,
    Word,
}

impl TokenUnit {
    pub fn separator(self) -> &'static str {
        match self {
            TokenUnit::Letter   => "",
            TokenUnit::Syllable => "-",
            TokenUnit::Word     => " ",
        }
    }

    pub fn join<S: AsRef<str>>(self, tokens: &[S]) -> String {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<_>>()
            .join(self.separator())
    }

    /// Inverse of [`TokenUnit::join`].
    pub fn split(self, joined: &str) -> Vec<String> {
        match self {
            TokenUnit::Letter   => joined.chars().map(|c| c.to_string()).collect(),
            TokenUnit::Syllable => joined.split('-').map(str::to_string).collect(),
            TokenUnit::Word     => joined.split(' ').map(str::to_string).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionFormat {
    MultipleChoice {
        options: Vec<AnswerOption>,
        answer: ChoiceValue,
    },
    Arrange {
        tokens: Vec<String>,
        answer: Vec<String>,
        unit: TokenUnit,
    },
    Practice {
        target: String,
        guide: String,
    },
}

impl QuestionFormat {
    pub fn kind(&self) -> &'static str {
        match self {
            QuestionFormat::MultipleChoice { .. } => "multiple_choice",
            QuestionFormat::Arrange { .. }        => "arrange",
            QuestionFormat::Practice { .. }       => "practice",
        }
    }
}

/// What is shown (and spoken) for one question.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prompt {
    pub text: String,
    /// Repeated visual tokens, e.g. seven apples for a counting question.
    pub visual: Vec<String>,
    pub image: Option<String>,
    pub hint: Option<String>,
    pub title: Option<String>,
    pub passage: Option<String>,
    /// Phrase for the speech collaborator to read aloud.
    pub speech: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub question_id: String,
    pub game: GameType,
    /// Identifies the underlying bank item. Unique within a session.
    pub item_id: String,
    /// Logical kind of question within its game.
    /// Examples: "Count", "Addition", "Letter", "Syllable", "Story:long"
    pub branch_key: String,
    pub prompt: Prompt,
    pub format: QuestionFormat,
}

impl Question {
    /// Human-readable correct answer, for feedback screens.
    pub fn answer_text(&self) -> String {
        match &self.format {
            QuestionFormat::MultipleChoice { answer, .. } => answer.to_string(),
            QuestionFormat::Arrange { answer, unit, .. }  => unit.join(answer),
            QuestionFormat::Practice { target, .. }       => target.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Answering
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Submission {
    Choice(ChoiceValue),
    /// Tap on an option by its id ("A", "B", ...).
    OptionId(String),
    Arrangement(Vec<String>),
    PracticeDone,
}

impl Submission {
    pub fn kind(&self) -> &'static str {
        match self {
            Submission::Choice(_)      => "choice",
            Submission::OptionId(_)    => "option_id",
            Submission::Arrangement(_) => "arrangement",
            Submission::PracticeDone   => "practice_done",
        }
    }
}

/// Feedback events for the UI (sounds, animations).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizEvent {
    Correct,
    Incorrect,
    SessionComplete { stars_earned: u8 },
}

/// Changes the caller should apply to its progress store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressDelta {
    AddStars { game: GameType, amount: u32 },
    CompleteLevel { game: GameType },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerOutcome {
    pub is_correct: bool,
    pub correct_answer: String,
    pub events: Vec<QuizEvent>,
    pub progress: Vec<ProgressDelta>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResult {
    pub correct_count: usize,
    pub total_questions: usize,
    pub stars_earned: u8,
    pub is_complete: bool,
}
