/// Errors surfaced by session generation and answering.
#[derive(Debug, thiserror::Error)]
pub enum QuizError {
    #[error("bank '{bank}' has {available} items, {requested} requested")]
    InsufficientItems {
        bank: &'static str,
        requested: usize,
        available: usize,
    },

    #[error("submission of kind '{found}' does not fit a {expected} question")]
    InvalidSubmission {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown option id: {0}")]
    UnknownOption(String),

    #[error("session is already complete")]
    SessionComplete,

    #[error("invalid session state: {0}")]
    InvalidSession(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
