//! Shared builder functions used by every game strategy.
//!
//! Each strategy assembles the same pieces: labelled options, repeated visual
//! tokens, a multiple-choice or arrange format, and the final [`Question`].
//! These helpers keep the game files focused on what to ask.

use rand::Rng;

use crate::quiz_engine::{
    distractors::{assemble_options, Candidate},
    models::{GameType, Prompt, Question, QuestionFormat, TokenUnit},
    shuffle::scramble_tokens,
};

/// Option label for slot `i`: "A", "B", ... "Z", then "A2", "B2", ...
pub fn option_id(i: usize) -> String {
    let letter = (b'A' + (i % 26) as u8) as char;
    match i / 26 {
        0 => letter.to_string(),
        n => format!("{}{}", letter, n + 1),
    }
}

/// `n` copies of one visual token.
pub fn repeat_token(token: &str, n: u32) -> Vec<String> {
    (0..n).map(|_| token.to_string()).collect()
}

/// Multiple-choice format with `correct` shuffled in among `distractors`.
pub fn multiple_choice<R: Rng>(
    rng: &mut R,
    correct: Candidate,
    distractors: Vec<Candidate>,
) -> QuestionFormat {
    let answer = correct.value.clone();
    QuestionFormat::MultipleChoice {
        options: assemble_options(rng, correct, distractors),
        answer,
    }
}

/// Arrange format: `answer` scrambled into the presented token order.
pub fn arrange<R: Rng>(rng: &mut R, answer: Vec<String>, unit: TokenUnit) -> QuestionFormat {
    QuestionFormat::Arrange {
        tokens: scramble_tokens(rng, &answer),
        answer,
        unit,
    }
}

/// Owned copies of a static token list.
pub fn owned_tokens(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

/// Assemble the final [`Question`]. `question_id` is filled in by the
/// generator once the session order is fixed.
pub fn question(
    game: GameType,
    item_id: impl Into<String>,
    branch_key: impl Into<String>,
    prompt: Prompt,
    format: QuestionFormat,
) -> Question {
    Question {
        question_id: String::new(),
        game,
        item_id: item_id.into(),
        branch_key: branch_key.into(),
        prompt,
        format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_ids_are_letters() {
        assert_eq!(option_id(0), "A");
        assert_eq!(option_id(3), "D");
        assert_eq!(option_id(25), "Z");
        assert_eq!(option_id(26), "A2");
    }

    #[test]
    fn repeat_token_builds_visuals() {
        assert_eq!(repeat_token("🍎", 3), vec!["🍎", "🍎", "🍎"]);
        assert!(repeat_token("🍎", 0).is_empty());
    }
}
