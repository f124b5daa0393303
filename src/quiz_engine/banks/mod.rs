//! Static content for every game, one file per kind of item.
//!
//! | Module      | Bank(s) | Used by |
//! |-------------|---------|---------|
//! | `counting`  | emoji themes | Counting |
//! | `letters`   | A–Z | Reading |
//! | `words`     | picture words with syllables, hint words | Reading, ReadMatch, SyllableArrange, WordArrange |
//! | `sentences` | 3/4/5-word sentences | SentenceArrange |
//! | `stories`   | passages with authored options | Story |
//! | `practice`  | letters/digits to trace, shapes to draw | Writing, Drawing |

use crate::quiz_engine::bank::BankItem;

pub mod counting;
pub mod letters;
pub mod practice;
pub mod sentences;
pub mod stories;
pub mod words;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountingTheme {
    pub id: &'static str,
    pub emoji: &'static str,
}

/// A word with its picture and syllable breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureWord {
    pub word: &'static str,
    pub image: &'static str,
    pub syllables: &'static [&'static str],
}

/// A word with its picture and a spoken hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintWord {
    pub word: &'static str,
    pub image: &'static str,
    pub hint: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    pub id: &'static str,
    pub text: &'static str,
    pub image: &'static str,
    pub hint: &'static str,
    pub words: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryOption {
    pub text: &'static str,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    pub id: &'static str,
    pub title: Option<&'static str>,
    pub passage: &'static str,
    pub question: &'static str,
    pub options: &'static [StoryOption],
    pub correct: usize,
}

/// Something to trace or draw freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PracticePrompt {
    pub id: &'static str,
    pub target: &'static str,
    pub guide: &'static str,
    pub image: Option<&'static str>,
}

impl BankItem for CountingTheme {
    fn id(&self) -> &str {
        self.id
    }
}

impl BankItem for PictureWord {
    fn id(&self) -> &str {
        self.word
    }
}

impl BankItem for HintWord {
    fn id(&self) -> &str {
        self.word
    }
}

impl BankItem for Sentence {
    fn id(&self) -> &str {
        self.id
    }
}

impl BankItem for Story {
    fn id(&self) -> &str {
        self.id
    }
}

impl BankItem for PracticePrompt {
    fn id(&self) -> &str {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::bank::QuestionBank;
    use std::collections::HashSet;

    fn assert_unique_ids<T: BankItem + 'static>(bank: QuestionBank<T>) {
        let mut seen = HashSet::new();
        for item in bank.items() {
            assert!(seen.insert(item.id()), "duplicate id '{}' in bank {}", item.id(), bank.name());
        }
        assert!(!bank.is_empty(), "bank {} is empty", bank.name());
    }

    #[test]
    fn every_bank_has_unique_ids() {
        assert_unique_ids(counting::bank());
        assert_unique_ids(letters::bank());
        assert_unique_ids(words::picture_bank());
        assert_unique_ids(words::hint_bank());
        assert_unique_ids(sentences::bank());
        assert_unique_ids(stories::bank());
        assert_unique_ids(practice::writing_bank());
        assert_unique_ids(practice::drawing_bank());
    }

    #[test]
    fn picture_words_are_their_syllables_joined() {
        for w in words::picture_bank().items() {
            assert_eq!(w.syllables.concat(), w.word.replace('-', ""), "syllables of {}", w.word);
        }
    }

    #[test]
    fn picture_bank_images_are_distinct() {
        let mut seen = HashSet::new();
        for w in words::picture_bank().items() {
            assert!(seen.insert(w.image), "image {} reused by {}", w.image, w.word);
        }
    }

    #[test]
    fn sentences_are_their_words_joined() {
        for s in sentences::bank().items() {
            assert_eq!(s.words.join(" "), s.text, "sentence {}", s.id);
        }
    }

    #[test]
    fn stories_point_at_a_real_option_and_options_are_distinct() {
        for s in stories::bank().items() {
            assert!(s.correct < s.options.len(), "story {} correct index out of range", s.id);
            assert!(s.options.len() >= 2, "story {} needs at least two options", s.id);
            let texts: HashSet<&str> = s.options.iter().map(|o| o.text).collect();
            assert_eq!(texts.len(), s.options.len(), "story {} repeats an option", s.id);
        }
    }
}
