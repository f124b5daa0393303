use rand::Rng;

use crate::quiz_engine::{
    bank::{sample_from, sample_items},
    banks::{sentences, words, PictureWord},
    config::QuizConfig,
    error::QuizError,
    helpers::{arrange, owned_tokens, question},
    models::{GameType, Prompt, Question, TokenUnit},
    shuffle::has_distinct_arrangement,
};

/// Put scrambled letters back into a word.
pub fn generate_letters<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let picked = sample_items(rng, &words::hint_bank(), count)?;

    Ok(picked
        .into_iter()
        .map(|w| {
            let prompt = Prompt {
                text: "Susun huruf menjadi kata!".into(),
                image: Some(w.image.to_string()),
                hint: Some(w.hint.to_string()),
                speech: Some(w.hint.to_string()),
                ..Prompt::default()
            };
            question(
                GameType::WordArrange,
                w.word,
                format!("Letters:{}", w.word.chars().count()),
                prompt,
                arrange(rng, TokenUnit::Letter.split(w.word), TokenUnit::Letter),
            )
        })
        .collect())
}

/// Put scrambled syllables back into a word.
///
/// Words whose syllables are all the same ("GI-GI") have nothing to
/// rearrange and are left out of this game.
pub fn generate_syllables<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let candidates: Vec<&'static PictureWord> = words::picture_bank()
        .items()
        .iter()
        .filter(|w| has_distinct_arrangement(&owned_tokens(w.syllables)))
        .collect();
    let picked = sample_from(rng, "syllable_words", &candidates, count)?;

    Ok(picked
        .into_iter()
        .map(|w| {
            let prompt = Prompt {
                text: "Susun suku kata menjadi kata!".into(),
                image: Some(w.image.to_string()),
                speech: Some(w.word.to_lowercase()),
                ..Prompt::default()
            };
            question(
                GameType::SyllableArrange,
                w.word,
                format!("Syllables:{}", w.syllables.len()),
                prompt,
                arrange(rng, owned_tokens(w.syllables), TokenUnit::Syllable),
            )
        })
        .collect())
}

/// Put scrambled words back into a sentence.
pub fn generate_sentences<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let picked = sample_items(rng, &sentences::bank(), count)?;

    Ok(picked
        .into_iter()
        .map(|s| {
            let prompt = Prompt {
                text: "Susun kata menjadi kalimat!".into(),
                image: Some(s.image.to_string()),
                hint: Some(s.hint.to_string()),
                speech: Some(s.text.to_string()),
                ..Prompt::default()
            };
            question(
                GameType::SentenceArrange,
                s.id,
                format!("Words:{}", s.words.len()),
                prompt,
                arrange(rng, owned_tokens(s.words), TokenUnit::Word),
            )
        })
        .collect())
}
