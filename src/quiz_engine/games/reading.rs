use rand::Rng;

use crate::quiz_engine::{
    bank::sample_items,
    banks::{letters, words, PictureWord},
    config::QuizConfig,
    distractors::{categorical_distractors, Candidate},
    error::QuizError,
    helpers::{multiple_choice, question},
    models::{GameType, Prompt, Question},
    shuffle::shuffle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Letter,
    Word,
    Syllable,
}

/// Five-question sessions: two letters, two picture words, one syllable word.
fn kind_for(i: usize, count: usize) -> Kind {
    match i * 5 / count {
        0..=1 => Kind::Letter,
        2..=3 => Kind::Word,
        _     => Kind::Syllable,
    }
}

fn letter_question<R: Rng>(
    rng: &mut R,
    letter: &'static str,
    options: usize,
) -> Result<Question, QuizError> {
    let pool = letters::bank();
    let wrong = categorical_distractors(rng, pool.name(), pool.items(), &letter, options, |l| *l)?;
    let prompt = Prompt {
        text: "Huruf apa ini?".into(),
        visual: vec![letter.to_string()],
        speech: Some("Huruf apa ini?".into()),
        ..Prompt::default()
    };
    Ok(question(
        GameType::Reading,
        format!("letter:{letter}"),
        "Letter",
        prompt,
        multiple_choice(rng, Candidate::text(letter), wrong.into_iter().map(|l| Candidate::text(l)).collect()),
    ))
}

fn word_options<R: Rng>(
    rng: &mut R,
    word: &PictureWord,
    options: usize,
) -> Result<Vec<Candidate>, QuizError> {
    let pool = words::picture_bank();
    let wrong = categorical_distractors(rng, pool.name(), pool.items(), word, options, |w| w.word)?;
    Ok(wrong.into_iter().map(|w| Candidate::text(w.word)).collect())
}

fn picture_question<R: Rng>(
    rng: &mut R,
    word: &PictureWord,
    options: usize,
) -> Result<Question, QuizError> {
    let wrong = word_options(rng, word, options)?;
    let prompt = Prompt {
        text: "Apa nama gambar ini?".into(),
        image: Some(word.image.to_string()),
        speech: Some("Apa nama gambar ini?".into()),
        ..Prompt::default()
    };
    Ok(question(
        GameType::Reading,
        format!("word:{}", word.word),
        "Word",
        prompt,
        multiple_choice(rng, Candidate::text(word.word), wrong),
    ))
}

fn syllable_question<R: Rng>(
    rng: &mut R,
    word: &PictureWord,
    options: usize,
) -> Result<Question, QuizError> {
    let wrong = word_options(rng, word, options)?;
    let prompt = Prompt {
        text: "Gabungkan suku kata ini!".into(),
        visual: vec![word.syllables.join("-")],
        speech: Some(word.syllables.join(" ")),
        ..Prompt::default()
    };
    Ok(question(
        GameType::Reading,
        format!("syllable:{}", word.word),
        "Syllable",
        prompt,
        multiple_choice(rng, Candidate::text(word.word), wrong),
    ))
}

pub fn generate<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let options = config.choice_options;
    let kinds: Vec<Kind> = (0..count).map(|i| kind_for(i, count)).collect();
    let n_letters = kinds.iter().filter(|&&k| k == Kind::Letter).count();
    let n_words = kinds.iter().filter(|&&k| k == Kind::Word).count();
    let n_syllables = count - n_letters - n_words;

    let picked_letters = sample_items(rng, &letters::bank(), n_letters)?;
    // Picture and syllable questions share one draw so no word repeats.
    let picked_words = sample_items(rng, &words::picture_bank(), n_words + n_syllables)?;
    let (for_pictures, for_syllables) = picked_words.split_at(n_words);

    let mut questions = Vec::with_capacity(count);
    for &letter in picked_letters {
        questions.push(letter_question(rng, letter, options)?);
    }
    for &word in for_pictures {
        questions.push(picture_question(rng, word, options)?);
    }
    for &word in for_syllables {
        questions.push(syllable_question(rng, word, options)?);
    }

    shuffle(rng, &mut questions);
    Ok(questions)
}
