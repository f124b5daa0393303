use rand::Rng;

use crate::quiz_engine::{
    bank::sample_items,
    banks::words,
    config::QuizConfig,
    distractors::{categorical_distractors, Candidate},
    error::QuizError,
    helpers::{multiple_choice, owned_tokens, question},
    models::{GameType, Prompt, Question},
};

/// Read the syllables, then pick the matching picture.
pub fn generate<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let bank = words::picture_bank();
    let picked = sample_items(rng, &bank, count)?;

    let mut questions = Vec::with_capacity(count);
    for &word in &picked {
        let wrong = categorical_distractors(
            rng,
            bank.name(),
            bank.items(),
            word,
            config.read_match_options,
            |w| w.word,
        )?;
        let prompt = Prompt {
            text: word.word.to_string(),
            visual: owned_tokens(word.syllables),
            speech: Some(word.word.to_lowercase()),
            ..Prompt::default()
        };
        let correct = Candidate::text(word.word).with_image(word.image);
        let distractors = wrong
            .into_iter()
            .map(|w| Candidate::text(w.word).with_image(w.image))
            .collect();

        questions.push(question(
            GameType::ReadMatch,
            word.word,
            format!("Syllables:{}", word.syllables.len()),
            prompt,
            multiple_choice(rng, correct, distractors),
        ));
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::QuestionFormat;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn options_carry_pictures_and_one_matches_the_word() {
        let mut rng = StdRng::seed_from_u64(21);
        for q in generate(&mut rng, 1, 5, &QuizConfig::default()).unwrap() {
            let QuestionFormat::MultipleChoice { options, .. } = &q.format else {
                panic!("read-match must be multiple choice");
            };
            assert_eq!(options.len(), 3);
            assert!(options.iter().all(|o| o.image.is_some()));
            let correct: Vec<_> = options.iter().filter(|o| o.is_correct).collect();
            assert_eq!(correct.len(), 1);
            assert_eq!(correct[0].text, q.prompt.text);
        }
    }
}
