use rand::Rng;

use crate::quiz_engine::{
    bank::sample_items,
    banks::{stories, Story},
    config::QuizConfig,
    distractors::Candidate,
    error::QuizError,
    helpers::{multiple_choice, question},
    models::{GameType, Prompt, Question},
};

fn candidate(story: &Story, i: usize) -> Candidate {
    let opt = &story.options[i];
    Candidate::text(opt.text).with_image(opt.image)
}

/// Passage followed by the question, read aloud as one phrase.
fn spoken(story: &Story) -> String {
    format!("{}. {}", story.passage.trim_end_matches('.'), story.question)
}

/// Read a passage, answer one comprehension question.
///
/// Stories carry their own authored distractors; only their order is
/// randomised here.
pub fn generate<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let picked = sample_items(rng, &stories::bank(), count)?;

    Ok(picked
        .into_iter()
        .map(|s| {
            let distractors = (0..s.options.len())
                .filter(|&i| i != s.correct)
                .map(|i| candidate(s, i))
                .collect();
            let prompt = Prompt {
                text: s.question.to_string(),
                title: s.title.map(str::to_string),
                passage: Some(s.passage.to_string()),
                speech: Some(spoken(s)),
                ..Prompt::default()
            };
            let branch = if s.title.is_some() { "Story:long" } else { "Story:short" };
            question(
                GameType::Story,
                s.id,
                branch,
                prompt,
                multiple_choice(rng, candidate(s, s.correct), distractors),
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{ChoiceValue, QuestionFormat};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn correct_option_is_the_authored_answer() {
        let mut rng = StdRng::seed_from_u64(77);
        let bank = stories::bank();
        for q in generate(&mut rng, 1, 10, &QuizConfig::default()).unwrap() {
            let story = bank.items().iter().find(|s| s.id == q.item_id).unwrap();
            let QuestionFormat::MultipleChoice { options, answer } = &q.format else {
                panic!("story must be multiple choice");
            };
            assert_eq!(*answer, ChoiceValue::Text(story.options[story.correct].text.to_string()));
            assert_eq!(options.len(), story.options.len());
            assert_eq!(q.prompt.passage.as_deref(), Some(story.passage));
        }
    }

    #[test]
    fn speech_reads_the_passage_then_the_question() {
        let mut rng = StdRng::seed_from_u64(3);
        let bank = stories::bank();
        for q in generate(&mut rng, 1, 5, &QuizConfig::default()).unwrap() {
            let story = bank.items().iter().find(|s| s.id == q.item_id).unwrap();
            let speech = q.prompt.speech.as_deref().unwrap();
            assert!(speech.starts_with(story.passage.trim_end_matches('.')), "{speech}");
            assert!(speech.ends_with(&format!(". {}", story.question)), "{speech}");
            assert!(!speech.contains(".."), "{speech}");
        }
    }

    #[test]
    fn authored_order_is_not_always_kept() {
        let bank = stories::bank();
        let first = &bank.items()[0];
        let mut slots = std::collections::HashSet::new();
        for seed in 0..60 {
            let mut rng = StdRng::seed_from_u64(seed);
            let q = generate(&mut rng, 1, bank.len(), &QuizConfig::default())
                .unwrap()
                .into_iter()
                .find(|q| q.item_id == first.id)
                .unwrap();
            if let QuestionFormat::MultipleChoice { options, .. } = &q.format {
                slots.insert(options.iter().position(|o| o.is_correct).unwrap());
            }
        }
        assert_eq!(slots.len(), first.options.len());
    }
}
