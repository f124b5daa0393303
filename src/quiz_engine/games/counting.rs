use rand::Rng;

use crate::quiz_engine::{
    bank::{sample_from, sample_items},
    banks::{counting, CountingTheme},
    config::QuizConfig,
    distractors::{numeric_distractors, Candidate},
    error::QuizError,
    helpers::{multiple_choice, question, repeat_token},
    models::{GameType, Prompt, Question},
    shuffle::shuffle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Count,
    Addition,
    Subtraction,
}

/// Seven-question sessions split 3 count / 2 addition / 2 subtraction;
/// other lengths keep the same proportions.
fn kind_for(i: usize, count: usize) -> Kind {
    match i * 7 / count {
        0..=2 => Kind::Count,
        3..=4 => Kind::Addition,
        _     => Kind::Subtraction,
    }
}

fn addition_pairs(addend_max: u32) -> Vec<(u32, u32)> {
    (1..=addend_max)
        .flat_map(|a| (1..=addend_max).map(move |b| (a, b)))
        .collect()
}

/// Minuend from 3 up to `max`, subtrahend strictly below it and at least 1.
fn subtraction_pairs(max: u32) -> Vec<(u32, u32)> {
    (3..=max)
        .flat_map(|m| (1..m).map(move |s| (m, s)))
        .collect()
}

fn count_question<R: Rng>(
    rng: &mut R,
    theme: &CountingTheme,
    n: u32,
    max: u32,
    options: usize,
) -> Result<Question, QuizError> {
    let wrong = numeric_distractors(rng, n, max, options)?;
    let text = format!("Berapa banyak {}?", theme.emoji);
    let prompt = Prompt {
        speech: Some(text.clone()),
        text,
        visual: repeat_token(theme.emoji, n),
        ..Prompt::default()
    };
    Ok(question(
        GameType::Counting,
        format!("count:{}:{}", theme.id, n),
        "Count",
        prompt,
        multiple_choice(rng, Candidate::number(n), wrong.into_iter().map(Candidate::number).collect()),
    ))
}

fn addition_question<R: Rng>(
    rng: &mut R,
    (a, b): (u32, u32),
    max: u32,
    options: usize,
) -> Result<Question, QuizError> {
    let sum = a + b;
    let wrong = numeric_distractors(rng, sum, max, options)?;
    let (first, second) = counting::ADDITION_TOKENS;
    let mut visual = repeat_token(first, a);
    visual.extend(repeat_token(second, b));
    let text = format!("{a} + {b} = ?");
    let prompt = Prompt {
        speech: Some(format!("{a} tambah {b} sama dengan berapa?")),
        text,
        visual,
        ..Prompt::default()
    };
    Ok(question(
        GameType::Counting,
        format!("add:{a}+{b}"),
        "Addition",
        prompt,
        multiple_choice(rng, Candidate::number(sum), wrong.into_iter().map(Candidate::number).collect()),
    ))
}

fn subtraction_question<R: Rng>(
    rng: &mut R,
    (m, s): (u32, u32),
    max: u32,
    options: usize,
) -> Result<Question, QuizError> {
    let diff = m - s;
    let wrong = numeric_distractors(rng, diff, max, options)?;
    let (left, taken) = counting::SUBTRACTION_TOKENS;
    let mut visual = repeat_token(left, diff);
    visual.extend(repeat_token(taken, s));
    let prompt = Prompt {
        speech: Some(format!("{m} kurang {s} sama dengan berapa?")),
        text: format!("{m} - {s} = ?"),
        visual,
        ..Prompt::default()
    };
    Ok(question(
        GameType::Counting,
        format!("sub:{m}-{s}"),
        "Subtraction",
        prompt,
        multiple_choice(rng, Candidate::number(diff), wrong.into_iter().map(Candidate::number).collect()),
    ))
}

pub fn generate<R: Rng>(
    rng: &mut R,
    level: u32,
    count: usize,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    let curve = &config.counting;
    let max = curve.max_value(level);
    let options = config.choice_options;

    let kinds: Vec<Kind> = (0..count).map(|i| kind_for(i, count)).collect();
    let n_of = |k: Kind| kinds.iter().filter(|&&x| x == k).count();

    // Every numeric item is drawn without replacement, like bank items.
    let themes = sample_items(rng, &counting::bank(), n_of(Kind::Count))?;
    let numbers: Vec<u32> = (1..=max).collect();
    let counts = sample_from(rng, "counting_numbers", &numbers, n_of(Kind::Count))?;
    let sums = sample_from(rng, "addition_pairs", &addition_pairs(curve.addend_max(level)), n_of(Kind::Addition))?;
    let diffs = sample_from(rng, "subtraction_pairs", &subtraction_pairs(max), n_of(Kind::Subtraction))?;

    let mut questions = Vec::with_capacity(count);
    for (theme, n) in themes.into_iter().zip(counts) {
        questions.push(count_question(rng, theme, n, max, options)?);
    }
    for pair in sums {
        questions.push(addition_question(rng, pair, max.saturating_add(curve.addition_headroom), options)?);
    }
    for pair in diffs {
        questions.push(subtraction_question(rng, pair, max, options)?);
    }

    shuffle(rng, &mut questions);
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::models::{ChoiceValue, QuestionFormat};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn answer_of(q: &Question) -> u32 {
        match &q.format {
            QuestionFormat::MultipleChoice { answer: ChoiceValue::Number(n), .. } => *n,
            other => panic!("unexpected format {other:?}"),
        }
    }

    fn operands(q: &Question) -> (u32, u32) {
        let body = q.item_id.split(':').nth(1).unwrap();
        let (a, b) = body.split_once(['+', '-']).unwrap();
        (a.parse().unwrap(), b.parse().unwrap())
    }

    #[test]
    fn seven_questions_split_three_two_two() {
        let kinds: Vec<Kind> = (0..7).map(|i| kind_for(i, 7)).collect();
        assert_eq!(kinds.iter().filter(|&&k| k == Kind::Count).count(), 3);
        assert_eq!(kinds.iter().filter(|&&k| k == Kind::Addition).count(), 2);
        assert_eq!(kinds.iter().filter(|&&k| k == Kind::Subtraction).count(), 2);
    }

    #[test]
    fn five_questions_split_three_one_one() {
        let kinds: Vec<Kind> = (0..5).map(|i| kind_for(i, 5)).collect();
        assert_eq!(kinds, vec![Kind::Count, Kind::Count, Kind::Count, Kind::Addition, Kind::Subtraction]);
    }

    #[test]
    fn level_one_addition_operands_stay_in_one_to_five() {
        let config = QuizConfig::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let qs = generate(&mut rng, 1, 7, &config).unwrap();
            for q in qs.iter().filter(|q| q.branch_key == "Addition") {
                let (a, b) = operands(q);
                assert!((1..=5).contains(&a) && (1..=5).contains(&b), "{}", q.item_id);
                let sum = answer_of(q);
                assert_eq!(sum, a + b);
                assert!((2..=10).contains(&sum));
            }
        }
    }

    #[test]
    fn subtraction_never_goes_below_one() {
        let config = QuizConfig::default();
        for level in 1..=6 {
            for seed in 0..40 {
                let mut rng = StdRng::seed_from_u64(seed);
                let qs = generate(&mut rng, level, 7, &config).unwrap();
                for q in qs.iter().filter(|q| q.branch_key == "Subtraction") {
                    let (m, s) = operands(q);
                    assert!(m > s && s >= 1, "{}", q.item_id);
                    assert_eq!(answer_of(q), m - s);
                }
            }
        }
    }

    #[test]
    fn counts_stay_within_level_range() {
        let config = QuizConfig::default();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            for q in generate(&mut rng, 1, 5, &config).unwrap() {
                if q.branch_key == "Count" {
                    let n = answer_of(&q);
                    assert!((1..=7).contains(&n));
                    assert_eq!(q.prompt.visual.len(), n as usize);
                }
            }
        }
    }

    #[test]
    fn too_many_count_questions_for_the_range_is_an_error() {
        let mut rng = StdRng::seed_from_u64(3);
        // 20 questions need 9 distinct counts but level 1 only has 1..=7.
        assert!(matches!(
            generate(&mut rng, 1, 20, &QuizConfig::default()),
            Err(QuizError::InsufficientItems { bank: "counting_numbers", .. })
        ));
    }
}
