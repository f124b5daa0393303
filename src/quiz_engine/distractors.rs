//! Wrong-but-plausible options and the shuffled option list.
//!
//! Numeric answers get neighbours of the correct value (±2), topped up with
//! uniform draws from the same range. Categorical answers get other items of
//! the same bank. Either way the correct value is mixed in with a
//! Fisher-Yates shuffle, so its slot is uniform over the option list.

use std::collections::HashSet;
use std::hash::Hash;

use rand::Rng;

use crate::quiz_engine::{
    error::QuizError,
    helpers::option_id,
    models::{AnswerOption, ChoiceValue},
    shuffle::shuffle,
};

/// An option before it is placed and labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub value: ChoiceValue,
    pub text: String,
    pub image: Option<String>,
}

impl Candidate {
    pub fn number(n: u32) -> Self {
        Candidate { value: ChoiceValue::Number(n), text: n.to_string(), image: None }
    }

    pub fn text(s: &str) -> Self {
        Candidate { value: ChoiceValue::Text(s.to_string()), text: s.to_string(), image: None }
    }

    pub fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }
}

/// `wanted - 1` distinct wrong values in `0..=max(max, correct)`.
pub fn numeric_distractors<R: Rng>(
    rng: &mut R,
    correct: u32,
    max: u32,
    wanted: usize,
) -> Result<Vec<u32>, QuizError> {
    let upper = max.max(correct);
    let need = wanted.saturating_sub(1);
    let available = upper as usize + 1;
    if wanted > available {
        return Err(QuizError::InsufficientItems { bank: "numeric_range", requested: wanted, available });
    }

    let mut out: Vec<u32> = Vec::with_capacity(need);
    let push = |v: u32, out: &mut Vec<u32>| {
        if v != correct && !out.contains(&v) && out.len() < need {
            out.push(v);
        }
    };

    for _ in 0..64 {
        if out.len() >= need {
            break;
        }
        let offset = rng.gen_range(-2i64..=2);
        let near = (correct as i64 + offset).clamp(0, upper as i64) as u32;
        push(near, &mut out);
        if out.len() < need {
            push(rng.gen_range(0..=upper), &mut out);
        }
    }

    // Only reachable for very tight ranges.
    for v in 0..=upper {
        if out.len() >= need {
            break;
        }
        push(v, &mut out);
    }

    Ok(out)
}

/// `wanted - 1` other items from `pool`, none sharing a key with `correct`
/// or with each other.
pub fn categorical_distractors<'a, T, K, R, F>(
    rng: &mut R,
    bank: &'static str,
    pool: &'a [T],
    correct: &T,
    wanted: usize,
    key: F,
) -> Result<Vec<&'a T>, QuizError>
where
    K: Eq + Hash,
    R: Rng,
    F: Fn(&T) -> K,
{
    let need = wanted.saturating_sub(1);
    let mut order: Vec<usize> = (0..pool.len()).collect();
    shuffle(rng, &mut order);

    let mut seen: HashSet<K> = HashSet::new();
    seen.insert(key(correct));

    let mut out = Vec::with_capacity(need);
    for i in order {
        if out.len() >= need {
            break;
        }
        if seen.insert(key(&pool[i])) {
            out.push(&pool[i]);
        }
    }

    if out.len() < need {
        return Err(QuizError::InsufficientItems { bank, requested: wanted, available: out.len() + 1 });
    }
    Ok(out)
}

/// Shuffle `correct` in among `distractors` and label the slots "A", "B", ...
pub fn assemble_options<R: Rng>(
    rng: &mut R,
    correct: Candidate,
    distractors: Vec<Candidate>,
) -> Vec<AnswerOption> {
    let answer = correct.value.clone();
    let mut all = Vec::with_capacity(distractors.len() + 1);
    all.push(correct);
    all.extend(distractors);
    shuffle(rng, &mut all);

    all.into_iter()
        .enumerate()
        .map(|(i, c)| AnswerOption {
            id: option_id(i),
            is_correct: c.value == answer,
            text: c.text,
            image: c.image,
            value: c.value,
        })
        .collect()
}
