//! Read-only item catalogues and without-replacement sampling.
//!
//! Every game draws its session from a [`QuestionBank`]. Sampling never
//! reuses an item inside one draw, and a request larger than the bank is an
//! error rather than a silent truncation, so the caller can fall back to a
//! smaller session.

use rand::Rng;
use tracing::warn;

use crate::quiz_engine::error::QuizError;

/// Anything stored in a bank exposes an id that is unique within that bank.
pub trait BankItem {
    fn id(&self) -> &str;
}

impl BankItem for &'static str {
    fn id(&self) -> &str {
        self
    }
}

/// A named, static slice of items.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank<T: 'static> {
    name: &'static str,
    items: &'static [T],
}

impl<T: 'static> QuestionBank<T> {
    pub const fn new(name: &'static str, items: &'static [T]) -> Self {
        QuestionBank { name, items }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn items(&self) -> &'static [T] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Draw `count` distinct items from `bank` in random order.
pub fn sample_items<T, R: Rng>(
    rng: &mut R,
    bank: &QuestionBank<T>,
    count: usize,
) -> Result<Vec<&'static T>, QuizError> {
    let picks = sample_indices(rng, bank.name, bank.len(), count)?;
    Ok(picks.into_iter().map(|i| &bank.items[i]).collect())
}

/// Same as [`sample_items`] for a candidate list built at runtime
/// (e.g. the numeric items derived for one level).
pub fn sample_from<T: Clone, R: Rng>(
    rng: &mut R,
    name: &'static str,
    candidates: &[T],
    count: usize,
) -> Result<Vec<T>, QuizError> {
    let picks = sample_indices(rng, name, candidates.len(), count)?;
    Ok(picks.into_iter().map(|i| candidates[i].clone()).collect())
}

/// Partial Fisher-Yates over `0..len`: the first `count` slots of the
/// permutation are a uniform sample without replacement.
fn sample_indices<R: Rng>(
    rng: &mut R,
    name: &'static str,
    len: usize,
    count: usize,
) -> Result<Vec<usize>, QuizError> {
    if count > len {
        warn!(bank = name, requested = count, available = len, "bank too small for request");
        return Err(QuizError::InsufficientItems { bank: name, requested: count, available: len });
    }

    let mut idx: Vec<usize> = (0..len).collect();
    for i in 0..count {
        let j = rng.gen_range(i..len);
        idx.swap(i, j);
    }
    idx.truncate(count);
    Ok(idx)
}
