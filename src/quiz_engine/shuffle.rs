use rand::Rng;

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffled copy of `items`.
pub fn shuffled<T: Clone, R: Rng>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle(rng, &mut out);
    out
}

/// Scramble a token sequence for an arrange question.
///
/// The result differs from `tokens` whenever at least two tokens are
/// distinct. Sequences shorter than two, or made of one repeated token, have
/// no other arrangement and come back unchanged.
pub fn scramble_tokens<R: Rng>(rng: &mut R, tokens: &[String]) -> Vec<String> {
    if !has_distinct_arrangement(tokens) {
        return tokens.to_vec();
    }

    let mut out = tokens.to_vec();
    for _ in 0..16 {
        shuffle(rng, &mut out);
        if out != tokens {
            return out;
        }
    }

    // Rotating by one only reproduces the input when every token is equal.
    out.clone_from_slice(tokens);
    out.rotate_left(1);
    out
}

/// True when `tokens` can be rearranged into a different sequence.
pub fn has_distinct_arrangement(tokens: &[String]) -> bool {
    match tokens.split_first() {
        Some((first, rest)) => rest.iter().any(|t| t != first),
        None => false,
    }
}
