use rand::{rngs::StdRng, Rng, RngCore, SeedableRng};
use tracing::debug;

use crate::quiz_engine::{
    config::{QuizConfig, MAX_SESSION_QUESTIONS},
    error::QuizError,
    games,
    models::{GameType, Question, SessionRequest},
    session::Session,
};

/// Generate a session ID from game prefix + RNG draw.
fn make_session_id(game: GameType, rng: &mut impl RngCore) -> String {
    format!("{}-{:08X}", game.id_prefix(), rng.next_u32())
}

fn check_count(count: usize) -> Result<(), QuizError> {
    if count == 0 || count > MAX_SESSION_QUESTIONS {
        return Err(QuizError::InvalidConfig(format!(
            "a session needs between 1 and {MAX_SESSION_QUESTIONS} questions"
        )));
    }
    Ok(())
}

/// Core dispatch: routes to the strategy for `game`.
pub fn generate_questions<R: Rng>(
    rng: &mut R,
    game: GameType,
    level: u32,
    count: usize,
    config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    config.validate()?;
    check_count(count)?;

    match game {
        GameType::Counting =>
            games::counting::generate(rng, level, count, config),

        GameType::Reading =>
            games::reading::generate(rng, level, count, config),

        GameType::WordArrange =>
            games::arrange::generate_letters(rng, level, count, config),

        GameType::SyllableArrange =>
            games::arrange::generate_syllables(rng, level, count, config),

        GameType::ReadMatch =>
            games::read_match::generate(rng, level, count, config),

        GameType::SentenceArrange =>
            games::arrange::generate_sentences(rng, level, count, config),

        GameType::Story =>
            games::story::generate(rng, level, count, config),

        GameType::Writing =>
            games::practice::generate_writing(rng, level, count, config),

        GameType::Drawing =>
            games::practice::generate_drawing(rng, level, count, config),
    }
}

/// Build a fresh session with the default [`QuizConfig`].
pub fn new_session(request: SessionRequest) -> Result<Session, QuizError> {
    new_session_with_config(request, &QuizConfig::default())
}

pub fn new_session_with_config(
    request: SessionRequest,
    config: &QuizConfig,
) -> Result<Session, QuizError> {
    config.validate()?;
    let count = request.count.unwrap_or(config.question_count);
    check_count(count)?;
    let level = request.level.max(1);

    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };

    let session_id = make_session_id(request.game, &mut rng);
    let mut questions = generate_questions(&mut rng, request.game, level, count, config)?;
    for (i, q) in questions.iter_mut().enumerate() {
        q.question_id = format!("{}/{}", session_id, i + 1);
    }

    debug!(
        session = %session_id,
        game = ?request.game,
        level,
        count = questions.len(),
        "generated session"
    );

    Ok(Session::new(session_id, request.game, level, questions))
}
