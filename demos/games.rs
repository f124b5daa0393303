//! A simulated child playing through a few sessions.
//!
//! Run with: `RUST_LOG=edu_quiz_gen=debug cargo run --example games`
//!
//! The "child" answers correctly with a fixed probability. Each session's
//! progress deltas are applied to a `Progress` store, so the counting level
//! climbs after every finished session and the next session gets a wider
//! number range. The store is printed as JSON at the end, the way a host
//! app would persist it.

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use edu_quiz_gen::{
    new_session, GameType, Progress, ProgressSink, Question, QuestionFormat, QuizError,
    QuizEvent, SessionRequest, Submission,
};

/// Right answer with probability `skill`, otherwise a wrong one.
fn answer<R: Rng>(rng: &mut R, q: &Question, skill: f64) -> Submission {
    let right = rng.gen_bool(skill);
    match &q.format {
        QuestionFormat::MultipleChoice { options, answer } => {
            if right {
                return Submission::Choice(answer.clone());
            }
            options
                .iter()
                .find(|o| !o.is_correct)
                .map(|o| Submission::OptionId(o.id.clone()))
                .unwrap_or_else(|| Submission::Choice(answer.clone()))
        }
        QuestionFormat::Arrange { tokens, answer, .. } => {
            Submission::Arrangement(if right { answer.clone() } else { tokens.clone() })
        }
        QuestionFormat::Practice { .. } => Submission::PracticeDone,
    }
}

fn play(progress: &mut Progress, game: GameType, seed: u64, skill: f64) -> Result<(), QuizError> {
    let mut child = StdRng::seed_from_u64(seed ^ 0x5EED);
    let level = progress.level(game);
    let mut session = new_session(SessionRequest::new(game).level(level).seed(seed))?;

    println!("{game} (level {level}, {})", session.session_id);
    while let Some(q) = session.current_question() {
        let sub = answer(&mut child, q, skill);
        let prompt = q.prompt.text.clone();
        let outcome = session.submit_answer(sub)?;
        let mark = if outcome.is_correct { "✓" } else { "✗" };
        println!("  {mark} {prompt}  → {}", outcome.correct_answer);

        for event in &outcome.events {
            if let QuizEvent::SessionComplete { stars_earned } = event {
                println!("  {}", "★".repeat(*stars_earned as usize));
            }
        }
        progress.apply_all(&outcome.progress);
    }
    Ok(())
}

fn main() -> Result<(), QuizError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut progress = Progress::new();
    progress.player_name = "Dinda".into();

    for (seed, skill) in [(1, 0.9), (2, 0.7), (3, 0.95)] {
        play(&mut progress, GameType::Counting, seed, skill)?;
    }
    play(&mut progress, GameType::SyllableArrange, 10, 0.8)?;
    play(&mut progress, GameType::Story, 11, 0.6)?;
    play(&mut progress, GameType::Writing, 12, 1.0)?;

    println!();
    println!("{} has {} stars", progress.player_name, progress.total_stars());
    println!("{}", progress.to_json()?);
    Ok(())
}
