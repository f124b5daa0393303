use rand::Rng;

use crate::quiz_engine::{
    bank::{sample_items, QuestionBank},
    banks::{practice, PracticePrompt},
    config::QuizConfig,
    error::QuizError,
    helpers::question,
    models::{GameType, Prompt, Question, QuestionFormat},
};

fn generate_from<R: Rng>(
    rng: &mut R,
    game: GameType,
    bank: QuestionBank<PracticePrompt>,
    label: impl Fn(&PracticePrompt) -> String,
    count: usize,
) -> Result<Vec<Question>, QuizError> {
    let picked = sample_items(rng, &bank, count)?;

    Ok(picked
        .into_iter()
        .map(|p| {
            let text = label(p);
            let prompt = Prompt {
                speech: Some(text.clone()),
                text,
                image: p.image.map(str::to_string),
                hint: Some(p.guide.to_string()),
                ..Prompt::default()
            };
            question(
                game,
                p.id,
                "Practice",
                prompt,
                QuestionFormat::Practice {
                    target: p.target.to_string(),
                    guide: p.guide.to_string(),
                },
            )
        })
        .collect())
}

/// Trace a letter or digit.
pub fn generate_writing<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    generate_from(
        rng,
        GameType::Writing,
        practice::writing_bank(),
        |p| format!("Tulis {}", p.target),
        count,
    )
}

/// Draw a shape or object.
pub fn generate_drawing<R: Rng>(
    rng: &mut R,
    _level: u32,
    count: usize,
    _config: &QuizConfig,
) -> Result<Vec<Question>, QuizError> {
    generate_from(
        rng,
        GameType::Drawing,
        practice::drawing_bank(),
        |p| format!("Gambar {}", p.target),
        count,
    )
}
