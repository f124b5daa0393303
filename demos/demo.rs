//! Tour of all nine games.
//!
//! Run with: `cargo run --example demo`
//!
//! One seeded session per game is generated and printed: prompt, visual
//! tokens, options (with the correct one marked) or scrambled tokens. The
//! output is deterministic because every session uses a fixed seed.
//!
//! ## Key concepts demonstrated
//!
//! - `SessionRequest::new(game)`: minimal constructor; defaults to level 1,
//!   the configured question count and an entropy seed.
//! - `.seed(u64)` makes the output fully deterministic.
//! - Each question includes a `branch_key` for progress tracking.
//! - `client_view::question_view` is what a UI client receives: the same
//!   question with the answer stripped.

use edu_quiz_gen::{client_view, new_session, GameType, Question, QuestionFormat, SessionRequest};

fn print_question(n: usize, q: &Question) {
    println!("  {n}. [{}] {}", q.branch_key, q.prompt.text);
    if let Some(title) = &q.prompt.title {
        println!("     « {title} »");
    }
    if let Some(passage) = &q.prompt.passage {
        println!("     {passage}");
    }
    if !q.prompt.visual.is_empty() {
        println!("     {}", q.prompt.visual.join(" "));
    }
    if let Some(image) = &q.prompt.image {
        println!("     gambar: {image}");
    }

    match &q.format {
        QuestionFormat::MultipleChoice { options, .. } => {
            for o in options {
                let marker = if o.is_correct { "✓" } else { " " };
                let image = o.image.as_deref().unwrap_or("");
                println!("     {marker} {}) {} {}", o.id, o.text, image);
            }
        }
        QuestionFormat::Arrange { tokens, unit, .. } => {
            println!("     tokens: {:?}  ({unit:?})", tokens);
            println!("     jawaban: {}", q.answer_text());
        }
        QuestionFormat::Practice { target, guide } => {
            println!("     target: {target}  panduan: {guide}");
        }
    }
}

fn main() {
    for (i, game) in GameType::ALL.into_iter().enumerate() {
        let session = match new_session(SessionRequest::new(game).level(2).seed(100 + i as u64)) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{game}: {e}");
                continue;
            }
        };

        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("  {game}  ID: {}  Level: {}", session.session_id, session.level);
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        for (n, q) in session.questions().iter().enumerate() {
            print_question(n + 1, q);
        }
        println!();
    }

    // What a UI client sees for the first counting question.
    if let Ok(session) = new_session(SessionRequest::new(GameType::Counting).seed(100)) {
        if let Some(q) = session.current_question() {
            let view = client_view::question_view(q);
            match serde_json::to_string_pretty(&view) {
                Ok(json) => println!("Client view:\n{json}"),
                Err(e) => eprintln!("client view: {e}"),
            }
        }
    }
}
