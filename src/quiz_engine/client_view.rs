use serde_json::{json, Value};

use crate::quiz_engine::{
    models::{AnswerOption, Prompt, Question, QuestionFormat},
    session::Session,
};

/// Option as the child sees it: no `is_correct`, no value.
fn option_view(o: &AnswerOption) -> Value {
    json!({
        "id": o.id,
        "text": o.text,
        "image": o.image,
    })
}

fn prompt_view(p: &Prompt) -> Value {
    json!({
        "text": p.text,
        "visual": p.visual,
        "image": p.image,
        "hint": p.hint,
        "title": p.title,
        "passage": p.passage,
        "speech": p.speech,
    })
}

/// Answer-free body of each format.
fn format_view(f: &QuestionFormat) -> Value {
    match f {
        QuestionFormat::MultipleChoice { options, .. } => json!({
            "kind": f.kind(),
            "options": options.iter().map(option_view).collect::<Vec<_>>(),
        }),
        QuestionFormat::Arrange { tokens, unit, .. } => json!({
            "kind": f.kind(),
            "tokens": tokens,
            "unit": unit,
        }),
        QuestionFormat::Practice { target, guide } => json!({
            "kind": f.kind(),
            "target": target,
            "guide": guide,
        }),
    }
}

/// Render a question for a UI client with the correct answer stripped.
///
/// Practice targets stay visible: they are what the child traces or draws.
pub fn question_view(q: &Question) -> Value {
    json!({
        "question_id": q.question_id,
        "game": q.game,
        "prompt": prompt_view(&q.prompt),
        "format": format_view(&q.format),
    })
}

/// Snapshot of a session in progress: counters plus the current question.
pub fn session_view(s: &Session) -> Value {
    json!({
        "session_id": s.session_id,
        "game": s.game,
        "game_name": s.game.to_string(),
        "level": s.level,
        "position": s.position(),
        "total": s.len(),
        "correct_count": s.correct_count(),
        "progress": s.progress_fraction(),
        "is_complete": s.is_complete(),
        "current": s.current_question().map(question_view),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz_engine::{
        generator::new_session,
        models::{GameType, SessionRequest, Submission},
    };

    fn contains_key(v: &Value, key: &str) -> bool {
        match v {
            Value::Object(m) => m.contains_key(key) || m.values().any(|x| contains_key(x, key)),
            Value::Array(a) => a.iter().any(|x| contains_key(x, key)),
            _ => false,
        }
    }

    #[test]
    fn no_game_leaks_its_answer() {
        for game in GameType::ALL {
            let s = new_session(SessionRequest::new(game).seed(5)).unwrap();
            for q in s.questions() {
                let v = question_view(q);
                assert!(!contains_key(&v, "is_correct"), "{game:?}");
                assert!(!contains_key(&v, "answer"), "{game:?}");
                assert!(!contains_key(&v, "value"), "{game:?}");
                assert_eq!(v["question_id"], q.question_id);
            }
        }
    }

    #[test]
    fn choice_options_keep_ids_and_order() {
        let s = new_session(SessionRequest::new(GameType::ReadMatch).seed(9)).unwrap();
        let q = s.current_question().unwrap();
        let v = question_view(q);
        let QuestionFormat::MultipleChoice { options, .. } = &q.format else {
            panic!("read-match is multiple choice");
        };
        let ids: Vec<&str> = v["format"]["options"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, options.iter().map(|o| o.id.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn session_view_follows_progress() {
        let mut s = new_session(SessionRequest::new(GameType::Writing).count(2).seed(1)).unwrap();
        let v = session_view(&s);
        assert_eq!(v["position"], 0);
        assert_eq!(v["total"], 2);
        assert_eq!(v["game_name"], "Menulis");

        s.submit_answer(Submission::PracticeDone).unwrap();
        s.submit_answer(Submission::PracticeDone).unwrap();
        let v = session_view(&s);
        assert_eq!(v["is_complete"], true);
        assert_eq!(v["correct_count"], 2);
        assert!(v["current"].is_null());
    }
}
