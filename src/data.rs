// src/data.rs

use crate::error::LoadError;
use crate::model::{ANSWER_SLOTS, ApiResponse, Question, STATUS_SUCCESS};
use crate::prompt::count_blanks;
use log::{info, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;

/// Algo capaz de entregar el banco completo de preguntas.
pub trait QuestionSource: Send + Sync {
    fn name(&self) -> &str;
    fn fetch(&self) -> Result<Vec<Question>, LoadError>;
}

/// Banco de preguntas embebido en el binario (mismo formato que la API).
pub struct EmbeddedSource;

impl QuestionSource for EmbeddedSource {
    fn name(&self) -> &str {
        "embebido"
    }

    fn fetch(&self) -> Result<Vec<Question>, LoadError> {
        read_questions_embedded()
    }
}

pub fn read_questions_embedded() -> Result<Vec<Question>, LoadError> {
    let file_content = include_str!("data/questions.json");
    parse_envelope(file_content)
}

/// Interpreta el envoltorio `{status, data: {questions}, message}`.
/// Solo vale `SUCCESS` con al menos una pregunta.
pub fn parse_envelope(text: &str) -> Result<Vec<Question>, LoadError> {
    let response: ApiResponse = serde_json::from_str(text)?;

    if response.status != STATUS_SUCCESS {
        return Err(LoadError::MalformedPayload(format!(
            "estado '{}'{}",
            response.status,
            response
                .message
                .as_deref()
                .map(|m| format!(": {m}"))
                .unwrap_or_default()
        )));
    }

    let data = response
        .data
        .ok_or_else(|| LoadError::MalformedPayload("falta el campo 'data'".into()))?;

    if data.questions.is_empty() {
        return Err(LoadError::EmptyQuestionSet);
    }
    Ok(data.questions)
}

/// Una pregunta es jugable si tiene 4 huecos, 4 palabras correctas y el
/// banco contiene todas esas palabras.
pub fn is_playable(question: &Question) -> bool {
    if question.correct_answer.len() != ANSWER_SLOTS {
        return false;
    }
    if count_blanks(&question.question) != ANSWER_SLOTS {
        return false;
    }
    let mut bank = question.options.clone();
    question.correct_answer.iter().all(|word| {
        match bank.iter().position(|w| w == word) {
            Some(pos) => {
                bank.swap_remove(pos);
                true
            }
            None => false,
        }
    })
}

/// Quita duplicados por id (se queda el primero) y preguntas no jugables.
pub fn sanitize(questions: Vec<Question>) -> Vec<Question> {
    let mut seen = HashSet::new();
    questions
        .into_iter()
        .filter(|q| {
            if !seen.insert(q.question_id.clone()) {
                warn!("Pregunta duplicada descartada: {}", q.question_id);
                return false;
            }
            if !is_playable(q) {
                warn!("Pregunta no jugable descartada: {}", q.question_id);
                return false;
            }
            true
        })
        .collect()
}

/// Subconjunto aleatorio sin reemplazo. Si hay menos de `count`, se
/// devuelven todas (barajadas).
pub fn select_questions<R: Rng + ?Sized>(
    mut questions: Vec<Question>,
    count: usize,
    rng: &mut R,
) -> Vec<Question> {
    questions.shuffle(rng);
    questions.truncate(count);
    questions
}

/// Prueba las fuentes en orden y devuelve `count` preguntas de la primera
/// que funcione.
pub fn load_questions(
    sources: &[Box<dyn QuestionSource>],
    count: usize,
) -> Result<Vec<Question>, LoadError> {
    let mut attempts = 0;
    for source in sources {
        attempts += 1;
        match source.fetch().map(sanitize) {
            Ok(questions) if !questions.is_empty() => {
                info!(
                    "{} preguntas cargadas desde la fuente {}",
                    questions.len(),
                    source.name()
                );
                return Ok(select_questions(questions, count, &mut rand::thread_rng()));
            }
            Ok(_) => warn!(
                "La fuente {} no tiene preguntas jugables, probando la siguiente",
                source.name()
            ),
            Err(err) => warn!(
                "Error cargando preguntas desde {}: {err}, probando la siguiente",
                source.name()
            ),
        }
    }
    Err(LoadError::Unavailable { attempts })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: &str) -> Question {
        Question {
            question_id: id.to_string(),
            question: "I _______ to _______ a _______ every _______.".to_string(),
            options: vec!["like", "read", "book", "night", "slowly"]
                .into_iter()
                .map(String::from)
                .collect(),
            correct_answer: vec!["like", "read", "book", "night"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }

    struct Failing;
    impl QuestionSource for Failing {
        fn name(&self) -> &str {
            "falla"
        }
        fn fetch(&self) -> Result<Vec<Question>, LoadError> {
            Err(LoadError::HttpStatus(503))
        }
    }

    struct Fixed(Vec<Question>);
    impl QuestionSource for Fixed {
        fn name(&self) -> &str {
            "fija"
        }
        fn fetch(&self) -> Result<Vec<Question>, LoadError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn embedded_bank_respects_four_blank_invariant() {
        let questions = read_questions_embedded().expect("banco embebido válido");
        assert!(questions.len() >= 10);
        for q in &questions {
            assert_eq!(q.correct_answer.len(), ANSWER_SLOTS, "{}", q.question_id);
            assert_eq!(count_blanks(&q.question), ANSWER_SLOTS, "{}", q.question_id);
            assert!(is_playable(q), "{}", q.question_id);
        }
    }

    #[test]
    fn envelope_requires_success_status() {
        let body = r#"{"status":"ERROR","data":null,"message":"down"}"#;
        assert!(matches!(
            parse_envelope(body),
            Err(LoadError::MalformedPayload(_))
        ));
    }

    #[test]
    fn envelope_with_empty_list_is_rejected() {
        let body = r#"{"status":"SUCCESS","data":{"testId":"t","questions":[]},"message":""}"#;
        assert!(matches!(parse_envelope(body), Err(LoadError::EmptyQuestionSet)));
    }

    #[test]
    fn garbage_payload_is_malformed() {
        assert!(matches!(
            parse_envelope("<html>not json</html>"),
            Err(LoadError::MalformedPayload(_))
        ));
        assert!(matches!(
            parse_envelope(r#"{"status":"SUCCESS"}"#),
            Err(LoadError::MalformedPayload(_))
        ));
    }

    #[test]
    fn selection_is_bounded_and_distinct() {
        let all: Vec<Question> = (0..25).map(|i| question(&format!("q{i}"))).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let picked = select_questions(all, 10, &mut rng);
        assert_eq!(picked.len(), 10);
        let ids: HashSet<_> = picked.iter().map(|q| q.question_id.clone()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn selection_with_fewer_questions_returns_all() {
        let all: Vec<Question> = (0..3).map(|i| question(&format!("q{i}"))).collect();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_questions(all, 10, &mut rng).len(), 3);
    }

    #[test]
    fn sanitize_drops_duplicates_and_unplayable() {
        let mut broken = question("b");
        broken.correct_answer.pop();
        let mut missing_word = question("m");
        missing_word.options.retain(|w| w != "book");

        let cleaned = sanitize(vec![question("a"), question("a"), broken, missing_word]);
        assert_eq!(cleaned.len(), 1);
        assert_eq!(cleaned[0].question_id, "a");
    }

    #[test]
    fn falls_back_when_primary_fails() {
        let sources: Vec<Box<dyn QuestionSource>> =
            vec![Box::new(Failing), Box::new(Fixed(vec![question("x")]))];
        let loaded = load_questions(&sources, 10).expect("fallback");
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].question_id, "x");
    }

    #[test]
    fn all_sources_failing_is_unavailable() {
        let sources: Vec<Box<dyn QuestionSource>> =
            vec![Box::new(Failing), Box::new(Fixed(vec![]))];
        assert!(matches!(
            load_questions(&sources, 10),
            Err(LoadError::Unavailable { attempts: 2 })
        ));
    }
}
