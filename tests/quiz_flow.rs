use sentence_quiz::config::QuizConfig;
use sentence_quiz::data::{EmbeddedSource, QuestionSource, load_questions};
use sentence_quiz::session::{QuizSession, SessionPhase};
use sentence_quiz::summary::ResultsSummary;
use std::collections::HashSet;
use std::time::Duration;

fn offline_questions(count: usize) -> Vec<sentence_quiz::model::Question> {
    let sources: Vec<Box<dyn QuestionSource>> = vec![Box::new(EmbeddedSource)];
    load_questions(&sources, count).expect("banco embebido")
}

#[test]
fn full_session_answering_everything_correctly() {
    let questions = offline_questions(10);
    assert_eq!(questions.len(), 10);
    let ids: HashSet<_> = questions.iter().map(|q| q.question_id.clone()).collect();
    assert_eq!(ids.len(), 10);

    let config = QuizConfig {
        advance_delay: Duration::ZERO,
        ..QuizConfig::default()
    };
    let mut session = QuizSession::start(questions, config).expect("sesión");

    while !session.is_complete() {
        let answer = session
            .current_question()
            .expect("pregunta actual")
            .correct_answer
            .clone();
        for word in &answer {
            assert!(session.select_word(word));
        }
        assert!(session.submit());
    }

    assert_eq!(session.phase(), SessionPhase::Complete);
    let results = session.into_results();
    assert_eq!(results.len(), 10);

    let summary = ResultsSummary::from_results(&results, 30);
    assert_eq!(summary.score, 100);
    assert_eq!(summary.points, 100);
    assert!(summary.rows.iter().all(|r| r.correct_words.is_none()));
}

#[test]
fn mixed_session_with_timeouts_scores_half() {
    let questions = offline_questions(4);
    let mut session = QuizSession::start(questions, QuizConfig::default()).expect("sesión");

    for i in 0..4 {
        if i < 2 {
            let answer = session.current_question().unwrap().correct_answer.clone();
            for word in &answer {
                session.select_word(word);
            }
            session.submit();
            // La espera tras enviar se consume con el reloj de la sesión
            session.update(Duration::from_millis(500));
        } else {
            session.update(Duration::from_secs(30));
        }
    }

    assert!(session.is_complete());
    let summary = ResultsSummary::from_results(&session.into_results(), 30);
    assert_eq!(summary.score, 50);
    assert_eq!(summary.correct, 2);
}
