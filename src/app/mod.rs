use crate::config::QuizConfig;
use crate::data::{EmbeddedSource, QuestionSource};
use crate::model::{QuizResult, Screen};
use crate::remote::RemoteSource;
use crate::session::QuizSession;
use crate::summary::ResultsSummary;
use log::{info, warn};
use std::sync::Arc;
use std::time::Instant;

// Submódulos
pub mod loading;

pub use loading::{LoadState, QuestionLoader};

/// Caparazón de pantallas: Intro -> Playing -> Feedback -> Intro.
pub struct QuizApp {
    pub config: QuizConfig,
    pub screen: Screen,
    pub session: Option<QuizSession>,
    pub results: Vec<QuizResult>,
    pub load: LoadState,
    pub load_attempts: u32,
    loader: Arc<QuestionLoader>,
    last_frame: Option<Instant>,
}

impl QuizApp {
    pub fn new(config: QuizConfig) -> Self {
        let sources: Vec<Box<dyn QuestionSource>> = vec![
            Box::new(RemoteSource::from_config(&config)),
            Box::new(EmbeddedSource),
        ];
        let loader = QuestionLoader::new(sources, config.questions_per_session);
        Self::with_loader(config, loader)
    }

    pub fn with_loader(config: QuizConfig, loader: QuestionLoader) -> Self {
        Self {
            config,
            screen: Screen::Intro,
            session: None,
            results: Vec::new(),
            load: LoadState::Idle,
            load_attempts: 0,
            loader: Arc::new(loader),
            last_frame: None,
        }
    }

    // ---------- Transiciones ----------

    pub fn start_game(&mut self) {
        if self.screen != Screen::Intro {
            warn!("start_game ignorado en {:?}", self.screen);
            return;
        }
        info!("Empieza la partida");
        self.screen = Screen::Playing;
        self.session = None;
        self.results.clear();
        self.load_attempts = 0;
        self.request_questions();
    }

    pub fn end_game(&mut self, results: Vec<QuizResult>) {
        if self.screen != Screen::Playing {
            warn!("end_game ignorado en {:?}", self.screen);
            return;
        }
        info!("Partida terminada con {} resultados", results.len());
        self.results = results;
        self.session = None;
        self.load = LoadState::Idle;
        self.last_frame = None;
        self.screen = Screen::Feedback;
    }

    pub fn back_to_intro(&mut self) {
        if self.screen != Screen::Feedback {
            warn!("back_to_intro ignorado en {:?}", self.screen);
            return;
        }
        self.results.clear();
        self.screen = Screen::Intro;
    }

    /// Salir de la pantalla de carga sin partida (carga fallida o lenta).
    /// Recorre Playing -> Feedback (sin resultados) -> Intro; `end_game`
    /// suelta el receptor y el resultado del hilo se descarta.
    pub fn cancel_loading(&mut self) {
        if self.screen != Screen::Playing || self.session.is_some() {
            warn!("cancel_loading ignorado en {:?}", self.screen);
            return;
        }
        self.end_game(Vec::new());
        self.back_to_intro();
    }

    // ---------- Partida ----------

    pub fn quit_game(&mut self) {
        if let Some(session) = self.session.take() {
            let results = session.quit();
            self.end_game(results);
        }
    }

    /// Comprueba si la sesión ha terminado y, si es así, pasa a Feedback.
    pub fn finish_if_complete(&mut self) {
        if self.session.as_ref().is_some_and(QuizSession::is_complete) {
            if let Some(session) = self.session.take() {
                self.end_game(session.into_results());
            }
        }
    }

    /// Un frame de la partida: recoge la carga, avanza el reloj y cierra si
    /// la sesión acabó.
    pub fn tick(&mut self, now: Instant) {
        if self.screen != Screen::Playing {
            self.last_frame = None;
            return;
        }
        self.poll_loading();

        let elapsed = self
            .last_frame
            .map(|prev| now.saturating_duration_since(prev))
            .unwrap_or_default();
        self.last_frame = Some(now);

        if let Some(session) = self.session.as_mut() {
            session.update(elapsed);
        }
        self.finish_if_complete();
    }

    pub fn summary(&self) -> ResultsSummary {
        ResultsSummary::from_results(&self.results, self.config.seconds_per_question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::read_questions_embedded;
    use std::time::Duration;

    fn app() -> QuizApp {
        let sources: Vec<Box<dyn QuestionSource>> = vec![Box::new(EmbeddedSource)];
        QuizApp::with_loader(QuizConfig::default(), QuestionLoader::new(sources, 10))
    }

    fn playing_app(n: usize) -> QuizApp {
        let mut app = app();
        app.screen = Screen::Playing;
        let mut questions = read_questions_embedded().expect("banco embebido");
        questions.truncate(n);
        app.session = Some(QuizSession::start(questions, app.config.clone()).expect("sesión"));
        app
    }

    #[test]
    fn out_of_order_transitions_are_refused() {
        let mut app = app();
        app.end_game(vec![]);
        assert_eq!(app.screen, Screen::Intro);
        app.back_to_intro();
        assert_eq!(app.screen, Screen::Intro);

        let mut app = playing_app(2);
        app.start_game();
        assert_eq!(app.screen, Screen::Playing);
        assert!(app.session.is_some());
    }

    #[test]
    fn quit_hands_partial_results_to_feedback() {
        let mut app = playing_app(4);
        app.session.as_mut().unwrap().on_timer_end();
        app.quit_game();
        assert_eq!(app.screen, Screen::Feedback);
        assert!(app.session.is_none());
        assert_eq!(app.results.len(), 1);
        assert_eq!(app.summary().score, 0);
    }

    #[test]
    fn quit_before_answering_yields_empty_summary() {
        let mut app = playing_app(3);
        app.quit_game();
        assert_eq!(app.screen, Screen::Feedback);
        let summary = app.summary();
        assert!(!summary.has_results());
        assert_eq!(summary.score, 0);
    }

    #[test]
    fn expiring_every_question_reaches_feedback() {
        let mut app = playing_app(2);
        let start = Instant::now();
        app.tick(start);
        app.tick(start + Duration::from_secs(31));
        app.tick(start + Duration::from_secs(62));
        assert_eq!(app.screen, Screen::Feedback);
        assert_eq!(app.results.len(), 2);
        assert!(app.results.iter().all(|r| !r.is_correct));
    }

    #[test]
    fn restart_discards_results() {
        let mut app = playing_app(1);
        app.quit_game();
        app.back_to_intro();
        assert_eq!(app.screen, Screen::Intro);
        assert!(app.results.is_empty());
    }
}
