use super::*;
use crate::data::load_questions;
use crate::error::LoadError;
use crate::model::Question;
use std::sync::mpsc::{self, Receiver, TryRecvError};

type LoadOutcome = Result<Vec<Question>, LoadError>;

/// Fuentes en orden de preferencia y tamaño de la partida.
pub struct QuestionLoader {
    sources: Vec<Box<dyn QuestionSource>>,
    count: usize,
}

impl QuestionLoader {
    pub fn new(sources: Vec<Box<dyn QuestionSource>>, count: usize) -> Self {
        Self { sources, count }
    }

    pub fn load(&self) -> LoadOutcome {
        load_questions(&self.sources, self.count)
    }
}

pub enum LoadState {
    Idle,
    Pending(Receiver<LoadOutcome>),
    Failed(String),
}

impl LoadState {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

impl QuizApp {
    /// Lanza la carga en un hilo aparte; el resultado se recoge en
    /// `poll_loading` sin bloquear la interfaz.
    pub(crate) fn request_questions(&mut self) {
        if self.load.is_pending() {
            return;
        }
        self.load_attempts += 1;
        info!("Cargando preguntas (intento {})", self.load_attempts);

        let (tx, rx) = mpsc::channel();
        let loader = Arc::clone(&self.loader);
        std::thread::spawn(move || {
            // Si ya nadie escucha (se volvió al inicio) el envío falla y da igual
            let _ = tx.send(loader.load());
        });
        self.load = LoadState::Pending(rx);
    }

    pub fn poll_loading(&mut self) {
        let outcome = match &self.load {
            LoadState::Pending(rx) => match rx.try_recv() {
                Ok(outcome) => outcome,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => Err(LoadError::Unavailable { attempts: 0 }),
            },
            _ => return,
        };

        match outcome.and_then(|questions| QuizSession::start(questions, self.config.clone())) {
            Ok(session) => {
                self.load = LoadState::Idle;
                self.session = Some(session);
                self.last_frame = None;
            }
            Err(err) => {
                warn!("Carga de preguntas fallida: {err}");
                self.load = LoadState::Failed(err.to_string());
            }
        }
    }

    pub fn can_retry(&self) -> bool {
        matches!(self.load, LoadState::Failed(_)) && self.load_attempts < self.config.max_load_attempts
    }

    pub fn retry_loading(&mut self) {
        if !self.can_retry() {
            return;
        }
        self.request_questions();
    }
}
