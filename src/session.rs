// src/session.rs

use crate::config::QuizConfig;
use crate::error::LoadError;
use crate::model::{ANSWER_SLOTS, Question, QuizResult};
use crate::prompt::{ParsedPrompt, PromptSegment, parse_prompt};
use crate::timer::CountdownTimer;
use crate::view_models::ProgressCell;
use log::{debug, info};
use rand::seq::SliceRandom;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    AwaitingAnswer,
    Submitting,
    Advancing,
    Complete,
}

/// Estado de una pregunta en curso. Se reconstruye entera al cambiar de
/// pregunta, temporizador incluido.
#[derive(Clone, Debug)]
struct QuestionState {
    slots: Vec<Option<String>>,
    available: Vec<String>,
    prompt: ParsedPrompt,
    timer: CountdownTimer,
}

impl QuestionState {
    fn for_question(question: &Question, seconds: u32) -> Self {
        let mut available = question.options.clone();
        available.shuffle(&mut rand::thread_rng());
        Self {
            slots: vec![None; ANSWER_SLOTS],
            available,
            prompt: parse_prompt(&question.question),
            timer: CountdownTimer::started(seconds),
        }
    }
}

/// Una partida: preguntas elegidas, índice actual y resultados acumulados.
#[derive(Debug)]
pub struct QuizSession {
    config: QuizConfig,
    questions: Vec<Question>,
    index: usize,
    results: Vec<QuizResult>,
    phase: SessionPhase,
    current: Option<QuestionState>,
    // Espera pendiente antes de pasar a la siguiente pregunta tras enviar
    pending_advance: Option<Duration>,
}

impl QuizSession {
    pub fn loading(config: QuizConfig) -> Self {
        Self {
            config,
            questions: Vec::new(),
            index: 0,
            results: Vec::new(),
            phase: SessionPhase::Loading,
            current: None,
            pending_advance: None,
        }
    }

    /// Crea la sesión y arranca directamente la primera pregunta.
    pub fn start(questions: Vec<Question>, config: QuizConfig) -> Result<Self, LoadError> {
        let mut session = Self::loading(config);
        session.begin(questions)?;
        Ok(session)
    }

    /// Loading -> AwaitingAnswer con la primera pregunta.
    pub fn begin(&mut self, questions: Vec<Question>) -> Result<(), LoadError> {
        if self.phase != SessionPhase::Loading {
            return Ok(());
        }
        if questions.is_empty() {
            return Err(LoadError::EmptyQuestionSet);
        }
        info!("Sesión iniciada con {} preguntas", questions.len());
        self.questions = questions;
        self.index = 0;
        self.results.clear();
        self.init_current();
        Ok(())
    }

    fn init_current(&mut self) {
        let seconds = self.config.seconds_per_question;
        self.current = self
            .questions
            .get(self.index)
            .map(|q| QuestionState::for_question(q, seconds));
        self.pending_advance = None;
        self.phase = SessionPhase::AwaitingAnswer;
        debug!(
            "Pregunta {}/{} preparada",
            self.index + 1,
            self.questions.len()
        );
    }

    // ---------- Acciones del usuario ----------

    /// Coloca `word` en el primer hueco libre. No hace nada si no quedan
    /// huecos o la palabra no está disponible.
    pub fn select_word(&mut self, word: &str) -> bool {
        if self.phase != SessionPhase::AwaitingAnswer {
            return false;
        }
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        let Some(slot) = state.slots.iter().position(Option::is_none) else {
            return false;
        };
        let Some(pos) = state.available.iter().position(|w| w == word) else {
            return false;
        };
        let word = state.available.remove(pos);
        state.slots[slot] = Some(word);
        true
    }

    /// Igual que [`select_word`](Self::select_word) pero por posición en el banco.
    pub fn select_option(&mut self, option_index: usize) -> bool {
        let word = match self
            .current
            .as_ref()
            .and_then(|s| s.available.get(option_index))
        {
            Some(w) => w.clone(),
            None => return false,
        };
        self.select_word(&word)
    }

    /// Vacía el hueco y devuelve la palabra al banco.
    pub fn remove_word(&mut self, slot: usize) -> bool {
        if self.phase != SessionPhase::AwaitingAnswer {
            return false;
        }
        let Some(state) = self.current.as_mut() else {
            return false;
        };
        match state.slots.get_mut(slot).and_then(Option::take) {
            Some(word) => {
                state.available.push(word);
                true
            }
            None => false,
        }
    }

    pub fn can_submit(&self) -> bool {
        self.phase == SessionPhase::AwaitingAnswer
            && self
                .current
                .as_ref()
                .is_some_and(|s| s.slots.iter().all(Option::is_some))
    }

    /// Corrige la respuesta (igualdad exacta y ordenada) y guarda el resultado.
    pub fn submit(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SessionPhase::Submitting;

        let Some(state) = self.current.as_mut() else {
            return false;
        };
        state.timer.pause();
        let user_answer: Vec<String> = state.slots.iter().flatten().cloned().collect();

        let question = &self.questions[self.index];
        let is_correct = user_answer == question.correct_answer;
        debug!(
            "Pregunta {} enviada: {}",
            question.question_id,
            if is_correct { "correcta" } else { "incorrecta" }
        );
        self.record(user_answer, is_correct);

        self.phase = SessionPhase::Advancing;
        if self.config.advance_delay.is_zero() {
            self.advance();
        } else {
            self.pending_advance = Some(self.config.advance_delay);
        }
        true
    }

    /// Fin de tiempo: se guarda lo que hubiera y cuenta como fallo.
    pub fn on_timer_end(&mut self) {
        if self.phase != SessionPhase::AwaitingAnswer {
            return;
        }
        let Some(state) = self.current.as_ref() else {
            return;
        };
        let filled: Vec<String> = state.slots.iter().flatten().cloned().collect();
        debug!(
            "Tiempo agotado en la pregunta {}",
            self.questions[self.index].question_id
        );
        self.record(filled, false);
        self.phase = SessionPhase::Advancing;
        self.advance();
    }

    /// Termina la partida ya y devuelve lo respondido hasta ahora.
    pub fn quit(self) -> Vec<QuizResult> {
        info!(
            "Sesión abandonada con {}/{} respuestas",
            self.results.len(),
            self.questions.len()
        );
        self.results
    }

    fn record(&mut self, user_answer: Vec<String>, is_correct: bool) {
        let question = &self.questions[self.index];
        self.results.push(QuizResult {
            prompt: question.question.clone(),
            user_answer,
            correct_answer: question.correct_answer.clone(),
            is_correct,
        });
    }

    // ---------- Avance ----------

    /// Avanza el reloj de la pregunta (o la espera tras enviar).
    pub fn update(&mut self, elapsed: Duration) {
        match self.phase {
            SessionPhase::AwaitingAnswer => {
                let expired = self
                    .current
                    .as_mut()
                    .and_then(|s| s.timer.advance(elapsed));
                if expired.is_some() {
                    self.on_timer_end();
                }
            }
            SessionPhase::Advancing => {
                let done = match self.pending_advance.as_mut() {
                    Some(remaining) => {
                        *remaining = remaining.saturating_sub(elapsed);
                        remaining.is_zero()
                    }
                    None => true,
                };
                if done {
                    self.advance();
                }
            }
            _ => {}
        }
    }

    /// Advancing -> siguiente pregunta, o Complete si era la última.
    pub fn advance(&mut self) {
        if self.phase != SessionPhase::Advancing {
            return;
        }
        self.pending_advance = None;
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.init_current();
        } else {
            // El temporizador se va con el estado de la pregunta
            self.current = None;
            self.phase = SessionPhase::Complete;
            info!(
                "Sesión completada: {}/{} correctas",
                self.results.iter().filter(|r| r.is_correct).count(),
                self.results.len()
            );
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    pub fn into_results(self) -> Vec<QuizResult> {
        self.results
    }

    // ---------- Lecturas para la vista ----------

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == SessionPhase::Complete {
            return None;
        }
        self.questions.get(self.index)
    }

    pub fn slots(&self) -> &[Option<String>] {
        self.current.as_ref().map(|s| s.slots.as_slice()).unwrap_or(&[])
    }

    pub fn available_options(&self) -> &[String] {
        self.current
            .as_ref()
            .map(|s| s.available.as_slice())
            .unwrap_or(&[])
    }

    pub fn prompt_segments(&self) -> &[PromptSegment] {
        self.current
            .as_ref()
            .map(|s| s.prompt.segments.as_slice())
            .unwrap_or(&[])
    }

    pub fn timer(&self) -> Option<&CountdownTimer> {
        self.current.as_ref().map(|s| &s.timer)
    }

    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Barra de progreso segmentada: hechas, actual y pendientes.
    pub fn progress_cells(&self) -> Vec<ProgressCell> {
        (0..self.questions.len())
            .map(|i| {
                if i < self.index || self.phase == SessionPhase::Complete {
                    ProgressCell::Done
                } else if i == self.index {
                    ProgressCell::Current
                } else {
                    ProgressCell::Pending
                }
            })
            .collect()
    }
}
