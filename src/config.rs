use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str =
    "https://projects.harinarayankoiri.com.np/sentence-construction/assets/data.json";

/// Tope para `SENTENCE_QUIZ_SECONDS` (una hora por pregunta).
pub const MAX_SECONDS_PER_QUESTION: u32 = 3600;

/// Ajustes de la partida. Todo tiene valor por defecto; algunos se pueden
/// sobreescribir con variables de entorno.
#[derive(Clone, Debug)]
pub struct QuizConfig {
    pub endpoint: String,
    pub seconds_per_question: u32,
    pub questions_per_session: usize,
    pub advance_delay: Duration,
    pub max_load_attempts: u32,
    pub request_timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            seconds_per_question: 30,
            questions_per_session: 10,
            advance_delay: Duration::from_millis(500),
            max_load_attempts: 3,
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        if let Some(endpoint) = get("SENTENCE_QUIZ_ENDPOINT") {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(secs) = get("SENTENCE_QUIZ_SECONDS")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|secs| (1..=MAX_SECONDS_PER_QUESTION).contains(secs))
        {
            config.seconds_per_question = secs;
        }
        if let Some(n) = get("SENTENCE_QUIZ_QUESTIONS")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            config.questions_per_session = n;
        }
        config
    }

    /// Tiempo estimado de una partida completa, en segundos.
    pub fn estimated_total_secs(&self) -> u32 {
        saturating_product(self.questions_per_session, self.seconds_per_question)
    }
}

/// `count × per`, saturando en `u32::MAX`.
pub fn saturating_product(count: usize, per: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(per)
}
