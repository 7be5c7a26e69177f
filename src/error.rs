use thiserror::Error;

/// Errores al obtener el banco de preguntas.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("error de red: {0}")]
    Network(#[from] reqwest::Error),

    #[error("el servidor devolvió HTTP {0}")]
    HttpStatus(u16),

    #[error("respuesta malformada: {0}")]
    MalformedPayload(String),

    #[error("no hay preguntas disponibles")]
    EmptyQuestionSet,

    #[error("no se pudieron cargar las preguntas ({attempts} fuentes fallaron)")]
    Unavailable { attempts: usize },
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::MalformedPayload(err.to_string())
    }
}

impl LoadError {
    /// Fallos de red o de estado HTTP (se recuperan con la fuente local).
    pub fn is_network(&self) -> bool {
        matches!(self, LoadError::Network(_) | LoadError::HttpStatus(_))
    }
}
