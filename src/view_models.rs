// src/view_models.rs

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressCell {
    Done,
    Current,
    Pending,
}

/// Fila de la revisión final, una por pregunta.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRow {
    pub index_1based: usize,
    pub total: usize,
    pub prompt: String,
    pub user_words: String,
    pub correct_words: Option<String>, // solo si falló
    pub is_correct: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackTier {
    Excellent,
    Good,
    NeedsWork,
}

impl ReviewRow {
    pub fn header(&self) -> String {
        format!("Frase {}/{}", self.index_1based, self.total)
    }

    pub fn status_label(&self) -> &'static str {
        if self.is_correct { "✅ Correcta" } else { "❌ Incorrecta" }
    }

    pub fn user_words_label(&self) -> &str {
        if self.user_words.is_empty() {
            "(sin respuesta)"
        } else {
            &self.user_words
        }
    }
}

impl FeedbackTier {
    pub fn for_score(score: u32) -> Self {
        if score > 80 {
            FeedbackTier::Excellent
        } else if score > 50 {
            FeedbackTier::Good
        } else {
            FeedbackTier::NeedsWork
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FeedbackTier::Excellent => {
                "¡Buen trabajo! Dominas la construcción de frases."
            }
            FeedbackTier::Good => {
                "Has formado bien varias frases, pero aún hay fallos. Fíjate en la estructura y en el orden de las palabras."
            }
            FeedbackTier::NeedsWork => {
                "Vas progresando, pero hay margen de mejora. Repasa la estructura de la frase y practica la colocación de palabras."
            }
        }
    }
}
