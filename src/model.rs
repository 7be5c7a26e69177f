use serde::{Deserialize, Serialize};

/// Huecos a rellenar en cada frase.
pub const ANSWER_SLOTS: usize = 4;

/// Estado de envoltorio que acepta el cargador.
pub const STATUS_SUCCESS: &str = "SUCCESS";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_id: String,
    pub question: String,        // Frase con huecos "_______"
    pub options: Vec<String>,    // Banco de palabras (correctas + relleno)
    pub correct_answer: Vec<String>,
}

/// Envoltorio JSON tal y como lo sirve la API (y el fichero embebido).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiResponse {
    pub status: String,
    #[serde(default)]
    pub data: Option<TestData>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TestData {
    #[serde(default)]
    pub test_id: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Resultado de una pregunta ya respondida (o agotada).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub prompt: String,
    pub user_answer: Vec<String>,
    pub correct_answer: Vec<String>,
    pub is_correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Intro,
    Playing,
    Feedback,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Intro
    }
}
