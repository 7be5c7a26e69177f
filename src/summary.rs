use crate::config::saturating_product;
use crate::model::QuizResult;
use crate::view_models::{FeedbackTier, ReviewRow};

/// Puntos por frase correcta.
pub const POINTS_PER_CORRECT: u32 = 10;

/// Resumen de la partida, calculado solo a partir de los resultados.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsSummary {
    pub total: usize,
    pub correct: usize,
    pub score: u32,
    pub total_time_secs: u32,
    pub points: u32,
    pub tier: FeedbackTier,
    pub rows: Vec<ReviewRow>,
}

impl ResultsSummary {
    pub fn from_results(results: &[QuizResult], seconds_per_question: u32) -> Self {
        let total = results.len();
        let correct = results.iter().filter(|r| r.is_correct).count();
        let score = score_for(correct, total);

        let rows = results
            .iter()
            .enumerate()
            .map(|(i, r)| ReviewRow {
                index_1based: i + 1,
                total,
                prompt: r.prompt.clone(),
                user_words: r.user_answer.join(" "),
                correct_words: (!r.is_correct).then(|| r.correct_answer.join(" ")),
                is_correct: r.is_correct,
            })
            .collect();

        Self {
            total,
            correct,
            score,
            total_time_secs: saturating_product(total, seconds_per_question),
            points: saturating_product(correct, POINTS_PER_CORRECT),
            tier: FeedbackTier::for_score(score),
            rows,
        }
    }

    pub fn has_results(&self) -> bool {
        self.total > 0
    }

    /// Puntuación para mostrar; "—" si no se respondió nada.
    pub fn score_label(&self) -> String {
        if self.has_results() {
            self.score.to_string()
        } else {
            "—".to_string()
        }
    }

    /// Fracción 0..=1 para el indicador circular/barra.
    pub fn score_fraction(&self) -> f32 {
        self.score as f32 / 100.0
    }
}

/// round(100 * correct / total), 0 si no hay resultados.
pub fn score_for(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(ok: bool) -> QuizResult {
        QuizResult {
            prompt: "A _______ b _______ c _______ d _______".into(),
            user_answer: vec!["w".into(), "x".into()],
            correct_answer: vec!["w".into(), "x".into(), "y".into(), "z".into()],
            is_correct: ok,
        }
    }

    #[test]
    fn half_correct_scores_fifty() {
        let summary =
            ResultsSummary::from_results(&[result(true), result(true), result(false), result(false)], 30);
        assert_eq!(summary.score, 50);
        assert_eq!(summary.correct, 2);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.points, 20);
        assert_eq!(summary.total_time_secs, 120);
        assert_eq!(summary.tier, FeedbackTier::NeedsWork);
    }

    #[test]
    fn empty_results_do_not_divide_by_zero() {
        let summary = ResultsSummary::from_results(&[], 30);
        assert_eq!(summary.score, 0);
        assert!(!summary.has_results());
        assert_eq!(summary.score_label(), "—");
        assert!(summary.rows.is_empty());
    }

    #[test]
    fn total_time_saturates_instead_of_overflowing() {
        let summary = ResultsSummary::from_results(&[result(true), result(false)], u32::MAX);
        assert_eq!(summary.total_time_secs, u32::MAX);
        assert_eq!(summary.points, 10);
    }

    #[test]
    fn score_rounds_half_up() {
        assert_eq!(score_for(1, 3), 33);
        assert_eq!(score_for(2, 3), 67);
        assert_eq!(score_for(1, 8), 13); // 12.5
        assert_eq!(score_for(3, 3), 100);
    }

    #[test]
    fn correct_words_only_shown_when_wrong() {
        let summary = ResultsSummary::from_results(&[result(true), result(false)], 30);
        assert_eq!(summary.rows[0].correct_words, None);
        assert_eq!(summary.rows[1].correct_words.as_deref(), Some("w x y z"));
        assert_eq!(summary.rows[1].user_words, "w x");
        assert_eq!(summary.rows[1].header(), "Frase 2/2");
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(FeedbackTier::for_score(81), FeedbackTier::Excellent);
        assert_eq!(FeedbackTier::for_score(80), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(51), FeedbackTier::Good);
        assert_eq!(FeedbackTier::for_score(50), FeedbackTier::NeedsWork);
    }
}
