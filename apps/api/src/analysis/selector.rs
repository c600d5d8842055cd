//! Decision selection — picks the winning category and a confidence value.

use serde::Serialize;

use crate::analysis::lexicon::Category;
use crate::analysis::scoring::CategoryScores;

/// Raw score at which confidence saturates to 1.0.
const CONFIDENCE_SCALE: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub category: Category,
    /// Heuristic in [0, 1], not a probability.
    pub confidence: f64,
}

/// Highest score wins; on a tie the earliest category in canonical order wins,
/// so an all-zero score set resolves to technology.
pub fn select(scores: &CategoryScores) -> Prediction {
    let (category, max_score) = scores
        .iter()
        .fold((Category::Technology, f64::NEG_INFINITY), |best, (c, s)| {
            if s > best.1 {
                (c, s)
            } else {
                best
            }
        });

    let confidence = (max_score / CONFIDENCE_SCALE).clamp(0.0, 1.0);
    Prediction {
        category,
        confidence,
    }
}
