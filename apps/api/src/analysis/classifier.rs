//! Career classification — pluggable, trait-based seam over the scoring pipeline.
//!
//! Default: `WeightedRuleClassifier` (extract → score → select, fully deterministic).
//! `CareerEngine` holds an `Arc<dyn CareerClassifier>` so a different backend can be
//! swapped in without touching the handlers.

use anyhow::Result;
use serde::Serialize;

use crate::analysis::features::{FeatureExtractor, FeatureVector};
use crate::analysis::scoring::{score, CategoryScores};
use crate::analysis::selector::{select, Prediction};
use crate::errors::AppError;

/// Everything a classifier derived from one resume, winner included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub features: FeatureVector,
    pub scores: CategoryScores,
    pub prediction: Prediction,
}

/// Implement this to swap the classification backend.
pub trait CareerClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Classification, AppError>;

    /// Short label for logs.
    fn backend(&self) -> &'static str;
}

/// Rule-based classifier: lexicon hits and experience signals combined with fixed weights.
pub struct WeightedRuleClassifier {
    extractor: FeatureExtractor,
}

impl WeightedRuleClassifier {
    pub fn new() -> Result<Self> {
        Ok(Self {
            extractor: FeatureExtractor::new()?,
        })
    }
}

impl CareerClassifier for WeightedRuleClassifier {
    fn classify(&self, text: &str) -> Result<Classification, AppError> {
        let features = self.extractor.extract(text);
        let scores = score(&features);
        let prediction = select(&scores);

        tracing::debug!(?features, ?scores, "weighted rule classification");

        Ok(Classification {
            features,
            scores,
            prediction,
        })
    }

    fn backend(&self) -> &'static str {
        "weighted_rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::Category;

    fn classify(text: &str) -> Classification {
        WeightedRuleClassifier::new().unwrap().classify(text).unwrap()
    }

    #[test]
    fn test_technology_resume() {
        let c = classify(
            "Python, JavaScript, React, Node, SQL, Docker and Kubernetes. 3 years of experience.",
        );
        assert_eq!(c.features.tech_score, 8);
        assert_eq!(c.prediction.category, Category::Technology);
        assert!((c.prediction.confidence - 0.38).abs() < 1e-9);
    }

    #[test]
    fn test_healthcare_resume() {
        let c = classify(
            "Registered nurse: clinical patient care in a hospital, nursing and pharmacy. Certified.",
        );
        assert_eq!(c.features.healthcare_score, 5);
        assert_eq!(c.features.certifications, 1);
        assert_eq!(c.prediction.category, Category::Healthcare);
        assert!((c.prediction.confidence - 0.31).abs() < 1e-9);
    }

    #[test]
    fn test_design_resume() {
        let c = classify(
            "UX designer skilled in Figma, Sketch, Photoshop and Illustrator; creative Adobe work.",
        );
        assert_eq!(c.features.design_score, 8);
        assert_eq!(c.prediction.category, Category::Design);
    }

    #[test]
    fn test_business_resume() {
        let c = classify("Strategy, finance, marketing, sales and consulting.");
        assert_eq!(c.features.business_score, 5);
        assert_eq!(c.prediction.category, Category::Business);
    }

    #[test]
    fn test_management_resume() {
        let c = classify("15 years of experience leading teams. MBA.");
        assert_eq!(c.features.years_experience, 15);
        assert_eq!(c.features.education_level, 3);
        assert_eq!(c.prediction.category, Category::Management);
        assert!((c.prediction.confidence - 0.66).abs() < 1e-9);
    }

    #[test]
    fn test_saturated_confidence() {
        let c = classify(
            "management strategy finance marketing sales leadership analysis consulting. \
             20 years of experience. PhD.",
        );
        assert_eq!(c.prediction.category, Category::Management);
        assert_eq!(c.prediction.confidence, 1.0);
    }

    #[test]
    fn test_empty_text_defaults_to_technology() {
        let c = classify("");
        assert_eq!(c.features, FeatureVector::default());
        assert_eq!(c.prediction.category, Category::Technology);
        assert_eq!(c.prediction.confidence, 0.0);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(WeightedRuleClassifier::new().unwrap().backend(), "weighted_rules");
    }
}
