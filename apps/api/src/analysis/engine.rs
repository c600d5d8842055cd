//! Analysis engine — runs classification, skill matching, keyword ranking and
//! recommendation lookup over one resume and assembles the combined result.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use crate::analysis::classifier::{CareerClassifier, Classification, WeightedRuleClassifier};
use crate::analysis::keywords::KeywordRanker;
use crate::analysis::lexicon::Category;
use crate::analysis::recommendations::recommend;
use crate::analysis::skills::find_skills;
use crate::errors::AppError;

/// Structured result returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerAnalysis {
    pub prediction: Category,
    pub confidence: f64,
    pub skills: Vec<String>,
    pub keywords: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Immutable after construction; share behind an `Arc` across requests.
pub struct CareerEngine {
    classifier: Arc<dyn CareerClassifier>,
    keyword_ranker: KeywordRanker,
}

impl CareerEngine {
    /// Builds the engine with the default weighted-rule classifier.
    pub fn new() -> Result<Self> {
        Ok(Self::with_classifier(
            Arc::new(WeightedRuleClassifier::new()?),
            KeywordRanker::new()?,
        ))
    }

    pub fn with_classifier(
        classifier: Arc<dyn CareerClassifier>,
        keyword_ranker: KeywordRanker,
    ) -> Self {
        Self {
            classifier,
            keyword_ranker,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.classifier.backend()
    }

    /// Prediction plus the evidence behind it (features and per-category scores).
    pub fn classify(&self, text: &str) -> Result<Classification, AppError> {
        self.classifier.classify(text)
    }

    /// Full pipeline. Either the whole result or an error, never a partial result.
    pub fn analyze(&self, text: &str) -> Result<CareerAnalysis, AppError> {
        let classification = self.classifier.classify(text)?;
        let prediction = classification.prediction;

        Ok(CareerAnalysis {
            prediction: prediction.category,
            confidence: prediction.confidence,
            skills: find_skills(text),
            keywords: self.keyword_ranker.rank(text),
            recommendations: recommend(prediction.category)
                .iter()
                .map(|r| r.to_string())
                .collect(),
        })
    }
}
