//! Category scoring — fixed linear weights over the feature vector.

use serde::Serialize;

use crate::analysis::features::FeatureVector;
use crate::analysis::lexicon::Category;

/// Linear weights for one category. A zero weight means the feature is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryWeights {
    /// Weight on the category's own lexicon score.
    pub lexicon: f64,
    pub years_experience: f64,
    pub education_level: f64,
    pub certifications: f64,
}

impl CategoryWeights {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Technology => Self::new(0.4, 0.2, 0.1, 0.0),
            Category::Business => Self::new(0.4, 0.15, 0.15, 0.0),
            Category::Design => Self::new(0.5, 0.1, 0.05, 0.0),
            Category::Healthcare => Self::new(0.6, 0.0, 0.2, 0.1),
            Category::Management => Self::new(0.3, 0.4, 0.2, 0.0),
        }
    }

    const fn new(lexicon: f64, years: f64, education: f64, certifications: f64) -> Self {
        Self {
            lexicon,
            years_experience: years,
            education_level: education,
            certifications,
        }
    }
}

/// Raw, unnormalised score per category. Values may exceed 10.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CategoryScores {
    pub technology: f64,
    pub business: f64,
    pub design: f64,
    pub healthcare: f64,
    pub management: f64,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Technology => self.technology,
            Category::Business => self.business,
            Category::Design => self.design,
            Category::Healthcare => self.healthcare,
            Category::Management => self.management,
        }
    }

    /// Scores in canonical category order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

/// Lexicon feature feeding each category. Management reuses the business score.
fn lexicon_score(features: &FeatureVector, category: Category) -> u32 {
    match category {
        Category::Technology => features.tech_score,
        Category::Business | Category::Management => features.business_score,
        Category::Design => features.design_score,
        Category::Healthcare => features.healthcare_score,
    }
}

fn weighted_sum(features: &FeatureVector, category: Category) -> f64 {
    let w = CategoryWeights::for_category(category);
    w.lexicon * f64::from(lexicon_score(features, category))
        + w.years_experience * f64::from(features.years_experience)
        + w.education_level * f64::from(features.education_level)
        + w.certifications * f64::from(features.certifications)
}

/// Scores all five categories. Pure and total.
pub fn score(features: &FeatureVector) -> CategoryScores {
    CategoryScores {
        technology: weighted_sum(features, Category::Technology),
        business: weighted_sum(features, Category::Business),
        design: weighted_sum(features, Category::Design),
        healthcare: weighted_sum(features, Category::Healthcare),
        management: weighted_sum(features, Category::Management),
    }
}
