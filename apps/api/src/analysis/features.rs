//! Feature extraction — turns raw resume text into a fixed numeric feature vector.
//!
//! Every sub-extractor works on the lowercased text with plain substring
//! containment, so extraction is total: any string (including `""`) yields a vector.

use anyhow::{Context, Result};
use regex::Regex;
use serde::Serialize;

use crate::analysis::lexicon::{Category, CERTIFICATION_PHRASES};

/// Cap applied to any years-of-experience claim.
pub const MAX_YEARS_EXPERIENCE: u32 = 20;

const YEARS_PATTERNS: &[&str] = &[
    r"([0-9]+)\s*years?\s*(?:of\s*)?experience",
    r"([0-9]+)\+?\s*years?\s*in",
    r"experience:\s*([0-9]+)",
];

/// Numeric evidence extracted from one resume. Field names are the feature names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeatureVector {
    pub tech_score: u32,
    pub business_score: u32,
    pub design_score: u32,
    pub healthcare_score: u32,
    /// 0–20 inclusive.
    pub years_experience: u32,
    /// 0 none, 1 diploma/certificate, 2 bachelor/degree, 3 master/mba, 4 phd/doctorate.
    pub education_level: u32,
    pub certifications: u32,
}

/// Holds the compiled years-of-experience patterns. Build once, share freely.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    years_patterns: Vec<Regex>,
}

impl FeatureExtractor {
    pub fn new() -> Result<Self> {
        let years_patterns = YEARS_PATTERNS
            .iter()
            .map(|p| Regex::new(p).with_context(|| format!("invalid years pattern: {p}")))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { years_patterns })
    }

    pub fn extract(&self, text: &str) -> FeatureVector {
        let text = text.to_lowercase();

        FeatureVector {
            tech_score: count_terms(&text, Category::Technology.lexicon()),
            business_score: count_terms(&text, Category::Business.lexicon()),
            design_score: count_terms(&text, Category::Design.lexicon()),
            healthcare_score: count_terms(&text, Category::Healthcare.lexicon()),
            years_experience: self.years_experience(&text),
            education_level: education_level(&text),
            certifications: count_terms(&text, CERTIFICATION_PHRASES),
        }
    }

    /// Largest number claimed by any pattern, capped at `MAX_YEARS_EXPERIENCE`.
    fn years_experience(&self, text: &str) -> u32 {
        self.years_patterns
            .iter()
            .flat_map(|re| re.captures_iter(text))
            .filter_map(|caps| caps.get(1))
            // Digits only, so a parse failure means overflow: saturate to the cap.
            .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
            .max()
            .map_or(0, |years| years.min(u64::from(MAX_YEARS_EXPERIENCE)) as u32)
    }
}

/// Number of distinct terms occurring anywhere in `text` as a substring.
fn count_terms(text: &str, terms: &[&str]) -> u32 {
    terms.iter().filter(|term| text.contains(*term)).count() as u32
}

/// First matching rule wins, highest degree first.
fn education_level(text: &str) -> u32 {
    let has = |needles: &[&str]| needles.iter().any(|n| text.contains(n));

    if has(&["phd", "doctorate"]) {
        4
    } else if has(&["master", "mba"]) {
        3
    } else if has(&["bachelor", "degree"]) {
        2
    } else if has(&["diploma", "certificate"]) {
        1
    } else {
        0
    }
}
