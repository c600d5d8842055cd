//! Static term tables shared by every analysis stage.
//!
//! All data here is `&'static` and never mutated, so concurrent reads need no
//! synchronisation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Career category. The set is closed; declaration order is the canonical
/// order used for tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Technology,
    Business,
    Design,
    Healthcare,
    Management,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Business,
        Category::Design,
        Category::Healthcare,
        Category::Management,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Design => "design",
            Category::Healthcare => "healthcare",
            Category::Management => "management",
        }
    }

    /// Lowercase scoring terms for this category.
    /// Management has no lexicon of its own and shares the business terms.
    pub fn lexicon(&self) -> &'static [&'static str] {
        match self {
            Category::Technology => TECH_TERMS,
            Category::Business | Category::Management => BUSINESS_TERMS,
            Category::Design => DESIGN_TERMS,
            Category::Healthcare => HEALTHCARE_TERMS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

pub const TECH_TERMS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "react",
    "node",
    "sql",
    "mongodb",
    "aws",
    "docker",
    "kubernetes",
];

pub const BUSINESS_TERMS: &[&str] = &[
    "management",
    "strategy",
    "finance",
    "marketing",
    "sales",
    "leadership",
    "analysis",
    "consulting",
];

// "ui" and "ux" match inside longer words ("building"); substring matching is intended.
pub const DESIGN_TERMS: &[&str] = &[
    "photoshop",
    "illustrator",
    "figma",
    "sketch",
    "ui",
    "ux",
    "design",
    "creative",
    "adobe",
];

pub const HEALTHCARE_TERMS: &[&str] = &[
    "medical",
    "healthcare",
    "patient",
    "clinical",
    "nursing",
    "doctor",
    "pharmacy",
    "hospital",
];

/// Phrases that each add one to the certification count. Overlaps count separately.
pub const CERTIFICATION_PHRASES: &[&str] = &[
    "certified",
    "certification",
    "aws certified",
    "pmp",
    "cissp",
    "cfa",
    "cpa",
];

/// Master skill catalogue, in display casing. Output order follows this list.
pub const SKILL_CATALOGUE: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "React",
    "Node.js",
    "SQL",
    "MongoDB",
    "AWS",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Data Analysis",
    "Project Management",
    "Leadership",
    "Communication",
    "Problem Solving",
    "Strategic Planning",
    "Financial Analysis",
    "Marketing",
    "Sales",
    "UI/UX Design",
    "Photoshop",
    "Illustrator",
    "Figma",
    "Adobe Creative Suite",
];

pub const STOPWORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "were", "said",
];
