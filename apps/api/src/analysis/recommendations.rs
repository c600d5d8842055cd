//! Static career advice per category.

use crate::analysis::lexicon::Category;

const TECHNOLOGY: &[&str] = &[
    "Consider learning cloud technologies like AWS or Azure",
    "Strengthen your knowledge in modern frameworks",
    "Build more projects to showcase your skills",
    "Consider getting relevant certifications",
];

const BUSINESS: &[&str] = &[
    "Develop your leadership and management skills",
    "Consider an MBA or business certification",
    "Gain experience in strategic planning",
    "Improve your analytical and problem-solving abilities",
];

const DESIGN: &[&str] = &[
    "Build a strong portfolio showcasing your best work",
    "Learn the latest design tools and trends",
    "Develop both UI and UX skills",
    "Consider specializing in a specific design area",
];

const HEALTHCARE: &[&str] = &[
    "Keep up with the latest medical technologies",
    "Consider specialized certifications",
    "Develop your patient communication skills",
    "Stay updated with healthcare regulations",
];

const MANAGEMENT: &[&str] = &[
    "Develop your team leadership skills",
    "Learn project management methodologies",
    "Improve your communication and delegation abilities",
    "Consider management training programs",
];

pub fn recommend(category: Category) -> &'static [&'static str] {
    match category {
        Category::Technology => TECHNOLOGY,
        Category::Business => BUSINESS,
        Category::Design => DESIGN,
        Category::Healthcare => HEALTHCARE,
        Category::Management => MANAGEMENT,
    }
}

/// Lookup by category name. Unrecognised names get the technology advice.
pub fn recommend_for(name: &str) -> &'static [&'static str] {
    name.parse::<Category>()
        .map(recommend)
        .unwrap_or(TECHNOLOGY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_four_entries() {
        for category in Category::ALL {
            assert_eq!(recommend(category).len(), 4, "{category}");
        }
    }

    #[test]
    fn test_lookup_by_name_matches_enum() {
        assert_eq!(recommend_for("healthcare"), recommend(Category::Healthcare));
        assert_eq!(recommend_for("management"), MANAGEMENT);
    }

    #[test]
    fn test_unknown_name_falls_back_to_technology() {
        assert_eq!(recommend_for("astronaut"), TECHNOLOGY);
        assert_eq!(recommend_for(""), TECHNOLOGY);
    }

    #[test]
    fn test_tables_are_distinct() {
        assert_ne!(recommend(Category::Business), recommend(Category::Management));
        assert_eq!(
            recommend(Category::Design)[0],
            "Build a strong portfolio showcasing your best work"
        );
    }
}
