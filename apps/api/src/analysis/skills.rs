//! Skill matching against the master catalogue.

use crate::analysis::lexicon::SKILL_CATALOGUE;

/// Catalogue skills whose lowercase form occurs anywhere in `text`.
/// Output keeps catalogue order and casing, not text order.
pub fn find_skills(text: &str) -> Vec<String> {
    let text = text.to_lowercase();
    SKILL_CATALOGUE
        .iter()
        .filter(|skill| text.contains(&skill.to_lowercase()))
        .map(|skill| skill.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive_match_keeps_catalogue_casing() {
        let skills = find_skills("I use REACT and node.js daily");
        assert_eq!(skills, vec!["React", "Node.js"]);
    }

    #[test]
    fn test_catalogue_order_not_text_order() {
        let skills = find_skills("Figma first, then Python");
        assert_eq!(skills, vec!["Python", "Figma"]);
    }

    #[test]
    fn test_multi_word_skills() {
        let skills = find_skills("Led project management and data analysis for UI/UX design work");
        assert_eq!(
            skills,
            vec!["Data Analysis", "Project Management", "UI/UX Design"]
        );
    }

    #[test]
    fn test_substring_overlap_counts_both() {
        let skills = find_skills("javascript");
        assert_eq!(skills, vec!["JavaScript", "Java"]);
    }

    #[test]
    fn test_no_skills_in_empty_text() {
        assert!(find_skills("").is_empty());
    }
}
