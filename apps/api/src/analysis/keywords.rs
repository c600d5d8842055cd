//! Keyword ranking — frequency-ranked content words from the resume text.

use std::collections::HashMap;

use anyhow::{Context, Result};
use regex::Regex;

use crate::analysis::lexicon::STOPWORDS;

pub const MAX_KEYWORDS: usize = 20;
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Holds the compiled separator pattern. Build once, share freely.
#[derive(Debug, Clone)]
pub struct KeywordRanker {
    non_word: Regex,
}

impl KeywordRanker {
    pub fn new() -> Result<Self> {
        let non_word = Regex::new(r"[^\w\s]").context("invalid keyword separator pattern")?;
        Ok(Self { non_word })
    }

    /// Top `MAX_KEYWORDS` tokens by descending frequency.
    /// Equal counts keep the order in which the tokens first appear.
    pub fn rank(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let cleaned = self.non_word.replace_all(&lowered, " ");

        let mut counts: Vec<(&str, usize)> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for token in cleaned.split_whitespace() {
            if token.chars().count() < MIN_KEYWORD_CHARS || STOPWORDS.contains(&token) {
                continue;
            }
            match index.get(token) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    index.insert(token, counts.len());
                    counts.push((token, 1));
                }
            }
        }

        // sort_by is stable, preserving first-occurrence order among ties
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .take(MAX_KEYWORDS)
            .map(|(token, _)| token.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rank(text: &str) -> Vec<String> {
        KeywordRanker::new().unwrap().rank(text)
    }

    #[test]
    fn test_ranked_by_frequency() {
        let keywords = rank("leadership leadership strategy strategy strategy management");
        assert_eq!(keywords, vec!["strategy", "leadership", "management"]);
    }

    #[test]
    fn test_empty_text_has_no_keywords() {
        assert!(rank("").is_empty());
    }

    #[test]
    fn test_stopwords_and_short_tokens_dropped() {
        let keywords = rank("This project will deliver results from this team to you");
        assert_eq!(keywords, vec!["project", "deliver", "results", "team"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let keywords = rank("Node.js, React; (TypeScript)");
        assert_eq!(keywords, vec!["node", "react", "typescript"]);
    }

    #[test]
    fn test_case_is_folded() {
        let keywords = rank("Python python PYTHON");
        assert_eq!(keywords, vec!["python"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let keywords = rank("delta alpha delta alpha gamma");
        assert_eq!(keywords, vec!["delta", "alpha", "gamma"]);
    }

    #[test]
    fn test_at_most_twenty_keywords() {
        let text: Vec<String> = (0..25).map(|i| format!("word{i}")).collect();
        let keywords = rank(&text.join(" "));
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "word0");
        assert_eq!(keywords[19], "word19");
    }

    #[test]
    fn test_ranking_is_reproducible() {
        let text = "rust tokio axum serde tokio rust axum rust";
        assert_eq!(rank(text), rank(text));
        assert_eq!(rank(text), vec!["rust", "tokio", "axum", "serde"]);
    }
}
