//! Bag-of-words cosine similarity and Levenshtein-based fuzzy equality.

use std::collections::HashMap;
use strsim::levenshtein;

/// Lower-cases, drops every character that is not alphanumeric, `_` or
/// whitespace, splits on whitespace, and keeps tokens longer than two
/// characters. Underscores survive, so `snake_case` stays one token. Order is
/// preserved and duplicates are kept.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() > 2)
        .map(str::to_string)
        .collect()
}

fn term_frequencies(tokens: &[String]) -> HashMap<&str, f64> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0.0) += 1.0;
    }
    counts
}

/// Cosine of the raw term-frequency vectors of both texts, in `[0, 1]`.
///
/// Blank input or a text without any qualifying token yields `0.0`.
pub fn cosine_similarity(left: &str, right: &str) -> f64 {
    if left.trim().is_empty() || right.trim().is_empty() {
        return 0.0;
    }

    let left_tokens = tokenize(left);
    let right_tokens = tokenize(right);
    let left_tf = term_frequencies(&left_tokens);
    let right_tf = term_frequencies(&right_tokens);

    // Terms missing from one side contribute zero to the dot product.
    let dot: f64 = left_tf
        .iter()
        .filter_map(|(term, count)| right_tf.get(term).map(|other| count * other))
        .sum();
    let left_norm = left_tf.values().map(|count| count * count).sum::<f64>().sqrt();
    let right_norm = right_tf.values().map(|count| count * count).sum::<f64>().sqrt();

    if left_norm == 0.0 || right_norm == 0.0 {
        return 0.0;
    }

    (dot / (left_norm * right_norm)).min(1.0)
}

/// Levenshtein distance over characters. Case-sensitive; callers fold case.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Case-insensitive whole-string equality within `threshold` edits.
/// An empty `target` never matches.
pub fn fuzzy_match(source: &str, target: &str, threshold: usize) -> bool {
    if target.is_empty() {
        return false;
    }
    edit_distance(&source.to_lowercase(), &target.to_lowercase()) <= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::vocabulary::DEFAULT_FUZZY_THRESHOLD;

    #[test]
    fn tokenize_strips_punctuation_and_short_words() {
        let tokens = tokenize("Senior React.js dev, 5+ yrs in UI/UX at a startup!");
        assert_eq!(
            tokens,
            vec!["senior", "reactjs", "dev", "yrs", "uiux", "startup"]
        );
    }

    #[test]
    fn tokenize_keeps_underscores() {
        assert_eq!(tokenize("ci_cd pipelines!"), vec!["ci_cd", "pipelines"]);
    }

    #[test]
    fn tokenize_keeps_duplicates_in_order() {
        assert_eq!(tokenize("rust Rust RUST go"), vec!["rust", "rust", "rust"]);
    }

    #[test]
    fn identical_texts_have_unit_similarity() {
        let text = "React developer building scalable applications";
        assert!((cosine_similarity(text, text) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_texts_have_zero_similarity() {
        assert_eq!(cosine_similarity("python django flask", "react redux"), 0.0);
    }

    #[test]
    fn partial_overlap_uses_term_frequencies() {
        // left = {aaa:2, bbb:1}, right = {aaa:1, ccc:1}
        let similarity = cosine_similarity("aaa aaa bbb", "aaa ccc");
        let expected = 2.0 / (5.0_f64.sqrt() * 2.0_f64.sqrt());
        assert!((similarity - expected).abs() < 1e-9);
    }

    #[test]
    fn blank_or_short_token_input_scores_zero() {
        assert_eq!(cosine_similarity("", "react developer"), 0.0);
        assert_eq!(cosine_similarity("   ", "react developer"), 0.0);
        assert_eq!(cosine_similarity("a an to", "react developer"), 0.0);
    }

    #[test]
    fn edit_distance_matches_levenshtein() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "pune"), 4);
        assert_eq!(edit_distance("pune", "pune"), 0);
        assert_eq!(edit_distance("Pune", "pune"), 1);
    }

    #[test]
    fn fuzzy_match_tolerates_typos() {
        assert!(fuzzy_match("Bangalore", "Bangalor", DEFAULT_FUZZY_THRESHOLD));
        assert!(fuzzy_match("Bangalore", "bangalore ", DEFAULT_FUZZY_THRESHOLD));
        assert!(!fuzzy_match(
            "Bangalore",
            "Bangalore Remote",
            DEFAULT_FUZZY_THRESHOLD
        ));
    }

    #[test]
    fn fuzzy_match_rejects_empty_target() {
        assert!(!fuzzy_match("", "", DEFAULT_FUZZY_THRESHOLD));
        assert!(!fuzzy_match("Pune", "", DEFAULT_FUZZY_THRESHOLD));
    }
}
