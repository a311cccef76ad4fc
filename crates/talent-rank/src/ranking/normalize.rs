use std::cmp::Ordering;

use super::domain::ScoredCandidate;

/// Min-max rescales scores to `[0, 1]`, rounded to two decimals.
///
/// When every score is equal (including a single candidate) all scores become 1.0.
pub fn normalize_scores(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    if scored.is_empty() {
        return scored;
    }

    let max = scored
        .iter()
        .map(|candidate| candidate.score)
        .fold(f64::NEG_INFINITY, f64::max);
    let min = scored
        .iter()
        .map(|candidate| candidate.score)
        .fold(f64::INFINITY, f64::min);

    if max == min {
        for candidate in &mut scored {
            candidate.score = 1.0;
        }
        return scored;
    }

    let spread = max - min;
    for candidate in &mut scored {
        candidate.score = round_to_hundredths((candidate.score - min) / spread);
    }
    scored
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sorts by descending score and assigns 1-based ranks.
///
/// The sort is stable: equal scores keep their incoming relative order.
pub fn assign_ranks(mut scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    for (index, candidate) in scored.iter_mut().enumerate() {
        candidate.rank = index + 1;
    }
    scored
}
