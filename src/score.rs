use std::collections::HashSet;

use crate::model::{CandidateDefect, GroundTruthDefect};

const LOCATION_TERM: f64 = 0.4;
const DESCRIPTION_TERM: f64 = 0.6;

/// Confidence that a candidate describes a given ground-truth defect, in
/// [0.0, 1.0]. Deliberately cheap and traceable: a location substring term
/// plus a shared-description-word term, no semantic similarity.
pub fn confidence(truth: &GroundTruthDefect, candidate: &CandidateDefect) -> f64 {
    let mut score = 0.0_f64;

    let truth_location = truth.location.to_lowercase();
    let candidate_location = candidate.location.to_lowercase();
    if !truth_location.is_empty()
        && !candidate_location.is_empty()
        && (truth_location.contains(&candidate_location)
            || candidate_location.contains(&truth_location))
    {
        score += LOCATION_TERM;
    }

    let truth_words = word_set(&truth.description);
    let candidate_words = word_set(&candidate.description);
    let denominator = truth_words.len().max(candidate_words.len());
    if denominator > 0 {
        let common = truth_words
            .iter()
            .filter(|word| word.len() > 2 && candidate_words.contains(word.as_str()))
            .count();
        score += DESCRIPTION_TERM * common as f64 / denominator as f64;
    }

    score.min(1.0)
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
