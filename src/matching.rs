use crate::model::{CandidateDefect, GroundTruthDefect, MatchRecord};
use crate::score;

/// UI regions a location string can name.
const REGION_KEYWORDS: [&str; 14] = [
    "header",
    "logo",
    "hero",
    "button",
    "cta",
    "feature",
    "card",
    "stats",
    "team",
    "contact",
    "form",
    "submit",
    "background",
    "browser",
];

/// Visual properties a description can name.
const PROPERTY_KEYWORDS: [&str; 12] = [
    "color",
    "red",
    "blue",
    "margin",
    "padding",
    "position",
    "border-radius",
    "box-shadow",
    "font-size",
    "opacity",
    "overlap",
    "alignment",
];

#[derive(Debug, Clone, PartialEq)]
pub struct MatchOutcome {
    pub matches: Vec<MatchRecord>,
    pub false_positives: Vec<CandidateDefect>,
    pub missed: Vec<GroundTruthDefect>,
}

/// Coarse eligibility predicate, independent of the confidence score: the
/// two locations share a UI-region keyword, or the two descriptions share a
/// visual-property keyword.
pub fn coarse_match(truth: &GroundTruthDefect, candidate: &CandidateDefect) -> bool {
    shares_keyword(&truth.location, &candidate.location, &REGION_KEYWORDS)
        || shares_keyword(&truth.description, &candidate.description, &PROPERTY_KEYWORDS)
}

fn shares_keyword(left: &str, right: &str, keywords: &[&str]) -> bool {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    keywords
        .iter()
        .any(|keyword| left.contains(keyword) && right.contains(keyword))
}

/// Greedy, order-dependent, one-to-one matching: candidates are taken in
/// extraction order and each claims the first unclaimed catalog entry, in
/// catalog order, that passes the coarse predicate. Confidence is computed
/// for accepted pairs only and never influences the pairing decision.
pub fn match_candidates(
    catalog: &[GroundTruthDefect],
    candidates: &[CandidateDefect],
) -> MatchOutcome {
    let mut claimed = vec![false; catalog.len()];
    let mut matches = Vec::<MatchRecord>::new();
    let mut false_positives = Vec::<CandidateDefect>::new();

    for candidate in candidates {
        let selected = catalog
            .iter()
            .enumerate()
            .find(|(index, truth)| !claimed[*index] && coarse_match(truth, candidate));

        match selected {
            Some((index, truth)) => {
                claimed[index] = true;
                matches.push(MatchRecord {
                    truth: truth.clone(),
                    candidate: candidate.clone(),
                    confidence: score::confidence(truth, candidate),
                });
            }
            None => false_positives.push(candidate.clone()),
        }
    }

    let missed = catalog
        .iter()
        .zip(&claimed)
        .filter(|(_, taken)| !**taken)
        .map(|(truth, _)| truth.clone())
        .collect();

    MatchOutcome {
        matches,
        false_positives,
        missed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CandidateSource, Severity};

    fn truth(id: &str, location: &str, description: &str) -> GroundTruthDefect {
        GroundTruthDefect {
            id: id.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            severity: Severity::Minor,
            category: "Color Change".to_string(),
            rule: None,
        }
    }

    fn candidate(id: &str, location: &str, description: &str) -> CandidateDefect {
        CandidateDefect {
            id: id.to_string(),
            location: location.to_string(),
            description: description.to_string(),
            severity: Severity::Unknown,
            source: CandidateSource {
                detector: "gpt4v".to_string(),
                context: "chromium".to_string(),
            },
        }
    }

    #[test]
    fn coarse_match_on_shared_region_keyword() {
        let truth = truth("bug-1", "Header Logo", "color changed");
        let candidate = candidate("c1", "the header area", "something looks different");
        assert!(coarse_match(&truth, &candidate));
    }

    #[test]
    fn coarse_match_on_shared_property_keyword() {
        let truth = truth("bug-1", "Footer", "padding increased to 32px");
        let candidate = candidate("c1", "bottom of the page", "extra padding below the links");
        assert!(coarse_match(&truth, &candidate));
    }

    #[test]
    fn coarse_match_rejects_unrelated_pair() {
        let truth = truth("bug-1", "Header Logo", "color changed");
        let candidate = candidate("c1", "Footer links", "text wraps differently");
        assert!(!coarse_match(&truth, &candidate));
    }

    #[test]
    fn candidate_claims_first_eligible_truth_in_catalog_order() {
        let catalog = vec![
            truth("bug-1", "Header Logo", "color changed"),
            truth("bug-2", "Header Nav", "alignment shifted"),
        ];
        let candidates = vec![candidate("c1", "header", "looks wrong")];

        let outcome = match_candidates(&catalog, &candidates);
        assert_eq!(outcome.matches.len(), 1);
        assert_eq!(outcome.matches[0].truth.id, "bug-1");
        assert_eq!(outcome.missed.len(), 1);
        assert_eq!(outcome.missed[0].id, "bug-2");
    }

    #[test]
    fn matching_is_one_to_one() {
        let catalog = vec![
            truth("bug-1", "Header Logo", "color changed"),
            truth("bug-2", "Header Nav", "alignment shifted"),
        ];
        let candidates = vec![
            candidate("c1", "header", "looks wrong"),
            candidate("c2", "header", "still looks wrong"),
            candidate("c3", "header", "very wrong"),
        ];

        let outcome = match_candidates(&catalog, &candidates);
        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.matches[0].truth.id, "bug-1");
        assert_eq!(outcome.matches[1].truth.id, "bug-2");
        assert_eq!(outcome.false_positives.len(), 1);
        assert_eq!(outcome.false_positives[0].id, "c3");
        assert!(outcome.missed.is_empty());

        let mut truth_ids: Vec<&str> = outcome
            .matches
            .iter()
            .map(|record| record.truth.id.as_str())
            .collect();
        truth_ids.sort_unstable();
        truth_ids.dedup();
        assert_eq!(truth_ids.len(), outcome.matches.len());
    }

    #[test]
    fn unmatched_candidate_is_a_false_positive() {
        let catalog = vec![truth("bug-1", "Header Logo", "color changed")];
        let candidates = vec![candidate("c1", "somewhere else", "different text")];

        let outcome = match_candidates(&catalog, &candidates);
        assert!(outcome.matches.is_empty());
        assert_eq!(outcome.false_positives.len(), 1);
        assert_eq!(outcome.missed.len(), 1);
    }

    #[test]
    fn rematching_same_input_is_identical() {
        let catalog = vec![
            truth("bug-1", "Header Logo", "color changed"),
            truth("bug-2", "CTA Button", "padding increased"),
        ];
        let candidates = vec![
            candidate("c1", "button", "bigger gap"),
            candidate("c2", "logo", "tint looks off"),
        ];

        let first = match_candidates(&catalog, &candidates);
        let second = match_candidates(&catalog, &candidates);
        assert_eq!(first, second);
    }

    #[test]
    fn candidate_order_drives_assignment() {
        let catalog = vec![truth("bug-1", "Header Logo", "color changed")];
        let early = candidate("c1", "header", "wrong");
        let late = candidate("c2", "logo", "also wrong");

        let forward = match_candidates(&catalog, &[early.clone(), late.clone()]);
        assert_eq!(forward.matches[0].candidate.id, "c1");

        let reversed = match_candidates(&catalog, &[late, early]);
        assert_eq!(reversed.matches[0].candidate.id, "c2");
    }

    #[test]
    fn confidence_is_reported_for_accepted_matches() {
        let catalog = vec![truth("bug-1", "Header Logo", "color changed red")];
        let candidates = vec![candidate("c1", "Header Logo Text", "logo color is red")];

        let outcome = match_candidates(&catalog, &candidates);
        assert_eq!(outcome.matches.len(), 1);
        assert!(outcome.matches[0].confidence > 0.4);
    }
}
