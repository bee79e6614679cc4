use anyhow::{Context, Result};
use regex::Regex;

use crate::model::{CandidateDefect, CandidateSource, Severity};

mod fallback;
mod strategies;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDefect {
    pub location: String,
    pub description: String,
    pub severity: Severity,
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub total_reported: Option<usize>,
    pub candidates: Vec<CandidateDefect>,
}

/// Structured strategies in fixed priority order; the first strategy that
/// yields at least one defect wins and results are never merged across
/// strategies.
const STRATEGIES: &[fn(&str) -> Result<Vec<ParsedDefect>>] = &[
    strategies::labeled_triples,
    strategies::bold_bullet_items,
    strategies::numbered_bold_items,
    strategies::quoted_locations,
];

pub fn extract_candidates(analysis: &str, detector: &str, context: &str) -> Result<Extraction> {
    let total_reported = scan_reported_count(analysis)?;

    let mut parsed = run_strategy_cascade(analysis)?;
    if parsed.is_empty() {
        parsed = fallback::scan_marker_lines(analysis);
    }

    let candidates = parsed
        .into_iter()
        .enumerate()
        .map(|(index, defect)| CandidateDefect {
            id: format!("{}_{}_{}", detector, context, index + 1),
            location: defect.location,
            description: defect.description,
            severity: defect.severity,
            source: CandidateSource {
                detector: detector.to_string(),
                context: context.to_string(),
            },
        })
        .collect();

    Ok(Extraction {
        total_reported,
        candidates,
    })
}

fn run_strategy_cascade(text: &str) -> Result<Vec<ParsedDefect>> {
    for strategy in STRATEGIES {
        let parsed = strategy(text)?;
        if !parsed.is_empty() {
            return Ok(parsed);
        }
    }

    Ok(Vec::new())
}

/// Picks up a declarative count phrase such as "Found 7 differences" or
/// "7 visual differences were detected". Used only for cross-checking the
/// extracted candidate count, never for scoring.
fn scan_reported_count(text: &str) -> Result<Option<usize>> {
    let pattern = Regex::new(
        r"(?i)\b(?:found|detected|identified)\s+(\d+)\s+(?:visual\s+)?differences?\b|\b(\d+)\s+(?:visual\s+)?differences?\s+(?:were\s+|was\s+)?(?:found|detected|identified)\b",
    )
    .context("failed to compile reported count regex")?;

    let Some(captures) = pattern.captures(text) else {
        return Ok(None);
    };

    let digits = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|group| group.as_str());

    Ok(digits.and_then(|value| value.parse::<usize>().ok()))
}

pub(crate) fn severity_from_text(text: &str) -> Severity {
    let lowered = text.to_lowercase();
    if lowered.contains("major") {
        Severity::Major
    } else if lowered.contains("minor") {
        Severity::Minor
    } else if lowered.contains("subtle") {
        Severity::Subtle
    } else {
        Severity::Unknown
    }
}

pub(crate) fn clean_fragment(text: &str) -> String {
    text.trim()
        .trim_matches('*')
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_string()
}
