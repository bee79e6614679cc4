use std::collections::BTreeMap;

use crate::model::{AccuracySummary, DetectorRollup, RunResult};

pub fn run_accuracy(
    matched: usize,
    false_positives: usize,
    missed: usize,
    catalog_size: usize,
) -> AccuracySummary {
    AccuracySummary {
        true_positives: matched,
        false_positives,
        false_negatives: missed,
        precision: ratio(matched, matched + false_positives),
        recall: ratio(matched, catalog_size),
    }
}

pub fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Rolls runs up per detector by summing counts across contexts and
/// recomputing precision/recall from the sums. Averaging per-run ratios
/// would bias toward runs with few candidates.
pub fn rollup_by_detector(runs: &[RunResult]) -> Vec<DetectorRollup> {
    let mut totals = BTreeMap::<&str, (usize, usize, usize)>::new();

    for run in runs {
        let entry = totals.entry(run.detector.as_str()).or_default();
        entry.0 += run.accuracy.true_positives;
        entry.1 += run.accuracy.false_positives;
        entry.2 += run.accuracy.false_negatives;
    }

    totals
        .into_iter()
        .map(
            |(detector, (true_positives, false_positives, false_negatives))| DetectorRollup {
                detector: detector.to_string(),
                detected: true_positives + false_positives,
                correct: true_positives,
                false_reports: false_positives,
                precision: ratio(true_positives, true_positives + false_positives),
                recall: ratio(true_positives, true_positives + false_negatives),
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(detector: &str, context: &str, accuracy: AccuracySummary) -> RunResult {
        RunResult {
            detector: detector.to_string(),
            context: context.to_string(),
            total_reported: None,
            candidates: Vec::new(),
            matches: Vec::new(),
            false_positives: Vec::new(),
            missed: Vec::new(),
            accuracy,
        }
    }

    #[test]
    fn precision_is_zero_without_candidates() {
        let accuracy = run_accuracy(0, 0, 11, 11);
        assert_eq!(accuracy.precision, 0.0);
        assert_eq!(accuracy.recall, 0.0);
        assert!(accuracy.precision.is_finite());
    }

    #[test]
    fn empty_catalog_does_not_divide_by_zero() {
        let accuracy = run_accuracy(0, 3, 0, 0);
        assert_eq!(accuracy.recall, 0.0);
        assert_eq!(accuracy.precision, 0.0);
        assert_eq!(accuracy.false_positives, 3);
    }

    #[test]
    fn accuracy_values_stay_in_unit_range() {
        let accuracy = run_accuracy(4, 22, 7, 11);
        assert!(accuracy.precision >= 0.0 && accuracy.precision <= 1.0);
        assert!(accuracy.recall >= 0.0 && accuracy.recall <= 1.0);
        assert!((accuracy.precision - 4.0 / 26.0).abs() < 1e-9);
        assert!((accuracy.recall - 4.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn rollup_recomputes_from_summed_counts() {
        let runs = vec![
            run("gpt4v", "chromium", run_accuracy(1, 0, 10, 11)),
            run("gpt4v", "firefox", run_accuracy(0, 10, 11, 11)),
        ];

        let rollups = rollup_by_detector(&runs);
        assert_eq!(rollups.len(), 1);
        let rollup = &rollups[0];
        assert_eq!(rollup.detected, 11);
        assert_eq!(rollup.correct, 1);
        assert_eq!(rollup.false_reports, 10);
        // 1/11, not the 0.5 a ratio average would give.
        assert!((rollup.precision - 1.0 / 11.0).abs() < 1e-9);
        assert!((rollup.recall - 1.0 / 22.0).abs() < 1e-9);
    }

    #[test]
    fn rollup_keeps_detectors_separate_and_sorted() {
        let runs = vec![
            run("pixelmatch", "chromium", run_accuracy(2, 1, 9, 11)),
            run("gpt4v", "chromium", run_accuracy(4, 22, 7, 11)),
        ];

        let rollups = rollup_by_detector(&runs);
        assert_eq!(rollups.len(), 2);
        assert_eq!(rollups[0].detector, "gpt4v");
        assert_eq!(rollups[1].detector, "pixelmatch");
    }
}
