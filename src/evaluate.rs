use anyhow::Result;
use tracing::debug;

use crate::extract::{self, Extraction};
use crate::matching;
use crate::metrics;
use crate::model::{
    DetectorOutputDocument, DetectorReport, Evaluation, GroundTruthDefect, RunResult,
};

pub const SUCCESS_STATUS: &str = "success";

/// Evaluates every (context, detector) entry of the document against the
/// catalog, in lexicographic key order so output is deterministic.
pub fn evaluate_document(
    catalog: &[GroundTruthDefect],
    document: &DetectorOutputDocument,
) -> Result<Evaluation> {
    let mut runs = Vec::<RunResult>::new();

    for (context, detectors) in document {
        for (detector, report) in detectors {
            runs.push(evaluate_run(catalog, detector, context, report)?);
        }
    }

    let detectors = metrics::rollup_by_detector(&runs);

    Ok(Evaluation {
        catalog_size: catalog.len(),
        runs,
        detectors,
    })
}

/// One detector against one rendering context. A non-success status is not
/// an error; the run scores as zero candidates and a fully missed catalog.
pub fn evaluate_run(
    catalog: &[GroundTruthDefect],
    detector: &str,
    context: &str,
    report: &DetectorReport,
) -> Result<RunResult> {
    let extraction = if report.status == SUCCESS_STATUS {
        extract::extract_candidates(&report.analysis, detector, context)?
    } else {
        debug!(
            detector,
            context,
            status = %report.status,
            "detector did not succeed; scoring as zero candidates"
        );
        Extraction::default()
    };

    if let Some(total) = extraction.total_reported
        && total != extraction.candidates.len()
    {
        debug!(
            detector,
            context,
            reported = total,
            extracted = extraction.candidates.len(),
            "reported difference count does not match extracted candidates"
        );
    }

    let outcome = matching::match_candidates(catalog, &extraction.candidates);
    let accuracy = metrics::run_accuracy(
        outcome.matches.len(),
        outcome.false_positives.len(),
        outcome.missed.len(),
        catalog.len(),
    );

    Ok(RunResult {
        detector: detector.to_string(),
        context: context.to_string(),
        total_reported: extraction.total_reported,
        candidates: extraction.candidates,
        matches: outcome.matches,
        false_positives: outcome.false_positives,
        missed: outcome.missed,
        accuracy,
    })
}
