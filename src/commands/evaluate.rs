use anyhow::Result;
use tracing::info;

use crate::catalog;
use crate::cli::EvaluateArgs;
use crate::evaluate;
use crate::model::{DetectorOutputDocument, EvaluationReport, MANIFEST_VERSION};
use crate::util;

pub fn run(args: EvaluateArgs) -> Result<()> {
    let defects = catalog::load_catalog(&args.catalog_path)?;
    let document: DetectorOutputDocument = util::read_json_file(&args.results_path)?;
    info!(
        defects = defects.len(),
        contexts = document.len(),
        "loaded input documents"
    );

    let evaluation = evaluate::evaluate_document(&defects, &document)?;

    let report = EvaluationReport {
        manifest_version: MANIFEST_VERSION,
        generated_at: util::now_utc_string(),
        catalog_path: args.catalog_path.display().to_string(),
        catalog_sha256: util::sha256_file(&args.catalog_path)?,
        results_path: args.results_path.display().to_string(),
        results_sha256: util::sha256_file(&args.results_path)?,
        catalog_size: evaluation.catalog_size,
        runs: evaluation.runs,
        detectors: evaluation.detectors,
    };

    util::write_json_pretty(&args.output_path, &report)?;
    info!(path = %args.output_path.display(), runs = report.runs.len(), "wrote evaluation report");

    for detector in &report.detectors {
        info!(
            detector = %detector.detector,
            detected = detector.detected,
            correct = detector.correct,
            precision = detector.precision,
            recall = detector.recall,
            "detector summary"
        );
    }

    Ok(())
}
