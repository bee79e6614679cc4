use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const MANIFEST_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "major")]
    Major,
    #[serde(alias = "minor")]
    Minor,
    #[serde(alias = "subtle")]
    Subtle,
    #[serde(alias = "unknown")]
    Unknown,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Major => "Major",
            Severity::Minor => "Minor",
            Severity::Subtle => "Subtle",
            Severity::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTruthDefect {
    pub id: String,
    pub location: String,
    pub description: String,
    pub severity: Severity,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSource {
    pub detector: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateDefect {
    pub id: String,
    pub location: String,
    pub description: String,
    pub severity: Severity,
    pub source: CandidateSource,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchRecord {
    pub truth: GroundTruthDefect,
    pub candidate: CandidateDefect,
    pub confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AccuracySummary {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub detector: String,
    pub context: String,
    pub total_reported: Option<usize>,
    pub candidates: Vec<CandidateDefect>,
    pub matches: Vec<MatchRecord>,
    pub false_positives: Vec<CandidateDefect>,
    pub missed: Vec<GroundTruthDefect>,
    pub accuracy: AccuracySummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectorRollup {
    pub detector: String,
    pub detected: usize,
    pub correct: usize,
    #[serde(rename = "false")]
    pub false_reports: usize,
    pub precision: f64,
    pub recall: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorReport {
    pub status: String,
    #[serde(default)]
    pub analysis: String,
}

pub type DetectorOutputDocument = BTreeMap<String, BTreeMap<String, DetectorReport>>;

#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub catalog_size: usize,
    pub runs: Vec<RunResult>,
    pub detectors: Vec<DetectorRollup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub manifest_version: u32,
    pub generated_at: String,
    pub catalog_path: String,
    pub catalog_sha256: String,
    pub results_path: String,
    pub results_sha256: String,
    pub catalog_size: usize,
    pub runs: Vec<RunResult>,
    pub detectors: Vec<DetectorRollup>,
}
