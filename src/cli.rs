use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "vreval",
    version,
    about = "Detection-accuracy evaluation for visual-regression detectors"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Evaluate(EvaluateArgs),
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EvaluateArgs {
    #[arg(long = "catalog", default_value = "ground-truth.json")]
    pub catalog_path: PathBuf,

    #[arg(long = "results", default_value = "analysis-results.json")]
    pub results_path: PathBuf,

    #[arg(long = "output", default_value = "accuracy-report.json")]
    pub output_path: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long = "catalog", default_value = "ground-truth.json")]
    pub catalog_path: PathBuf,
}
