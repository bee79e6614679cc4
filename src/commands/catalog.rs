use std::collections::BTreeMap;

use anyhow::Result;
use tracing::info;

use crate::catalog;
use crate::cli::CatalogArgs;

pub fn run(args: CatalogArgs) -> Result<()> {
    let defects = catalog::load_catalog(&args.catalog_path)?;

    let mut by_severity = BTreeMap::<&str, usize>::new();
    let mut by_category = BTreeMap::<&str, usize>::new();
    for defect in &defects {
        *by_severity.entry(defect.severity.as_str()).or_default() += 1;
        *by_category.entry(defect.category.as_str()).or_default() += 1;
    }

    info!(path = %args.catalog_path.display(), defects = defects.len(), "catalog is well formed");
    for (severity, count) in &by_severity {
        info!(severity = %severity, count = *count, "severity breakdown");
    }
    for (category, count) in &by_category {
        info!(category = %category, count = *count, "category breakdown");
    }

    Ok(())
}
