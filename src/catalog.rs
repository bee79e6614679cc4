use std::collections::HashSet;
use std::path::Path;

use anyhow::{Result, bail};

use crate::model::{GroundTruthDefect, Severity};
use crate::util;

/// Loads the ground-truth catalog and validates it before any run executes.
/// A malformed catalog is fatal; runs assume field presence without
/// re-validation.
pub fn load_catalog(path: &Path) -> Result<Vec<GroundTruthDefect>> {
    let catalog: Vec<GroundTruthDefect> = util::read_json_file(path)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &[GroundTruthDefect]) -> Result<()> {
    let mut seen_ids = HashSet::<&str>::new();

    for (index, defect) in catalog.iter().enumerate() {
        if defect.id.trim().is_empty() {
            bail!("catalog entry at index {} has an empty id", index);
        }
        if !seen_ids.insert(defect.id.as_str()) {
            bail!("duplicate catalog id: {}", defect.id);
        }
        if defect.location.trim().is_empty() {
            bail!("catalog entry {} has an empty location", defect.id);
        }
        if defect.description.trim().is_empty() {
            bail!("catalog entry {} has an empty description", defect.id);
        }
        if defect.category.trim().is_empty() {
            bail!("catalog entry {} has an empty category", defect.id);
        }
        if defect.severity == Severity::Unknown {
            bail!(
                "catalog entry {} has severity Unknown; expected Major, Minor, or Subtle",
                defect.id
            );
        }
    }

    Ok(())
}
