//! Eval case format and loader: JSON ground-truth/ranked-list pairs.
//!
//! The metric functions never touch the filesystem; this module is the input
//! surface for the eval binary and for harnesses that keep their cases in
//! JSON.

use crate::error::{RankevalError, Result};
use serde::Deserialize;
use std::path::Path;

/// Single evaluation case: one query's ground truth and ranked output.
#[derive(Debug, Clone, Deserialize)]
pub struct EvalCase {
    /// Case name for reporting (e.g. the query text or an id).
    pub name: String,
    /// Ground-truth relevant item ids (unordered; duplicates collapse).
    pub relevant: Vec<u64>,
    /// Ranked item ids as returned by the system under evaluation, best first.
    pub ranked: Vec<u64>,
}

/// Load evaluation cases from a JSON file holding an array of cases.
/// Fails with `InvalidArgument` if the file holds no cases.
pub fn load_cases(path: &Path) -> Result<Vec<EvalCase>> {
    let json = std::fs::read_to_string(path)?;
    let cases: Vec<EvalCase> = serde_json::from_str(&json)
        .map_err(|e| RankevalError::Parse(format!("{}: {}", path.display(), e)))?;
    if cases.is_empty() {
        return Err(RankevalError::InvalidArgument(format!(
            "no cases in {}",
            path.display()
        )));
    }
    log::debug!("loaded {} eval cases from {}", cases.len(), path.display());
    Ok(cases)
}
