// src/core/export.rs

use crate::core::models::AnalysisResult;
use chrono::Local;
use color_eyre::eyre::{Result, WrapErr};
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `result` as pretty JSON to `<dir>/analysis-<timestamp>.json` and
/// returns the path written.
pub fn export_analysis(result: &AnalysisResult, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("creating export directory {}", dir.display()))?;

    let file_name = format!("analysis-{}.json", Local::now().format("%Y%m%d-%H%M%S%.3f"));
    let path = dir.join(file_name);
    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json).wrap_err_with(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), findings = result.findings.len(), "Analysis exported.");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Finding;

    #[test]
    fn export_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let result = AnalysisResult {
            findings: vec![Finding { kind: "kra_pin".to_string(), value: "A123456789Z".to_string() }],
            document_type: "Tax Return".to_string(),
            risk_level: "High".to_string(),
        };

        let path = export_analysis(&result, &dir.path().join("exports")).unwrap();
        assert!(path.starts_with(dir.path()));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["findings"][0]["type"], "kra_pin");
        assert_eq!(written["risk_level"], "High");
    }
}
