use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::assessment::AssessmentOutcome;

/// JSON envelope handed to the configuration-merge layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Report {
    pub version: u32,
    pub assessed_at: DateTime<Utc>,
    pub gate_recommendations: bool,
    #[serde(flatten)]
    pub outcome: AssessmentOutcome,
}

impl Report {
    pub fn new(outcome: AssessmentOutcome) -> Self {
        Self {
            version: 1,
            assessed_at: Utc::now(),
            gate_recommendations: outcome.gates_recommendations(),
            outcome,
        }
    }
}

/// Save a report to a JSON file atomically
///
/// Uses atomic-write-file so a reader never sees a half-written report.
pub fn save_report(path: &Path, report: &Report) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, report).context("Failed to serialize report")?;

    file.commit()
        .with_context(|| format!("Failed to save report to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::AssessmentEngine;
    use crate::responses::ResponseMap;
    use std::fs::File;

    #[test]
    fn test_save_report_writes_flat_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        let outcome = AssessmentEngine::default().run(&ResponseMap::new());
        let report = Report::new(outcome);
        save_report(&path, &report).unwrap();

        let value: serde_json::Value = serde_json::from_reader(File::open(&path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["gate_recommendations"], true);
        assert_eq!(value["scores"]["anxiety"], 50);
        assert_eq!(value["routing"]["primary_profile"], "secure_training");

        let loaded: Report = serde_json::from_value(value).unwrap();
        assert_eq!(loaded, report);
    }

    #[test]
    fn test_save_report_bad_directory() {
        let outcome = AssessmentEngine::default().run(&ResponseMap::new());
        let result = save_report(Path::new("/nonexistent/attune/report.json"), &Report::new(outcome));
        assert!(result.is_err());
    }
}
