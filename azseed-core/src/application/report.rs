// azseed-core/src/application/report.rs

use std::path::Path;

use crate::domain::RunReport;
use crate::error::SeedError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Persists the run report as pretty JSON.
pub fn save_report(path: &Path, report: &RunReport) -> Result<(), SeedError> {
    let content = serde_json::to_string_pretty(report).map_err(InfrastructureError::Json)?;
    atomic_write(path, content)?;
    Ok(())
}
