// azseed-core/src/application/script.rs

use std::path::Path;
use tracing::{debug, instrument};

use crate::domain::SeedScript;
use crate::error::SeedError;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::read_seed_file;

/// Reads and splits the seed file.
///
/// A missing file is reported as such; every other read failure is wrapped
/// in [`SeedError::SeedFile`].
#[instrument]
pub fn load_seed_script(path: &Path) -> Result<SeedScript, SeedError> {
    let content = match read_seed_file(path) {
        Ok(content) => content,
        Err(e @ InfrastructureError::SeedFileNotFound(_)) => return Err(e.into()),
        Err(e) => return Err(SeedError::seed_file(path.display().to_string(), e.into())),
    };

    let script = SeedScript::parse(&content);
    debug!(
        statements = script.len(),
        lines = script.line_count,
        skipped = script.skipped_directives,
        "Seed file parsed"
    );
    Ok(script)
}
