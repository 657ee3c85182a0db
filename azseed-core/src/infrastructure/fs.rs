use crate::infrastructure::error::InfrastructureError;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Reads the whole seed file into memory.
///
/// A missing file gets its own error so the CLI can report it plainly;
/// any other IO failure is passed through.
pub fn read_seed_file(path: &Path) -> Result<String, InfrastructureError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => InfrastructureError::SeedFileNotFound(path.display().to_string()),
        _ => InfrastructureError::Io(e),
    })
}

/// Write content to a file atomically using a temporary file.
///
/// The temporary file is created next to the target, then renamed over it,
/// so the target is either fully written or left untouched.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(
    path: P,
    content: C,
) -> Result<(), InfrastructureError> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(InfrastructureError::Io)?;

    temp_file
        .write_all(content.as_ref())
        .map_err(InfrastructureError::Io)?;

    temp_file
        .persist(path)
        .map_err(|e| InfrastructureError::Io(e.error))?;

    Ok(())
}
