use crate::err::error::ToolError;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the content of `path` via a sibling temp file and a rename.
///
/// The target keeps its old content until the rename. If anything fails the
/// temp file is removed when dropped. Permissions of an existing target carry over.
///
/// An existing target must be writable itself. The rename only needs access to
/// the directory, so a read-only file would otherwise be replaced.
pub fn atomic_write(path: &Path, bytes: &[u8]) -> Result<(), ToolError> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let existing = match fs::metadata(path) {
        Ok(meta) => {
            // no truncate: the target stays intact until the rename
            fs::OpenOptions::new()
                .write(true)
                .open(path)?;
            Some(meta)
        }
        Err(_) => None,
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    if let Some(meta) = existing {
        tmp.as_file()
            .set_permissions(meta.permissions())?;
    }
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
