use crate::err::error::ToolError;
use crate::rewrite::options::RewriteOptions;
use std::path::PathBuf;
use tracing::trace;
use walkdir::WalkDir;

/// Regular files under `opts.root` whose name ends with `opts.suffix`,
/// in file name order per directory. Symlinks are not followed.
pub fn find_files(opts: &RewriteOptions) -> Result<Vec<PathBuf>, ToolError> {
    if !opts.root.is_dir() {
        return Err(ToolError::new("rewrite.root-not-dir").with_arg("root", opts.root.as_path()));
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(&opts.root).sort_by_file_name() {
        let entry = entry.map_err(|e| ToolError::from(e).ctx("rewrite.walk-failed"))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !opts.matches_name(&name) {
            trace!(path = %entry.path().display(), "suffix mismatch");
            continue;
        }
        out.push(entry.into_path());
    }
    Ok(out)
}
