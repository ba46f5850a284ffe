use crate::err::error::ToolError;
use crate::rewrite::find_files::find_files;
use crate::rewrite::options::RewriteOptions;
use crate::rewrite::rewrite_file::{FileOutcome, rewrite_file};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub files_scanned: usize,
    pub files_updated: usize,
    pub occurrences: usize,
    pub updated: Vec<PathBuf>,
}

/// Same as [`rewrite_tree_with`] without a progress callback.
pub fn rewrite_tree(opts: &RewriteOptions) -> Result<RewriteReport, ToolError> {
    rewrite_tree_with(opts, |_, _| Ok(()))
}

/// Rewrites every matching file under `opts.root`, calling `on_update` right
/// after each file is written.
///
/// Stops at the first error, including one returned by `on_update`. Files
/// rewritten before it stay rewritten.
pub fn rewrite_tree_with(opts: &RewriteOptions, mut on_update: impl FnMut(&Path, usize) -> Result<(), ToolError>) -> Result<RewriteReport, ToolError> {
    if opts.from.is_empty() {
        return Err(ToolError::new("rewrite.empty-pattern"));
    }

    let mut report = RewriteReport::default();
    for path in find_files(opts)? {
        report.files_scanned += 1;
        match rewrite_file(&path, opts)? {
            FileOutcome::Unchanged => debug!(path = %path.display(), "no match"),
            FileOutcome::Updated { occurrences } => {
                debug!(path = %path.display(), occurrences, "updated");
                on_update(&path, occurrences)?;
                report.files_updated += 1;
                report.occurrences += occurrences;
                report.updated.push(path);
            }
        }
    }

    info!(scanned = report.files_scanned, updated = report.files_updated, occurrences = report.occurrences, "rewrite done");
    Ok(report)
}
