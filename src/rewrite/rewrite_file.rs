use crate::err::error::ToolError;
use crate::rewrite::atomic_write::atomic_write;
use crate::rewrite::options::RewriteOptions;
use crate::rewrite::replace_literal::replace_literal;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// No occurrence, the file was not written.
    Unchanged,
    Updated { occurrences: usize },
}

/// Reads `path` as UTF-8 and rewrites it only when `opts.from` occurs in it.
pub fn rewrite_file(path: &Path, opts: &RewriteOptions) -> Result<FileOutcome, ToolError> {
    let raw = fs::read(path).map_err(|e| ToolError::from(e).ctx_with("rewrite.read-failed", |err| err.with_arg("path", path)))?;
    let content = String::from_utf8(raw).map_err(|e| {
        ToolError::new("rewrite.decode-failed")
            .with_arg("path", path)
            .with_arg("offset", e.utf8_error().valid_up_to())
            .push_std(e.utf8_error())
    })?;

    let Some((new_content, occurrences)) = replace_literal(&content, &opts.from, &opts.to) else {
        return Ok(FileOutcome::Unchanged);
    };

    atomic_write(path, new_content.as_bytes()).map_err(|e| e.ctx_with("rewrite.write-failed", |err| err.with_arg("path", path)))?;
    Ok(FileOutcome::Updated { occurrences })
}
