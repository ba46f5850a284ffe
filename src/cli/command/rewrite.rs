use crate::err::error::ToolError;
use crate::rewrite::options::RewriteOptions;
use crate::rewrite::rewrite_tree::rewrite_tree_with;
use std::io::Write;

/// Rewrites the tree, reporting each updated file and the total to `out`.
pub fn rewrite(opts: &RewriteOptions, out: &mut impl Write) -> Result<(), ToolError> {
    let report = rewrite_tree_with(opts, |path, _| Ok(writeln!(out, "Updated: {}", path.display())?))?;
    writeln!(out, "\nTotal files updated: {}", report.files_updated)?;
    Ok(())
}
