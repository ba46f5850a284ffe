use crate::err::error::ToolError;
use crate::icon::encode_png::encode_png;
use crate::icon::icon_spec::IconSpec;
use crate::icon::render_wallet_icon::render_wallet_icon;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Renders the icon and writes it to `spec.output`, overwriting any existing file.
///
/// The parent directory must already exist. The PNG is fully encoded before the
/// target is opened, so a failed open leaves the old file untouched. A failure
/// after the open (disk full) can still leave a truncated file.
pub fn save_wallet_icon(spec: &IconSpec) -> Result<PathBuf, ToolError> {
    let out_path = spec.output.clone();
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            return Err(ToolError::new("icon.output-dir-missing").with_arg("dir", parent));
        }
    }

    let img = render_wallet_icon(spec)?;
    let bytes = encode_png(&img)?;
    debug!(path = %out_path.display(), bytes = bytes.len(), "writing icon");

    fs::write(&out_path, &bytes).map_err(|e| ToolError::from(e).ctx_with("icon.save-failed", |err| err.with_arg("path", out_path.as_path())))?;
    Ok(out_path)
}
