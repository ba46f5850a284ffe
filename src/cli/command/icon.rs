use crate::err::error::ToolError;
use crate::icon::icon_spec::IconSpec;
use crate::icon::save_wallet_icon::save_wallet_icon;
use std::io::Write;

pub fn icon(spec: &IconSpec, out: &mut impl Write) -> Result<(), ToolError> {
    let out_path = save_wallet_icon(spec)?;
    writeln!(out, "✓ Icon saved to {}", out_path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prints_saved_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("wallet-icon-1024.png");
        let spec = IconSpec { output: path.clone(), ..IconSpec::default() };

        let mut out = Vec::new();
        icon(&spec, &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("✓ Icon saved to {}\n", path.display()));
        assert!(path.is_file());
    }

    #[test]
    fn prints_nothing_on_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let spec = IconSpec { output: tmp.path().join("missing/icon.png"), ..IconSpec::default() };

        let mut out = Vec::new();
        let err = icon(&spec, &mut out).unwrap_err();

        assert_eq!(err.key, "icon.output-dir-missing");
        assert!(out.is_empty());
    }
}
