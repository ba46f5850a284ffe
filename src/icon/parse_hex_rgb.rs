use crate::err::error::ToolError;
use image::Rgb;

/// Parses `#RRGGBB` (leading `#` optional) into an RGB pixel.
pub fn parse_hex_rgb(s: &str) -> Result<Rgb<u8>, ToolError> {
    let bad = || ToolError::new("icon.bad-color").with_arg("value", s);

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(bad());
    }

    let mut out = [0u8; 3];
    for (i, c) in out.iter_mut().enumerate() {
        *c = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).map_err(|e| bad().push_std(e))?;
    }
    Ok(Rgb(out))
}
