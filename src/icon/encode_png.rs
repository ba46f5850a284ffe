use crate::err::error::ToolError;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

/// Encodes the whole image to PNG bytes in memory.
pub fn encode_png(img: &RgbImage) -> Result<Vec<u8>, ToolError> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| ToolError::from(e).ctx("icon.encode-failed"))?;
    Ok(buf)
}
