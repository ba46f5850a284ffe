use image::Rgb;
use std::path::PathBuf;

pub const ICON_SIZE: u32 = 1024;
pub const ICON_OUTPUT: &str = "assets/icon/wallet-icon-1024.png";
/// Bexly purple700.
pub const ACCENT_HEX: &str = "#731FE0";
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Rectangle inset from the padded box: `x` on the left/right edges, `y` on top/bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inset {
    pub x: i64,
    pub y: i64,
}

/// Every constant the wallet glyph is drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub size: u32,
    /// Fraction of `size` left empty on each side.
    pub padding: f64,
    pub accent: String,
    pub body_inset: Inset,
    pub body_radius: i64,
    pub flap_inset: Inset,
    pub flap_radius: i64,
    /// Horizontal shift of the clasp centre from the canvas centre.
    pub clasp_offset: i64,
    pub clasp_radius: i64,
    pub output: PathBuf,
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: ICON_SIZE,
            padding: 0.2,
            accent: ACCENT_HEX.to_string(),
            body_inset: Inset { x: 40, y: 80 },
            body_radius: 40,
            flap_inset: Inset { x: 120, y: 200 },
            flap_radius: 30,
            clasp_offset: 80,
            clasp_radius: 60,
            output: PathBuf::from(ICON_OUTPUT),
        }
    }
}

impl IconSpec {
    /// Padding in whole pixels, truncated.
    pub fn padding_px(&self) -> i64 {
        (self.size as f64 * self.padding) as i64
    }

    /// Inclusive `[x0, y0, x1, y1]` of the padded box shrunk by `inset`.
    pub fn inset_box(&self, inset: Inset) -> [i64; 4] {
        let p = self.padding_px();
        let s = self.size as i64;
        [p + inset.x, p + inset.y, s - p - inset.x, s - p - inset.y]
    }

    pub fn clasp_center(&self) -> (i64, i64) {
        let half = self.size as i64 / 2;
        (half + self.clasp_offset, half)
    }
}
