use image::{Rgb, RgbImage};

/// Square RGB8 pixel grid painted in place.
///
/// Shapes take inclusive integer bounds and are clipped to the canvas, so
/// out-of-range coordinates never panic.
pub struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub fn new(size: u32, background: Rgb<u8>) -> Self {
        Self { img: RgbImage::from_pixel(size, size, background) }
    }

    pub fn image(&self) -> &RgbImage {
        &self.img
    }

    pub fn into_image(self) -> RgbImage {
        self.img
    }

    /// Fills `[x0, y0, x1, y1]` with corners rounded by `radius`.
    ///
    /// The radius is capped at half of the shorter side.
    pub fn fill_rounded_rect(&mut self, [x0, y0, x1, y1]: [i64; 4], radius: i64, color: Rgb<u8>) {
        if x1 < x0 || y1 < y0 {
            return;
        }
        let r = radius
            .min((x1 - x0) / 2)
            .min((y1 - y0) / 2)
            .max(0);
        let r2 = r * r;

        self.fill_where([x0, y0, x1, y1], color, |x, y| {
            // nearest point of the inner rectangle whose corners are the arc centres
            let cx = x.clamp(x0 + r, x1 - r);
            let cy = y.clamp(y0 + r, y1 - r);
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r2
        });
    }

    /// Fills the disc of `radius` around `(cx, cy)`.
    pub fn fill_circle(&mut self, (cx, cy): (i64, i64), radius: i64, color: Rgb<u8>) {
        if radius < 0 {
            return;
        }
        let r2 = radius * radius;
        self.fill_where([cx - radius, cy - radius, cx + radius, cy + radius], color, |x, y| {
            let (dx, dy) = (x - cx, y - cy);
            dx * dx + dy * dy <= r2
        });
    }

    fn fill_where(&mut self, [x0, y0, x1, y1]: [i64; 4], color: Rgb<u8>, inside: impl Fn(i64, i64) -> bool) {
        let w = self.img.width() as i64;
        let h = self.img.height() as i64;
        let (xa, xb) = (x0.max(0), x1.min(w - 1));
        let (ya, yb) = (y0.max(0), y1.min(h - 1));

        for y in ya..=yb {
            for x in xa..=xb {
                if inside(x, y) {
                    self.img.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }
}
