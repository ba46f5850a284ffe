use crate::err::error::ToolError;
use crate::icon::canvas::Canvas;
use crate::icon::icon_spec::{IconSpec, WHITE};
use crate::icon::parse_hex_rgb::parse_hex_rgb;
use image::RgbImage;
use tracing::trace;

/// Paints the wallet glyph: body, flap cut out of it, clasp on top.
/// Layer order matters, the flap must land before the clasp.
pub fn render_wallet_icon(spec: &IconSpec) -> Result<RgbImage, ToolError> {
    let accent = parse_hex_rgb(&spec.accent)?;
    let mut canvas = Canvas::new(spec.size, WHITE);

    let body = spec.inset_box(spec.body_inset);
    trace!(?body, radius = spec.body_radius, "wallet body");
    canvas.fill_rounded_rect(body, spec.body_radius, accent);

    let flap = spec.inset_box(spec.flap_inset);
    trace!(?flap, radius = spec.flap_radius, "flap cutout");
    canvas.fill_rounded_rect(flap, spec.flap_radius, WHITE);

    let clasp = spec.clasp_center();
    trace!(?clasp, radius = spec.clasp_radius, "clasp");
    canvas.fill_circle(clasp, spec.clasp_radius, accent);

    Ok(canvas.into_image())
}
