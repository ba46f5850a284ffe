pub mod canvas;
pub mod encode_png;
pub mod icon_spec;
pub mod parse_hex_rgb;
pub mod render_wallet_icon;
pub mod save_wallet_icon;
