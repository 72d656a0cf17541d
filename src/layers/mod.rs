//! Foreground layers that depend on external inputs: the icon file and fonts.

pub mod fonts;
pub mod icon;
pub mod text;

pub use fonts::{FontBytes, FontProvider, SystemFonts, builtin_font};
pub use icon::draw_icon;
pub use text::draw_text;

use crate::color::{average, parse_rgb};
use crate::config::BannerConfig;
use crate::foundation::core::Rgba8;

/// Mean of the two gradient endpoints, the reference color for halo and text contrast.
pub fn average_background(config: &BannerConfig) -> Rgba8 {
    average(
        parse_rgb(&config.bg_color_start),
        parse_rgb(&config.bg_color_end),
    )
}
