use crate::config::BannerConfig;
use crate::foundation::core::Rgba8;
use crate::foundation::error::BannerResult;
use crate::geometry::rounded_rect::rounded_rect_path;
use crate::raster::{Mask, Painter};

/// Silhouette of the banner body for a render-time (scaled) config.
///
/// The box is inset by the border thickness and every radius shrinks by the same amount.
/// Covered pixels are 255 and everything else 0, with anti-aliased edges in between.
pub fn build_mask(big: &BannerConfig) -> BannerResult<Mask> {
    let canvas = big.canvas()?;
    let (rect, radii) = big.inner_box();
    if rect == canvas.rect() && radii.is_zero() {
        return Ok(Mask::full(canvas));
    }
    let mut painter = Painter::new(canvas)?;
    painter.fill_path(&rounded_rect_path(rect, radii), Rgba8::WHITE);
    Ok(Mask::from_alpha(&painter.finish()?))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mask.rs"]
mod tests;
