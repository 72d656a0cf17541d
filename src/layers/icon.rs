//! Icon decoding and placement with a soft halo behind it.

use std::path::Path;

use anyhow::Context;
use kurbo::Ellipse;

use crate::config::{BannerConfig, IconPosition};
use crate::foundation::core::{Rect, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::raster::{Layer, Painter};

const ICON_HEIGHT_RATIO: f64 = 0.62;
/// Halo diameter minus icon size, in logical pixels.
const HALO_SPREAD: u32 = 40;

/// Icon edge length for a canvas of this height.
pub fn icon_size(big: &BannerConfig) -> u32 {
    (f64::from(big.height) * ICON_HEIGHT_RATIO) as u32
}

/// Top-left corner of the icon square.
pub fn icon_origin(big: &BannerConfig, size: u32) -> (i64, i64) {
    let pad = i64::from(big.padding * big.ss());
    let (w, h, size) = (
        i64::from(big.width),
        i64::from(big.height),
        i64::from(size),
    );
    let x = match big.icon_position {
        IconPosition::Left => pad,
        IconPosition::Right => w - size - pad,
    };
    (x, (h - size).div_euclid(2))
}

/// Light halo on dark backgrounds, dark halo on light ones.
pub fn halo_color(avg_bg: Rgba8) -> Rgba8 {
    let sum = u32::from(avg_bg.r) + u32::from(avg_bg.g) + u32::from(avg_bg.b);
    if sum < 380 {
        Rgba8::new(255, 255, 255, 110)
    } else {
        Rgba8::new(80, 80, 80, 130)
    }
}

/// Decode a raster or SVG icon into a `size`×`size` premultiplied layer.
pub fn load_icon(path: &Path, size: u32) -> BannerResult<Layer> {
    if size == 0 {
        return Err(BannerError::validation("icon size must be > 0"));
    }
    let bytes = std::fs::read(path)
        .map_err(|e| BannerError::io(format!("read icon '{}': {e}", path.display())))?;
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if is_svg {
        rasterize_svg(&bytes, size)
    } else {
        decode_raster(&bytes, size)
    }
}

pub(crate) fn decode_raster(bytes: &[u8], size: u32) -> BannerResult<Layer> {
    let img = image::load_from_memory(bytes).context("decode icon image")?;
    let resized = image::imageops::resize(
        &img.to_rgba8(),
        size,
        size,
        image::imageops::FilterType::Lanczos3,
    );
    Layer::from_image(&resized)
}

pub(crate) fn rasterize_svg(bytes: &[u8], size: u32) -> BannerResult<Layer> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse icon svg")?;
    let (tw, th) = (tree.size().width(), tree.size().height());
    if !(tw.is_finite() && th.is_finite() && tw > 0.0 && th > 0.0) {
        return Err(BannerError::render("icon svg has an empty viewport"));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)
        .ok_or_else(|| BannerError::render("failed to allocate icon pixmap"))?;
    let xform = resvg::tiny_skia::Transform::from_scale(size as f32 / tw, size as f32 / th);
    resvg::render(&tree, xform, &mut pixmap.as_mut());
    Layer::from_premul(size, size, pixmap.take())
}

/// Composite the configured icon and its halo. A missing or broken icon only logs a warning.
pub fn draw_icon(mut layer: Layer, big: &BannerConfig, avg_bg: Rgba8) -> BannerResult<Layer> {
    let Some(path) = big.icon_path.as_deref().filter(|p| !p.trim().is_empty()) else {
        return Ok(layer);
    };
    let size = icon_size(big);
    let icon = match load_icon(Path::new(path), size) {
        Ok(icon) => icon,
        Err(e) => {
            tracing::warn!(icon = path, error = %e, "icon could not be loaded, skipping");
            return Ok(layer);
        }
    };

    let (x, y) = icon_origin(big, size);
    let spread = f64::from(HALO_SPREAD * big.ss());
    let halo = Rect::new(
        x as f64 - spread / 2.0,
        y as f64 - spread / 2.0,
        (x + i64::from(size)) as f64 + spread / 2.0,
        (y + i64::from(size)) as f64 + spread / 2.0,
    );
    let mut painter = Painter::new(layer.canvas())?;
    painter.fill_shape(&Ellipse::from_rect(halo), halo_color(avg_bg));
    layer.over(&painter.finish()?)?;
    layer.over_at(&icon, x, y);
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/layers/icon.rs"]
mod tests;
