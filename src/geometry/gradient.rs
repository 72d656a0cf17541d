//! Two-color background fills.

use crate::color::{adjust, interpolate, rgb_distance};
use crate::foundation::core::{Rect, Rgba8};
use crate::raster::Layer;

/// Endpoints closer than this (RGB distance) are pushed apart by [`auto_adjust_endpoints`].
pub const MIN_GRADIENT_DISTANCE: f64 = 40.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    Horizontal,
    Diagonal,
    Radial,
    #[serde(alias = "none")]
    Solid,
    #[default]
    #[serde(other)]
    Vertical,
}

impl GradientKind {
    /// Parse a user-facing name; unknown names become [`GradientKind::Vertical`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Self::Horizontal,
            "diagonal" => Self::Diagonal,
            "radial" => Self::Radial,
            "solid" | "none" => Self::Solid,
            _ => Self::Vertical,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::Diagonal => "diagonal",
            Self::Radial => "radial",
            Self::Solid => "solid",
        }
    }

    pub fn names() -> Vec<&'static str> {
        [
            Self::Diagonal,
            Self::Horizontal,
            Self::Radial,
            Self::Solid,
            Self::Vertical,
        ]
        .into_iter()
        .map(Self::name)
        .collect()
    }
}

/// Fill the pixels of `rect` (snapped outward to whole pixels, clipped to the layer) with an
/// opaque gradient from `start` to `end`.
pub fn fill_gradient(layer: &mut Layer, rect: Rect, start: Rgba8, end: Rgba8, kind: GradientKind) {
    let x0 = rect.x0.floor().max(0.0) as u32;
    let y0 = rect.y0.floor().max(0.0) as u32;
    let x1 = (rect.x1.ceil().max(0.0) as u32).min(layer.width());
    let y1 = (rect.y1.ceil().max(0.0) as u32).min(layer.height());
    if x0 >= x1 || y0 >= y1 {
        return;
    }
    let w = f64::from(x1 - x0);
    let h = f64::from(y1 - y0);
    // Radial centre is a whole pixel so the start color is hit exactly.
    let (cx, cy) = ((w / 2.0).floor(), (h / 2.0).floor());
    let max_r = (cx * cx + cy * cy).sqrt().max(1.0);

    for y in y0..y1 {
        let dy = f64::from(y - y0);
        for x in x0..x1 {
            let dx = f64::from(x - x0);
            let ratio = match kind {
                GradientKind::Vertical => dy / (h - 1.0).max(1.0),
                GradientKind::Horizontal => dx / (w - 1.0).max(1.0),
                GradientKind::Diagonal => (dx + dy) / (w + h - 2.0).max(1.0),
                GradientKind::Radial => {
                    let d = ((dx - cx).powi(2) + (dy - cy).powi(2)).sqrt();
                    (d / max_r).min(1.0)
                }
                GradientKind::Solid => 0.0,
            };
            let c = interpolate(start, end, ratio.clamp(0.0, 1.0));
            layer.set_pixel(x, y, c.premul());
        }
    }
}

/// Push near-identical endpoints apart: `end` moves 60 per channel away from `start`
/// (up when it is the brighter one, down otherwise). When clamping at black or white eats the
/// shift, the opposite direction is used instead.
pub fn auto_adjust_endpoints(start: Rgba8, end: Rgba8) -> (Rgba8, Rgba8) {
    if rgb_distance(start, end) >= MIN_GRADIENT_DISTANCE {
        return (start, end);
    }
    let sum = |c: Rgba8| u32::from(c.r) + u32::from(c.g) + u32::from(c.b);
    let delta = if sum(end) > sum(start) { 60 } else { -60 };
    let shifted = adjust(end, delta);
    if rgb_distance(start, shifted) >= MIN_GRADIENT_DISTANCE {
        return (start, shifted);
    }
    (start, adjust(end, -delta))
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/gradient.rs"]
mod tests;
