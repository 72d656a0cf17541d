//! Vignette, sepia and channel-offset filters.

use crate::effects::{EffectParams, map_rgb};
use crate::foundation::error::BannerResult;
use crate::raster::Layer;

const VIGNETTE_STRENGTH: f64 = 0.5;

/// Per-pixel vignette factor `clip(1 - d/maxd * strength, 1 - strength, 1)`, measured from the
/// integer centre `(w/2, h/2)`.
pub(crate) fn vignette_factor(w: u32, h: u32, x: u32, y: u32) -> f64 {
    let (cx, cy) = (f64::from(w / 2), f64::from(h / 2));
    let max_d = (cx * cx + cy * cy).sqrt();
    if max_d <= 0.0 {
        return 1.0;
    }
    let d = ((f64::from(x) - cx).powi(2) + (f64::from(y) - cy).powi(2)).sqrt();
    (1.0 - d / max_d * VIGNETTE_STRENGTH).clamp(1.0 - VIGNETTE_STRENGTH, 1.0)
}

/// Darken toward the corners. Works on premultiplied color, so alpha is untouched.
pub fn vignette(mut layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    let (w, h) = (layer.width(), layer.height());
    for (i, px) in layer.data_mut().chunks_exact_mut(4).enumerate() {
        let (x, y) = ((i % w as usize) as u32, (i / w as usize) as u32);
        let k = vignette_factor(w, h, x, y);
        for c in &mut px[..3] {
            *c = (f64::from(*c) * k) as u8;
        }
    }
    Ok(layer)
}

/// Sepia tone followed by the vignette.
pub fn vintage(layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let sepia = map_rgb(layer, |[r, g, b]| {
        [
            0.393 * r + 0.769 * g + 0.189 * b,
            0.349 * r + 0.686 * g + 0.168 * b,
            0.272 * r + 0.534 * g + 0.131 * b,
        ]
    });
    vignette(sepia, p)
}

/// Red sampled from `2*ss` pixels to the left, blue from `2*ss` pixels to the right.
pub fn chromatic_aberration(mut layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let shift = (2 * p.ss) as usize;
    let (w, h) = (layer.width() as usize, layer.height() as usize);
    if w <= shift {
        return Ok(layer);
    }
    let src = layer.to_straight();
    let mut out = src.clone();
    for y in 0..h {
        let row = y * w * 4;
        for x in shift..w {
            out[row + x * 4] = src[row + (x - shift) * 4];
        }
        for x in 0..w - shift {
            out[row + x * 4 + 2] = src[row + (x + shift) * 4 + 2];
        }
    }
    layer.set_straight(out)?;
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tone.rs"]
mod tests;
