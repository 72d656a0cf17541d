//! Photo-style color grades built from four primitives: contrast, saturation, tint and a
//! linear `a*v + b`. Intermediate values are unclamped; the final color is truncated.

use crate::effects::{EffectParams, map_rgb};
use crate::foundation::error::BannerResult;
use crate::raster::Layer;

type Rgb = [f32; 3];

pub(crate) fn contrast(c: Rgb, f: f32) -> Rgb {
    c.map(|v| ((v / 255.0 - 0.5) * f + 0.5) * 255.0)
}

pub(crate) fn saturation(c: Rgb, f: f32) -> Rgb {
    let gray = 0.299 * c[0] + 0.587 * c[1] + 0.114 * c[2];
    c.map(|v| gray + (v - gray) * f)
}

pub(crate) fn tint(c: Rgb, t: Rgb) -> Rgb {
    [c[0] * t[0], c[1] * t[1], c[2] * t[2]]
}

pub(crate) fn linear(c: Rgb, a: f32, b: f32) -> Rgb {
    c.map(|v| a * v + b)
}

pub fn clarendon(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| saturation(contrast(c, 1.5), 1.3)))
}

pub fn cool(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| tint(c, [0.8, 1.0, 1.2])))
}

pub fn cyberpunk(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| tint(contrast(c, 1.4), [1.2, 0.9, 1.3])))
}

pub fn dramatic(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| saturation(contrast(c, 1.3), 1.2)))
}

pub fn gingham(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| contrast(tint(c, [1.05, 1.02, 0.98]), 0.95)))
}

/// Warm with lifted shadows.
pub fn juno(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| {
        saturation(linear(tint(c, [1.15, 1.05, 0.85]), 0.85, 30.0), 0.9)
    }))
}

pub fn lark(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| {
        tint(saturation(linear(c, 1.0, 20.0), 0.7), [0.95, 1.0, 1.05])
    }))
}

pub fn matte(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| saturation(linear(c, 0.9, 25.0), 0.8)))
}

pub fn monochrome(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| [saturation(c, 0.0)[0]; 3]))
}

pub fn reyes(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| {
        let c = contrast(linear(c, 0.8, 40.0), 0.8);
        saturation(tint(c, [1.1, 1.05, 0.9]), 0.6)
    }))
}

pub fn valencia(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| {
        linear(contrast(tint(c, [1.2, 1.1, 0.8]), 0.9), 0.95, 15.0)
    }))
}

pub fn vibrant(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| contrast(saturation(c, 1.5), 1.1)))
}

pub fn warm(layer: Layer, _p: &EffectParams) -> BannerResult<Layer> {
    Ok(map_rgb(layer, |c| tint(c, [1.2, 1.1, 0.8])))
}

/// 60% original, 40% blurred (sigma `2*ss`).
pub fn soft(layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let (w, h) = (layer.width(), layer.height());
    let blurred = layer.blurred(p.sigma(2.0))?;
    let data: Vec<u8> = layer
        .data()
        .iter()
        .zip(blurred.data())
        .map(|(&o, &b)| (f32::from(o) * 0.6 + f32::from(b) * 0.4) as u8)
        .collect();
    Layer::from_premul(w, h, data)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grade.rs"]
mod tests;
