//! Procedural heightmaps for the relit surface textures.

use crate::foundation::error::BannerResult;
use crate::foundation::math::{Rng64, upsample_bilinear};
use crate::raster::Layer;
use crate::textures::TextureParams;
use crate::textures::lighting::{Lighting, shade};

/// Device-pixel period `max(floor, int(base * ss / density))`.
fn period(params: &TextureParams, base: f64, floor: usize) -> usize {
    ((base * f64::from(params.ss) / params.density) as usize).max(floor)
}

/// Round-trip through an 8-bit grey level biased by `bias`, as a stored heightmap would be.
fn quantize(v: f32, bias: f32) -> f32 {
    ((v + bias) * 255.0).clamp(0.0, 255.0).trunc() / 255.0 - bias
}

/// Gaussian field at `1/div` resolution, quantized and scaled back up.
fn coarse_field(rng: &mut Rng64, w: usize, h: usize, div: usize, sigma: f64, bias: f32) -> Vec<f32> {
    let (cw, ch) = ((w / div).max(1), (h / div).max(1));
    let field: Vec<f32> = rng
        .gaussian_field(cw, ch, sigma)
        .into_iter()
        .map(|v| quantize(v, bias))
        .collect();
    upsample_bilinear(&field, cw, ch, w, h)
}

pub(crate) fn canvas_height(params: &TextureParams) -> Vec<f32> {
    let (w, h) = params.dims();
    let thread = period(params, 12.0, 4);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| ((x / thread) % 2) ^ ((y / thread) % 2)))
        .map(|check| if check == 1 { 0.3 } else { 0.1 })
        .collect()
}

pub(crate) fn corduroy_height(params: &TextureParams) -> Vec<f32> {
    let (w, h) = params.dims();
    let rib = period(params, 8.0, 2);
    (0..h)
        .flat_map(|_| (0..w).map(move |x| if (x / rib) % 2 == 1 { 0.5 } else { 0.1 }))
        .collect()
}

/// Four-step diagonal twill.
pub(crate) fn denim_height(params: &TextureParams) -> Vec<f32> {
    let (w, h) = params.dims();
    let spacing = period(params, 8.0, 3);
    (0..h)
        .flat_map(|y| (0..w).map(move |x| ((x + y) / spacing) % 4))
        .map(|step| step as f32 / 4.0 * 0.2 + 0.1)
        .collect()
}

pub(crate) fn concrete_height(params: &TextureParams, rng: &mut Rng64) -> Vec<f32> {
    let (w, h) = params.dims();
    let scale = params.density.max(0.5);
    let coarse = coarse_field(rng, w, h, 4, 0.15, 0.3);
    let fine = rng.gaussian_field(w, h, 0.08 * scale);
    coarse.iter().zip(&fine).map(|(c, f)| c * 0.8 + f * 0.4).collect()
}

pub(crate) fn leather_height(params: &TextureParams, rng: &mut Rng64) -> Vec<f32> {
    let (w, h) = params.dims();
    let grain = params.density.max(0.5);
    let coarse = coarse_field(rng, w, h, 3, 0.1 * grain, 0.2);
    let medium = coarse_field(rng, w, h, 2, 0.05 * grain, 0.1);
    let fine = rng.gaussian_field(w, h, 0.02 * grain);
    coarse
        .iter()
        .zip(&medium)
        .zip(&fine)
        .map(|((c, m), f)| c * 0.6 + m * 0.3 + f * 0.1 + 0.1)
        .collect()
}

pub(crate) fn metal_height(params: &TextureParams, rng: &mut Rng64) -> Vec<f32> {
    let (w, h) = params.dims();
    let scratch = params.density.max(0.5);
    rng.gaussian_field(w, h, 0.08 * scratch)
        .into_iter()
        .map(|v| quantize(v, 0.2))
        .collect()
}

/// Fine fibre noise plus a field stretched vertically so fibres run across the sheet.
pub(crate) fn paper_height(params: &TextureParams, rng: &mut Rng64) -> Vec<f32> {
    let (w, h) = params.dims();
    let fibre = params.density.max(0.3);
    let base = rng.gaussian_field(w, h, 0.04 * fibre);
    let (dh, dw) = ((h / 2).max(1), w.max(1));
    let direction: Vec<f32> = rng
        .gaussian_field(dw, dh, 0.02)
        .into_iter()
        .map(|v| quantize(v, 0.1))
        .collect();
    let direction = upsample_bilinear(&direction, dw, dh, w, h);
    base.iter().zip(&direction).map(|(b, d)| b + d * 0.5).collect()
}

pub fn canvas(layer: Layer, p: &TextureParams, _rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &canvas_height(p), Lighting::new(15.0, 0.3))
}

pub fn corduroy(layer: Layer, p: &TextureParams, _rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &corduroy_height(p), Lighting::new(20.0, 0.2))
}

pub fn denim(layer: Layer, p: &TextureParams, _rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &denim_height(p), Lighting::new(12.0, 0.4))
}

pub fn concrete(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &concrete_height(p, rng), Lighting::new(10.0, 0.2))
}

pub fn leather(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &leather_height(p, rng), Lighting::new(8.0, 0.4))
}

/// Brushed metal, lit from the top.
pub fn metal(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    let lighting = Lighting::new(12.0, 0.3).with_light([-0.2, -0.9, 1.0]);
    shade(layer, &metal_height(p, rng), lighting)
}

pub fn paper(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &paper_height(p, rng), Lighting::new(6.0, 0.5))
}

#[cfg(test)]
#[path = "../../tests/unit/textures/heightmaps.rs"]
mod tests;
