//! Additive gaussian noise on the color channels.

use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::raster::Layer;
use crate::textures::TextureParams;

fn add_noise(mut layer: Layer, sigma: f64, rng: &mut Rng64) -> Layer {
    let sigma = sigma.trunc();
    if sigma <= 0.0 {
        return layer;
    }
    layer.map_straight(|_, _, [r, g, b, a]| {
        let mut jitter = |c: u8| {
            (f64::from(c) + rng.gaussian(0.0, sigma).trunc()).clamp(0.0, 255.0) as u8
        };
        [jitter(r), jitter(g), jitter(b), a]
    });
    layer
}

/// Film grain, sigma `10 * density`.
pub fn grain(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    Ok(add_noise(layer, 10.0 * p.density, rng))
}

/// Stronger noise, sigma `16 * density`.
pub fn noise(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    Ok(add_noise(layer, 16.0 * p.density, rng))
}

#[cfg(test)]
#[path = "../../tests/unit/textures/noise.rs"]
mod tests;
