//! Surface textures applied to the composed banner.
//!
//! Most textures build a heightmap and relight the image through it (see [`lighting`]); `grain`
//! and `noise` add gaussian noise directly. The result is blended back over the input at
//! `texture_opacity`.

pub mod facets;
pub mod heightmaps;
pub mod lighting;
pub mod noise;

use crate::config::BannerConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::raster::Layer;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureParams {
    pub canvas: Canvas,
    pub ss: u32,
    pub density: f64,
    pub opacity: u8,
    pub seed: u64,
}

impl TextureParams {
    pub fn from_config(big: &BannerConfig) -> BannerResult<Self> {
        Ok(Self {
            canvas: big.canvas()?,
            ss: big.ss(),
            density: big.texture_density.max(0.05),
            opacity: big.texture_opacity,
            seed: big.texture_seed,
        })
    }

    pub(crate) fn dims(&self) -> (usize, usize) {
        (self.canvas.width as usize, self.canvas.height as usize)
    }
}

pub type TextureFn = fn(Layer, &TextureParams, &mut Rng64) -> BannerResult<Layer>;

static TEXTURES: &[(&str, TextureFn)] = &[
    ("canvas", heightmaps::canvas),
    ("concrete", heightmaps::concrete),
    ("corduroy", heightmaps::corduroy),
    ("denim", heightmaps::denim),
    ("facets", facets::facets),
    ("grain", noise::grain),
    ("leather", heightmaps::leather),
    ("metal", heightmaps::metal),
    ("noise", noise::noise),
    ("paper", heightmaps::paper),
];

pub fn lookup(name: &str) -> Option<TextureFn> {
    TEXTURES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    TEXTURES.iter().map(|(n, _)| *n).collect()
}

/// Run texture `f` seeded from `params.seed` and fade it in at `params.opacity`.
pub fn apply(f: TextureFn, layer: Layer, params: &TextureParams) -> BannerResult<Layer> {
    if params.opacity == 0 {
        return Ok(layer);
    }
    let mut rng = Rng64::new(params.seed);
    if params.opacity == u8::MAX {
        return f(layer, params, &mut rng);
    }
    let textured = f(layer.clone(), params, &mut rng)?;
    let mut out = layer;
    out.mix(&textured, f32::from(params.opacity) / 255.0)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/textures/mod.rs"]
mod tests;
