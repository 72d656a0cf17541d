//! Post-processing filters, applied as a comma-separated chain.

pub mod grade;
pub mod light;
pub mod tone;

use crate::config::BannerConfig;
use crate::foundation::core::Canvas;
use crate::foundation::error::BannerResult;
use crate::foundation::math::trunc_u8;
use crate::raster::{Layer, Mask};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectParams {
    pub canvas: Canvas,
    pub ss: u32,
    /// Relative lens flare anchor in `[0,1]`.
    pub position: (f64, f64),
    pub scale: f64,
}

impl EffectParams {
    pub fn from_config(big: &BannerConfig) -> BannerResult<Self> {
        let (rx, ry) = big.effect_position.relative();
        Ok(Self {
            canvas: big.canvas()?,
            ss: big.ss(),
            position: (big.effect_x.unwrap_or(rx), big.effect_y.unwrap_or(ry)),
            scale: big.effect_scale,
        })
    }

    pub(crate) fn sigma(&self, base: f32) -> f32 {
        base * self.ss as f32
    }
}

pub type EffectFn = fn(Layer, &EffectParams) -> BannerResult<Layer>;

static EFFECTS: &[(&str, EffectFn)] = &[
    ("bloom", light::bloom),
    ("chromatic_aberration", tone::chromatic_aberration),
    ("clarendon", grade::clarendon),
    ("cool", grade::cool),
    ("cyberpunk", grade::cyberpunk),
    ("dramatic", grade::dramatic),
    ("gingham", grade::gingham),
    ("glow", light::glow),
    ("juno", grade::juno),
    ("lark", grade::lark),
    ("lens_flare", light::lens_flare),
    ("matte", grade::matte),
    ("monochrome", grade::monochrome),
    ("reyes", grade::reyes),
    ("soft", grade::soft),
    ("valencia", grade::valencia),
    ("vibrant", grade::vibrant),
    ("vignette", tone::vignette),
    ("vintage", tone::vintage),
    ("warm", grade::warm),
];

pub fn lookup(name: &str) -> Option<EffectFn> {
    EFFECTS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    EFFECTS.iter().map(|(n, _)| *n).collect()
}

/// Effect names in `spec`, trimmed, with blanks and `none` dropped.
pub fn chain(spec: &str) -> Vec<&str> {
    spec.split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty() && *e != "none")
        .collect()
}

/// Run every known effect of the chain in order, clipping to `mask` after each one.
pub fn apply_chain(
    mut layer: Layer,
    spec: &str,
    params: &EffectParams,
    mask: &Mask,
) -> BannerResult<Layer> {
    for name in chain(spec) {
        let Some(effect) = lookup(name) else {
            tracing::debug!(effect = name, "skipping unknown effect");
            continue;
        };
        tracing::debug!(effect = name, "applying effect");
        layer = effect(layer, params)?;
        layer.apply_mask(mask)?;
    }
    Ok(layer)
}

/// Apply `f` to the straight-alpha color of every pixel. Results are truncated into `0..=255`.
pub(crate) fn map_rgb(mut layer: Layer, f: impl Fn([f32; 3]) -> [f32; 3]) -> Layer {
    layer.map_straight(|_, _, [r, g, b, a]| {
        let [r, g, b] = f([f32::from(r), f32::from(g), f32::from(b)]);
        [trunc_u8(r), trunc_u8(g), trunc_u8(b), a]
    });
    layer
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mod.rs"]
mod tests;
