//! Heightmap relighting shared by the surface textures.

use crate::foundation::error::{BannerError, BannerResult};
use crate::raster::Layer;

/// Upper-left light used unless a texture picks its own.
pub const DEFAULT_LIGHT: [f32; 3] = [-0.5, -0.5, 1.0];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lighting {
    /// Bump strength. Higher values tilt normals more for the same height step.
    pub strength: f32,
    /// Fraction of the original brightness kept in full shadow.
    pub ambient: f32,
    pub light: [f32; 3],
}

impl Lighting {
    pub const fn new(strength: f32, ambient: f32) -> Self {
        Self {
            strength,
            ambient,
            light: DEFAULT_LIGHT,
        }
    }

    pub const fn with_light(self, light: [f32; 3]) -> Self {
        Self { light, ..self }
    }
}

/// Quantized normal map of a `w * h` heightmap, edge-padded. Each normal is stored as
/// `(n + 1) * 127.5` per axis.
pub fn normal_map(height: &[f32], w: usize, h: usize, strength: f32) -> Vec<[u8; 3]> {
    let at = |x: usize, y: usize| height[y * w + x];
    let dz = 1.0 / strength.max(f32::EPSILON);
    let enc = |v: f32| ((v + 1.0) * 127.5).clamp(0.0, 255.0) as u8;

    let mut out = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            let dx = (at((x + 1).min(w - 1), y) - at(x.saturating_sub(1), y)) / 2.0;
            let dy = (at(x, (y + 1).min(h - 1)) - at(x, y.saturating_sub(1))) / 2.0;
            let len = (dx * dx + dy * dy + dz * dz).sqrt();
            out.push([enc(-dx / len), enc(-dy / len), enc(dz / len)]);
        }
    }
    out
}

/// Scale each pixel's color by `ambient + (1 - ambient) * clamp(n . l, 0, 1)`. Alpha is kept.
pub fn relight(layer: &mut Layer, normals: &[[u8; 3]], light: [f32; 3], ambient: f32) -> BannerResult<()> {
    if normals.len() * 4 != layer.data().len() {
        return Err(BannerError::render("normal map does not match layer"));
    }
    let len = light.iter().map(|v| v * v).sum::<f32>().sqrt().max(f32::EPSILON);
    let l = light.map(|v| v / len);

    for (px, n) in layer.data_mut().chunks_exact_mut(4).zip(normals) {
        let n = n.map(|v| f32::from(v) / 127.5 - 1.0);
        let diffuse = (n[0] * l[0] + n[1] * l[1] + n[2] * l[2]).clamp(0.0, 1.0);
        let k = ambient + (1.0 - ambient) * diffuse;
        for c in &mut px[..3] {
            *c = (f32::from(*c) * k).clamp(0.0, 255.0) as u8;
        }
    }
    Ok(())
}

/// Relight `layer` through `height`.
pub fn shade(mut layer: Layer, height: &[f32], lighting: Lighting) -> BannerResult<Layer> {
    let (w, h) = (layer.width() as usize, layer.height() as usize);
    if height.len() != w * h {
        return Err(BannerError::render("heightmap does not match layer"));
    }
    let normals = normal_map(height, w, h, lighting.strength);
    relight(&mut layer, &normals, lighting.light, lighting.ambient)?;
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/textures/lighting.rs"]
mod tests;
