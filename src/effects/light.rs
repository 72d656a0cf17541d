//! Light-adding effects: bloom, glow and the lens flare. They work on straight alpha.

use crate::effects::EffectParams;
use crate::foundation::error::BannerResult;
use crate::foundation::math::trunc_u8;
use crate::raster::Layer;
use crate::raster::blur::blur_channels;

/// Screen blend of one channel: `255 - (255 - base) * (255 - overlay) / 255`.
pub(crate) fn screen(base: u8, overlay: f32) -> u8 {
    trunc_u8(255.0 - (255.0 - f32::from(base)) * (255.0 - overlay) / 255.0)
}

pub(crate) fn luma(px: &[u8]) -> f32 {
    f32::from(px[0]) * 0.299 + f32::from(px[1]) * 0.587 + f32::from(px[2]) * 0.114
}

/// Ramp from 0 at luminance 160 to 1 at 220.
pub(crate) fn bloom_strength(luma: f32) -> f32 {
    ((luma - 160.0) / 60.0).clamp(0.0, 1.0)
}

/// Blurred bright regions screened back over the image at 0.8.
pub fn bloom(layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let (w, h) = (layer.width(), layer.height());
    let src = layer.to_straight();
    let mut bright = vec![0u8; src.len()];
    for (b, s) in bright.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let k = bloom_strength(luma(s));
        for c in 0..3 {
            b[c] = (f32::from(s[c]) * k) as u8;
        }
        b[3] = s[3];
    }
    let bright = Layer::from_straight(w, h, bright)?
        .blurred(p.sigma(8.0))?
        .to_straight();
    let out = src
        .iter()
        .zip(&bright)
        .map(|(&a, &b)| screen(a, f32::from(b) * 0.8))
        .collect();
    Layer::from_straight(w, h, out)
}

/// Brightened blur added on top at 0.3.
pub fn glow(layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let (w, h) = (layer.width(), layer.height());
    let src = layer.to_straight();
    let mut halo = layer.blurred(p.sigma(3.0))?.to_straight();
    for px in halo.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = trunc_u8(f32::from(*c) * 1.3);
        }
    }
    let out = src
        .iter()
        .zip(&halo)
        .map(|(&base, &g)| trunc_u8(f32::from(base) + f32::from(g) * 0.3))
        .collect();
    Layer::from_straight(w, h, out)
}

struct Ghost {
    /// Position along the flare-to-centre vector.
    t: f64,
    size: f64,
    falloff: f64,
    peak: f64,
    /// `(radius factor, width factor, peak)` of an optional bright ring.
    ring: Option<(f64, f64, f64)>,
    color: [f64; 3],
}

const GHOSTS: [Ghost; 4] = [
    Ghost {
        t: 0.2,
        size: 25.0,
        falloff: 0.6,
        peak: 150.0,
        ring: None,
        color: [255.0, 255.0, 200.0],
    },
    Ghost {
        t: 0.4,
        size: 45.0,
        falloff: 0.8,
        peak: 108.0,
        ring: Some((0.6, 0.15, 50.0)),
        color: [255.0, 140.0, 60.0],
    },
    Ghost {
        t: 0.7,
        size: 75.0,
        falloff: 0.9,
        peak: 80.0,
        ring: Some((0.7, 0.2, 35.0)),
        color: [60.0, 180.0, 120.0],
    },
    Ghost {
        t: 0.9,
        size: 100.0,
        falloff: 1.0,
        peak: 40.0,
        ring: Some((0.8, 0.3, 25.0)),
        color: [180.0, 100.0, 200.0],
    },
];

const FLARE_INTENSITY: f64 = 250.0;

/// Additive flare light before blurring, `[r, g, b, 0]` per pixel.
pub(crate) fn flare_light(w: u32, h: u32, anchor: (f64, f64), scale: f64) -> Vec<u8> {
    let (fx, fy) = ((f64::from(w) * anchor.0).trunc(), (f64::from(h) * anchor.1).trunc());
    let (vx, vy) = (f64::from(w / 2) - fx, f64::from(h / 2) - fy);
    let ghosts: Vec<(f64, f64, f64, &Ghost)> = GHOSTS
        .iter()
        .map(|g| {
            let size = (g.size * scale).trunc().max(1.0);
            ((fx + vx * g.t).trunc(), (fy + vy * g.t).trunc(), size, g)
        })
        .collect();

    let mut out = vec![0u8; w as usize * h as usize * 4];
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        let x = (i % w as usize) as f64;
        let y = (i / w as usize) as f64;
        let d = (x - fx).hypot(y - fy);

        let core = (-d / (5.0 * scale)).exp() * FLARE_INTENSITY * 1.2;
        let ring = (-d / (15.0 * scale)).exp() * FLARE_INTENSITY * 0.8;
        let glow = (-d / (80.0 * scale)).exp() * FLARE_INTENSITY * 0.4;
        let mut rgb = [
            core + ring + glow * 0.8,
            core + ring * 0.6 + glow * 0.5,
            core + ring * 0.3 + glow * 0.2,
        ];

        for &(gx, gy, size, g) in &ghosts {
            let gd = (x - gx).hypot(y - gy);
            let mut fade = (-gd / (size * g.falloff)).exp() * g.peak;
            if let Some((at, width, peak)) = g.ring {
                fade += (-(gd - size * at).abs() / (size * width)).exp() * peak;
            }
            let fade = fade.clamp(0.0, 255.0);
            for (c, gc) in rgb.iter_mut().zip(g.color) {
                *c += fade * gc / 255.0;
            }
        }
        for (dst, v) in px.iter_mut().zip(rgb) {
            *dst = v.clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Camera flare at the configured anchor: a hot core, warm ring and glow, plus four ghosts
/// toward the image centre. Mixed with three blurred copies and screened over the image.
pub fn lens_flare(layer: Layer, p: &EffectParams) -> BannerResult<Layer> {
    let (w, h) = (layer.width(), layer.height());
    let scale = (p.scale * f64::from(p.ss)).max(0.01);
    let flare = flare_light(w, h, p.position, scale);
    let light = blur_channels(&flare, w, h, p.sigma(1.5))?;
    let medium = blur_channels(&flare, w, h, p.sigma(6.0))?;
    let heavy = blur_channels(&flare, w, h, p.sigma(15.0))?;

    let mut out = layer.to_straight();
    for (i, px) in out.chunks_exact_mut(4).enumerate() {
        for c in 0..3 {
            let k = i * 4 + c;
            let mixed = f32::from(flare[k]) * 0.5
                + f32::from(light[k]) * 0.25
                + f32::from(medium[k]) * 0.15
                + f32::from(heavy[k]) * 0.1;
            px[c] = screen(px[c], mixed);
        }
    }
    Layer::from_straight(w, h, out)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/light.rs"]
mod tests;
