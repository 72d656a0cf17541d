//! Pixel blending for premultiplied layers. Buffers are flat RGBA8 with four bytes per pixel.

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{BannerError, BannerResult};

/// `v * k / 255`, rounded.
fn scale(v: u8, k: u8) -> u8 {
    ((u32::from(v) * u32::from(k) + 127) / 255) as u8
}

fn read(px: &[u8]) -> Rgba8Premul {
    Rgba8Premul {
        r: px[0],
        g: px[1],
        b: px[2],
        a: px[3],
    }
}

/// `top` laid over `base`: the base shows through by whatever coverage `top` leaves.
pub fn source_over(base: Rgba8Premul, top: Rgba8Premul) -> Rgba8Premul {
    match top.a {
        0 => base,
        255 => top,
        a => {
            let keep = 255 - a;
            let ch = |b: u8, t: u8| t.saturating_add(scale(b, keep));
            Rgba8Premul {
                r: ch(base.r, top.r),
                g: ch(base.g, top.g),
                b: ch(base.b, top.b),
                a: ch(base.a, a),
            }
        }
    }
}

/// Straight blend from `from` (`t = 0`) to `to` (`t = 1`), quantized to 1/255 steps.
pub fn mix(from: Rgba8Premul, to: Rgba8Premul, t: f32) -> Rgba8Premul {
    let w = (t.clamp(0.0, 1.0) * 255.0).round() as u8;
    let ch = |f: u8, o: u8| scale(f, 255 - w).saturating_add(scale(o, w));
    Rgba8Premul {
        r: ch(from.r, to.r),
        g: ch(from.g, to.g),
        b: ch(from.b, to.b),
        a: ch(from.a, to.a),
    }
}

fn same_pixels(base: &[u8], other: &[u8]) -> BannerResult<()> {
    if base.len() != other.len() || !base.len().is_multiple_of(4) {
        return Err(BannerError::render(format!(
            "cannot blend {} bytes with {} bytes",
            base.len(),
            other.len()
        )));
    }
    Ok(())
}

/// [`source_over`] for every pixel of `top` onto `base`.
pub fn blend_over(base: &mut [u8], top: &[u8]) -> BannerResult<()> {
    same_pixels(base, top)?;
    for (b, t) in base.chunks_exact_mut(4).zip(top.chunks_exact(4)) {
        let out = source_over(read(b), read(t));
        b.copy_from_slice(&out.to_array());
    }
    Ok(())
}

/// [`mix`] every pixel of `base` toward `other`.
pub fn blend_mix(base: &mut [u8], other: &[u8], t: f32) -> BannerResult<()> {
    same_pixels(base, other)?;
    for (b, o) in base.chunks_exact_mut(4).zip(other.chunks_exact(4)) {
        let out = mix(read(b), read(o), t);
        b.copy_from_slice(&out.to_array());
    }
    Ok(())
}

/// Scale each pixel by its 8-bit silhouette coverage.
pub fn apply_coverage(pixels: &mut [u8], coverage: &[u8]) -> BannerResult<()> {
    if pixels.len() != coverage.len() * 4 {
        return Err(BannerError::render(
            "silhouette coverage needs one byte per pixel",
        ));
    }
    for (px, &c) in pixels.chunks_exact_mut(4).zip(coverage) {
        match c {
            255 => {}
            0 => px.fill(0),
            c => px.iter_mut().for_each(|v| *v = scale(*v, c)),
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
