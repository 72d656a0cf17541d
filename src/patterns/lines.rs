//! Horizontal bands swept across the field: straight, sine and zigzag.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::patterns::PatternParams;
use crate::raster::{Layer, Painter};

const SAMPLE_STEP: u32 = 4;

fn band_spacing(params: &PatternParams, factor: f64, floor: u32) -> u32 {
    let spacing =
        (f64::from(params.logical_height) * factor / params.density.max(0.05)) as u32 * params.ss;
    spacing.max(floor * params.ss).max(2)
}

/// Draw one polyline per band, with band offsets `spacing/2, spacing/2 + spacing, ...`.
fn sweep(
    params: &PatternParams,
    rng: &mut Rng64,
    spacing: u32,
    band: impl Fn(f64, f64) -> Vec<Point>,
) -> BannerResult<Layer> {
    let color = params.pick_color(rng, Rgba8::WHITE);
    let width = params.line_width();
    let field_w = f64::from(params.field.width);

    let mut painter = Painter::new(params.canvas)?;
    painter.set_transform(params.field_transform());
    for y in (spacing / 2..params.field.height).step_by(spacing as usize) {
        painter.stroke_polyline(&band(f64::from(y), field_w), width, color);
    }
    painter.finish()
}

fn sample_xs(width: f64) -> impl Iterator<Item = f64> {
    let last = width.max(0.0) as u32;
    (0..last)
        .step_by(SAMPLE_STEP as usize)
        .chain(std::iter::once(last))
        .map(f64::from)
}

pub fn lines(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    let spacing = band_spacing(p, 0.08, 8);
    sweep(p, rng, spacing, |y, w| vec![Point::new(0.0, y), Point::new(w, y)])
}

/// Sine bands: `y = off + amp * sin(2 pi f x / W + pi/2)`. Defaults: freq 3, amp 20.
pub fn wave(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    let spacing = band_spacing(p, 0.12, 12);
    let freq = p.freq.unwrap_or(3.0).clamp(0.5, 10.0);
    let amp = p.amp.unwrap_or(20.0).clamp(5.0, 50.0) * f64::from(p.ss);
    sweep(p, rng, spacing, |off, w| {
        sample_xs(w)
            .map(|x| Point::new(x, off + amp * (TAU * freq * x / w + FRAC_PI_2).sin()))
            .collect()
    })
}

/// Triangle-wave bands with period `W / (2 f)`. Defaults: freq 1.5, amp 25.
pub fn zigzag(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    let spacing = band_spacing(p, 0.12, 12);
    let freq = p.freq.unwrap_or(1.5).clamp(0.5, 10.0);
    let amp = p.amp.unwrap_or(25.0).clamp(5.0, 50.0) * f64::from(p.ss);
    sweep(p, rng, spacing, |off, w| {
        let period = (w / (freq * 2.0)).floor().max(1.0);
        sample_xs(w)
            .map(|x| {
                let pos = (x % period) / period;
                Point::new(x, off + amp * (1.0 - 2.0 * (pos - 0.5).abs()))
            })
            .collect()
    })
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/lines.rs"]
mod tests;
