//! Irregular shapes: seeded blob, layered wave and the corner bar.

use std::f64::consts::{PI, TAU};

use crate::foundation::core::{Point, Rgba8};
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::raster::{Layer, Painter};
use crate::shapes::ShapeParams;

const SHAPE_COLOR: Rgba8 = Rgba8::new(0, 200, 255, 90);

/// Eight-point polygon with radii perturbed by a seeded RNG.
pub fn blob(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let seed = p.get_or("seed", 42.0).max(0.0) as u64;
    let scale = p.get_or("scale", 0.7).max(0.05);
    let mut rng = Rng64::new(seed);

    let c = p.center();
    let r = (w.min(h) * scale * 0.5).floor();
    let n = 8;
    let pts: Vec<Point> = (0..n)
        .map(|i| {
            let a = TAU * f64::from(i) / f64::from(n);
            let radius = r * (0.85 + 0.3 * rng.next_f64_01());
            Point::new(c.x + radius * a.cos(), c.y + radius * a.sin())
        })
        .collect();

    let mut painter = Painter::new(p.canvas)?;
    painter.fill_polygon(&pts, p.color_or(Rgba8::new(255, 140, 0, 90)));
    painter.finish()
}

/// Stacked filled waves rising from the bottom edge. Each phase is shifted, a little
/// lower, and fainter by `decay^phase`.
pub fn wave(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let amplitude = p.get_or("amplitude", 0.18).max(0.01);
    let frequency = p.get_or("frequency", 2.0).max(0.1);
    let phases = p.get_or("phases", 3.0).max(1.0) as u32;
    let phase_shift = p.get_or("phase_shift", 0.8).max(0.1);
    let decay = p
        .get("decay")
        .or_else(|| p.get("transparency_decay"))
        .unwrap_or(0.7)
        .max(0.3);
    let color = p.color_or(SHAPE_COLOR);

    let mut painter = Painter::new(p.canvas)?;
    for phase in 0..phases {
        let off = f64::from(phase) * phase_shift * PI;
        let alpha = f64::from(color.a) * decay.powi(phase as i32);
        let height = (h * amplitude * (1.0 - f64::from(phase) * 0.2)).floor();

        let mut pts: Vec<Point> = (0..=p.canvas.width)
            .map(|x| {
                let t = TAU * frequency * f64::from(x) / w;
                let signal = (t + off).sin()
                    + 0.3 * (t * 2.3 + off * 1.5).sin()
                    + 0.15 * (t * 0.7 + off * 0.8).sin();
                Point::new(f64::from(x), h - height * (1.0 + signal))
            })
            .collect();
        pts.push(Point::new(w, h));
        pts.push(Point::new(0.0, h));
        painter.fill_polygon(&pts, color.with_alpha(alpha as u8));
    }
    painter.finish()
}

/// Band across the top edge whose lower corners are pulled in by `thickness / tan(angle)`.
pub fn diagonal_bar(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let angle = p.get_or("angle", 30.0);
    let thickness = p.get_or("thickness", 0.25).max(0.01);

    let bar = (h * thickness).floor();
    let tan = angle.to_radians().tan();
    let off = if angle != 0.0 && tan.abs() > f64::EPSILON {
        (bar / tan).trunc()
    } else {
        0.0
    };
    let pts = [
        Point::new(0.0, 0.0),
        Point::new(w, 0.0),
        Point::new(w - off, bar),
        Point::new(off, bar),
    ];
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_polygon(&pts, p.color_or(Rgba8::new(0, 0, 0, 60)));
    painter.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/organic.rs"]
mod tests;
