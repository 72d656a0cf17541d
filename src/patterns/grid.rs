//! Motifs stamped on a regular grid of cells.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use kurbo::Circle;

use crate::foundation::core::{BezPath, Point, Rgba8};
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::patterns::PatternParams;
use crate::raster::paint::polygon_path;
use crate::raster::{Layer, Painter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Motif {
    Dot,
    Square,
    Star,
    Triangle,
    Heart,
    Cross,
}

/// Cell size in device pixels.
///
/// `max(int(logical_h * factor / density) * ss, max(8 * ss, device_h / 128, 24))`, capped at
/// half the device height.
pub fn grid_cell(logical_height: u32, device_height: u32, density: f64, ss: u32, factor: f64) -> u32 {
    let density = density.max(0.05);
    let min_cell = (8 * ss).max(device_height / 128).max(24);
    let cell = ((f64::from(logical_height) * factor / density) as u32 * ss).max(min_cell);
    cell.min(device_height / 2).max(1)
}

fn motif_path(motif: Motif, c: Point, size: u32, rot_deg: f64) -> BezPath {
    let half = f64::from(size / 2);
    let rot = rot_deg.to_radians();
    let rotate = |x: f64, y: f64| {
        Point::new(
            c.x + x * rot.cos() - y * rot.sin(),
            c.y + x * rot.sin() + y * rot.cos(),
        )
    };
    match motif {
        Motif::Dot => kurbo::Shape::to_path(&Circle::new(c, half), 0.1),
        Motif::Square => {
            let pts = [(-half, -half), (half, -half), (half, half), (-half, half)]
                .map(|(x, y)| rotate(x, y));
            polygon_path(&pts).unwrap_or_default()
        }
        Motif::Star => {
            let pts: Vec<Point> = (0..10)
                .map(|i| {
                    let a = FRAC_PI_2 + f64::from(i) * PI / 5.0 + rot;
                    let r = if i % 2 == 0 { half } else { half * 0.5 };
                    Point::new(c.x + r * a.cos(), c.y - r * a.sin())
                })
                .collect();
            polygon_path(&pts).unwrap_or_default()
        }
        Motif::Triangle => {
            let pts: Vec<Point> = (0..3)
                .map(|i| {
                    let a = FRAC_PI_2 + f64::from(i) * TAU / 3.0 + rot;
                    Point::new(c.x + half * a.cos(), c.y + half * a.sin())
                })
                .collect();
            polygon_path(&pts).unwrap_or_default()
        }
        Motif::Heart => {
            // 16 sin^3 t, 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t, scaled by r/18.
            let pts: Vec<Point> = (0..72)
                .map(|i| {
                    let t = f64::from(i * 5).to_radians();
                    let x = half * 16.0 * t.sin().powi(3) / 18.0;
                    let y = -half
                        * (13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos()
                            - (4.0 * t).cos())
                        / 18.0;
                    rotate(x, y)
                })
                .collect();
            polygon_path(&pts).unwrap_or_default()
        }
        Motif::Cross => {
            let mut path = BezPath::new();
            path.move_to(Point::new(c.x - half, c.y));
            path.line_to(Point::new(c.x + half, c.y));
            path.move_to(Point::new(c.x, c.y - half));
            path.line_to(Point::new(c.x, c.y + half));
            path
        }
    }
}

fn stamp(params: &PatternParams, rng: &mut Rng64, motif: Motif, outline: bool) -> BannerResult<Layer> {
    let factor = if motif == Motif::Cross { 0.12 } else { 0.10 };
    let cell = grid_cell(
        params.logical_height,
        params.canvas.height,
        params.density,
        params.ss,
        factor,
    );
    let jitter = (f64::from(cell) * params.jitter.max(0.0)) as i64;
    let base = (f64::from(cell) * 0.6).max(8.0) as i64;
    let size_var = (base as f64 * params.size_variance.max(0.0)) as i64;
    let line_width = params.line_width();

    let mut painter = Painter::new(params.canvas)?;
    painter.set_transform(params.field_transform());

    let step = cell as usize;
    for y in (0..params.field.height).step_by(step) {
        for x in (0..params.field.width).step_by(step) {
            let offset = |rng: &mut Rng64| {
                if jitter > 0 {
                    rng.range_i64(-jitter, jitter)
                } else {
                    0
                }
            };
            let cx = i64::from(x + cell / 2) + offset(rng);
            let cy = i64::from(y + cell / 2) + offset(rng);
            let size = if size_var > 0 {
                (base + rng.range_i64(-size_var, size_var)).max(6)
            } else {
                base.max(6)
            };
            let color = params.pick_color(rng, Rgba8::BLACK);
            let rot = if params.tilt != 0.0 {
                rng.uniform(-params.tilt.abs(), params.tilt.abs())
            } else {
                0.0
            };

            let path = motif_path(motif, Point::new(cx as f64, cy as f64), size as u32, rot);
            if outline || motif == Motif::Cross {
                painter.stroke_path(&path, line_width, color);
            } else {
                painter.fill_path(&path, color);
            }
        }
    }
    painter.finish()
}

pub fn dots(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Dot, false)
}

pub fn dots_outline(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Dot, true)
}

pub fn squares(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Square, false)
}

pub fn squares_outline(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Square, true)
}

pub fn stars(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Star, false)
}

pub fn stars_outline(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Star, true)
}

pub fn triangles(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Triangle, false)
}

pub fn triangles_outline(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Triangle, true)
}

pub fn hearts(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Heart, false)
}

pub fn hearts_outline(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Heart, true)
}

pub fn ascii_grid(p: &PatternParams, rng: &mut Rng64) -> BannerResult<Layer> {
    stamp(p, rng, Motif::Cross, true)
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/grid.rs"]
mod tests;
