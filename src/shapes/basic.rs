//! Geometric primitives around the configured centre.

use std::f64::consts::TAU;

use kurbo::{Circle, Ellipse};

use crate::foundation::core::{Point, Rect, Rgba8};
use crate::foundation::error::BannerResult;
use crate::raster::{Layer, Painter};
use crate::shapes::ShapeParams;

pub fn circle(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let r = p.length("radius").unwrap_or((w.min(h) / 4.0).floor());
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_shape(
        &Circle::new(p.center(), r.max(0.0)),
        p.color_or(Rgba8::new(255, 100, 100, 100)),
    );
    painter.finish()
}

pub fn rectangle(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let rw = p.length("width").unwrap_or((w / 3.0).floor()).max(0.0);
    let rh = p.length("height").unwrap_or((h / 3.0).floor()).max(0.0);
    let c = p.center();
    let rect = Rect::new(c.x - rw / 2.0, c.y - rh / 2.0, c.x + rw / 2.0, c.y + rh / 2.0);
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_shape(&rect, p.color_or(Rgba8::new(100, 255, 100, 100)));
    painter.finish()
}

/// Upright equilateral triangle of side `size`.
pub fn triangle(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let size = p.length("size").unwrap_or((w.min(h) / 4.0).floor()).max(0.0);
    let height = size * 0.866;
    let c = p.center();
    let pts = [
        Point::new(c.x, c.y - height / 2.0),
        Point::new(c.x - size / 2.0, c.y + height / 2.0),
        Point::new(c.x + size / 2.0, c.y + height / 2.0),
    ];
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_polygon(&pts, p.color_or(Rgba8::new(100, 100, 255, 100)));
    painter.finish()
}

/// Regular polygon; `sides` (default 6, at least 3) and `rotation` in degrees.
pub fn polygon(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let sides = p.get_or("sides", 6.0).max(3.0) as u32;
    let r = p.length("radius").unwrap_or((w.min(h) * 0.35).floor());
    let offset = p.get_or("rotation", 0.0).to_radians();
    let c = p.center();
    let pts: Vec<Point> = (0..sides)
        .map(|i| {
            let a = TAU * f64::from(i) / f64::from(sides) + offset;
            Point::new(c.x + r * a.cos(), c.y + r * a.sin())
        })
        .collect();
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_polygon(&pts, p.color_or(Rgba8::new(255, 80, 80, 80)));
    painter.finish()
}

pub fn ellipse(p: &ShapeParams) -> BannerResult<Layer> {
    let (w, h) = p.size();
    let rx = p.length("rx").unwrap_or((w * 0.35).floor()).max(0.0);
    let ry = p.length("ry").unwrap_or((h * 0.35).floor()).max(0.0);
    let mut painter = Painter::new(p.canvas)?;
    painter.fill_shape(
        &Ellipse::new(p.center(), (rx, ry), 0.0),
        p.color_or(Rgba8::new(120, 120, 255, 80)),
    );
    painter.finish()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/basic.rs"]
mod tests;
