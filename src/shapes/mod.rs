//! Decorative shapes drawn behind the icon and text.

pub mod basic;
pub mod organic;

use std::collections::BTreeMap;

use crate::color::{ColorSpec, parse_color_keep_alpha};
use crate::config::{BannerConfig, ShapeSpec};
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::BannerResult;
use crate::raster::Layer;

/// Inputs of one shape generator.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapeParams {
    pub canvas: Canvas,
    pub ss: u32,
    /// Configured color; `None` uses the generator's own default.
    pub color: Option<Rgba8>,
    /// Free-form numeric parameters. Lengths are logical pixels.
    pub params: BTreeMap<String, f64>,
    /// Configured centre in device pixels.
    pub anchor: Option<Point>,
}

fn device_point(center: Option<[f64; 2]>, ss: u32) -> Option<Point> {
    center
        .filter(|[x, y]| x.is_finite() && y.is_finite())
        .map(|[x, y]| Point::new(x * f64::from(ss), y * f64::from(ss)))
}

impl ShapeParams {
    /// Parameters for the single `shape` field; `shape_color` always applies.
    pub fn single(big: &BannerConfig) -> BannerResult<Self> {
        Ok(Self {
            canvas: big.canvas()?,
            ss: big.ss(),
            color: Some(resolve_color(&big.shape_color)),
            params: big.shape_params.clone(),
            anchor: device_point(big.shape_center, big.ss()),
        })
    }

    /// Parameters for one entry of the `shapes` list.
    pub fn from_spec(big: &BannerConfig, spec: &ShapeSpec) -> BannerResult<Self> {
        Ok(Self {
            canvas: big.canvas()?,
            ss: big.ss(),
            color: spec.color.as_ref().map(resolve_color),
            params: spec.params.clone(),
            anchor: device_point(spec.center, big.ss()),
        })
    }

    /// Where centred shapes are drawn.
    pub fn center(&self) -> Point {
        self.anchor.unwrap_or_else(|| self.canvas.center())
    }

    pub fn color_or(&self, default: Rgba8) -> Rgba8 {
        self.color.unwrap_or(default)
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.params.get(key).copied().filter(|v| v.is_finite())
    }

    pub fn get_or(&self, key: &str, default: f64) -> f64 {
        self.get(key).unwrap_or(default)
    }

    /// A logical length parameter converted to device pixels.
    pub fn length(&self, key: &str) -> Option<f64> {
        self.get(key).map(|v| v * f64::from(self.ss))
    }

    pub(crate) fn size(&self) -> (f64, f64) {
        (f64::from(self.canvas.width), f64::from(self.canvas.height))
    }
}

/// Shape colors keep their own alpha; bare RGB is opaque.
fn resolve_color(spec: &ColorSpec) -> Rgba8 {
    parse_color_keep_alpha(spec, 255)
}

pub type ShapeFn = fn(&ShapeParams) -> BannerResult<Layer>;

static SHAPES: &[(&str, ShapeFn)] = &[
    ("blob", organic::blob),
    ("circle", basic::circle),
    ("diagonal_bar", organic::diagonal_bar),
    ("ellipse", basic::ellipse),
    ("polygon", basic::polygon),
    ("rectangle", basic::rectangle),
    ("triangle", basic::triangle),
    ("wave", organic::wave),
];

pub fn lookup(name: &str) -> Option<ShapeFn> {
    SHAPES.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    SHAPES.iter().map(|(n, _)| *n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/mod.rs"]
mod tests;
