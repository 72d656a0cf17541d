//! Translucent layers composited after the effects.

use kurbo::Circle;

use crate::color::{ColorSpec, parse_color_keep_alpha};
use crate::config::{BannerConfig, OverlayParams};
use crate::foundation::core::{Canvas, Point, Rgba8};
use crate::foundation::error::BannerResult;
use crate::raster::{Layer, Painter};

/// Inputs of one overlay generator.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayInput {
    pub canvas: Canvas,
    pub ss: u32,
    pub params: OverlayParams,
}

impl OverlayInput {
    pub fn from_config(big: &BannerConfig) -> BannerResult<Self> {
        Ok(Self {
            canvas: big.canvas()?,
            ss: big.ss(),
            params: big.overlay_params.clone(),
        })
    }

    /// `spec` resolved against `default`; `opacity` replaces the alpha of colors without one.
    fn color(&self, spec: Option<&ColorSpec>, default: Rgba8) -> Rgba8 {
        let alpha = self.params.opacity.unwrap_or(default.a);
        match spec {
            Some(spec) => parse_color_keep_alpha(spec, alpha),
            None => default.with_alpha(alpha),
        }
    }
}

pub type OverlayFn = fn(&OverlayInput) -> BannerResult<Layer>;

static OVERLAYS: &[(&str, OverlayFn)] = &[
    ("color", color),
    ("gradient", gradient),
    ("lens_flare", lens_flare),
    ("simple", simple),
];

pub fn lookup(name: &str) -> Option<OverlayFn> {
    OVERLAYS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    OVERLAYS.iter().map(|(n, _)| *n).collect()
}

/// A light sheen across the top-left to bottom-right.
pub fn simple(o: &OverlayInput) -> BannerResult<Layer> {
    let (w, h) = (f64::from(o.canvas.width), f64::from(o.canvas.height));
    let third = f64::from(o.canvas.height / 3);
    let color = o.color(o.params.color.as_ref(), Rgba8::new(255, 255, 255, 60));
    let mut painter = Painter::new(o.canvas)?;
    painter.fill_polygon(
        &[
            Point::new(0.0, third),
            Point::new(w, 0.0),
            Point::new(w, third),
            Point::new(0.0, h),
        ],
        color,
    );
    painter.finish()
}

pub fn color(o: &OverlayInput) -> BannerResult<Layer> {
    Layer::filled(o.canvas, o.color(o.params.color.as_ref(), Rgba8::new(0, 0, 0, 80)))
}

/// Two-color ramp with interpolated alpha. `direction` is `vertical` (default), `horizontal`
/// or `diagonal`.
pub fn gradient(o: &OverlayInput) -> BannerResult<Layer> {
    let start = o.color(o.params.color1.as_ref(), Rgba8::new(0, 0, 0, 80));
    let end = match o.params.color2.as_ref() {
        Some(spec) => parse_color_keep_alpha(spec, 0),
        None => Rgba8::new(255, 255, 255, 0),
    };
    let (w, h) = (o.canvas.width, o.canvas.height);
    let span = |n: u32| f64::from(n.saturating_sub(1).max(1));
    let direction = o.params.direction.as_deref().unwrap_or("vertical");
    let ratio = |x: u32, y: u32| match direction {
        "horizontal" => f64::from(x) / span(w),
        "diagonal" => f64::from(x + y) / f64::from((w + h).saturating_sub(2).max(1)),
        _ => f64::from(y) / span(h),
    };

    let mix = |a: u8, b: u8, t: f64| (f64::from(a) * (1.0 - t) + f64::from(b) * t) as u8;
    let mut layer = Layer::new(o.canvas)?;
    layer.map_straight(|x, y, _| {
        let t = ratio(x, y).clamp(0.0, 1.0);
        [
            mix(start.r, end.r, t),
            mix(start.g, end.g, t),
            mix(start.b, end.b, t),
            mix(start.a, end.a, t),
        ]
    });
    Ok(layer)
}

/// Two faint concentric discs at `(0.7W, 0.3H)`.
pub fn lens_flare(o: &OverlayInput) -> BannerResult<Layer> {
    let c = Point::new(
        (f64::from(o.canvas.width) * 0.7).trunc(),
        (f64::from(o.canvas.height) * 0.3).trunc(),
    );
    let ss = f64::from(o.ss);
    let mut painter = Painter::new(o.canvas)?;
    painter.fill_shape(&Circle::new(c, 40.0 * ss), Rgba8::new(255, 255, 255, 30));
    painter.fill_shape(&Circle::new(c, 20.0 * ss), Rgba8::new(255, 255, 255, 40));
    painter.finish()
}

#[cfg(test)]
#[path = "../tests/unit/overlays.rs"]
mod tests;
