//! Background motif generators.
//!
//! Each generator paints onto a fresh transparent layer the size of the working canvas; the
//! pattern stage composites it over the background.

pub mod grid;
pub mod lines;

use crate::color::{ColorSpec, parse_color};
use crate::config::BannerConfig;
use crate::foundation::core::{Affine, Canvas, Rgba8, Vec2};
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::raster::Layer;

pub use grid::grid_cell;

/// Everything a pattern generator may read.
#[derive(Clone, Debug, PartialEq)]
pub struct PatternParams {
    /// Size of the layer to produce (device pixels).
    pub canvas: Canvas,
    /// Area the motifs are laid out over. Larger than `canvas` when the pattern is rotated.
    pub field: Canvas,
    /// Banner height before supersampling; drives cell and band spacing.
    pub logical_height: u32,
    pub density: f64,
    pub opacity: u8,
    pub jitter: f64,
    pub size_variance: f64,
    /// Per-motif rotation range in degrees.
    pub tilt: f64,
    /// Whole-pattern rotation in degrees.
    pub rotation: f64,
    pub colors: Vec<ColorSpec>,
    pub ss: u32,
    pub freq: Option<f64>,
    pub amp: Option<f64>,
}

impl PatternParams {
    pub fn from_config(big: &BannerConfig) -> BannerResult<Self> {
        let canvas = big.canvas()?;
        let ss = big.ss();
        let field = if big.pattern_rotation != 0.0 {
            let w = f64::from(canvas.width);
            let h = f64::from(canvas.height);
            let side = ((w * w + h * h).sqrt() * 1.1) as u32;
            Canvas::new(side.max(1), side.max(1))?
        } else {
            canvas
        };
        Ok(Self {
            canvas,
            field,
            logical_height: (big.height / ss).max(1),
            density: big.pattern_density.max(0.05),
            opacity: big.pattern_opacity,
            jitter: big.pattern_jitter,
            size_variance: big.pattern_size_variance,
            tilt: big.pattern_tilt,
            rotation: big.pattern_rotation,
            colors: big.pattern_colors.clone().unwrap_or_default(),
            ss,
            freq: big.pattern_freq,
            amp: big.pattern_amp,
        })
    }

    /// Maps field coordinates onto the canvas: the field is centred on the canvas and turned
    /// counter-clockwise by `rotation` degrees about the canvas centre.
    pub fn field_transform(&self) -> Affine {
        let offset = Vec2::new(
            (f64::from(self.field.width) - f64::from(self.canvas.width)) / 2.0,
            (f64::from(self.field.height) - f64::from(self.canvas.height)) / 2.0,
        );
        let offset = Vec2::new(offset.x.floor(), offset.y.floor());
        Affine::rotate_about(-self.rotation.to_radians(), self.canvas.center())
            * Affine::translate(-offset)
    }

    /// A random color from the list at the pattern opacity, or `fallback` when none is given.
    pub(crate) fn pick_color(&self, rng: &mut Rng64, fallback: Rgba8) -> Rgba8 {
        if self.colors.is_empty() {
            return fallback.with_alpha(self.opacity);
        }
        let spec = &self.colors[rng.index(self.colors.len())];
        parse_color(spec, self.opacity)
    }

    /// Stroke width shared by outlines and swept lines.
    pub(crate) fn line_width(&self) -> f64 {
        f64::from((2 * self.ss).max(2))
    }
}

pub type PatternFn = fn(&PatternParams, &mut Rng64) -> BannerResult<Layer>;

static PATTERNS: &[(&str, PatternFn)] = &[
    ("ascii_grid", grid::ascii_grid),
    ("circles", grid::dots_outline),
    ("dots", grid::dots),
    ("dots_outline", grid::dots_outline),
    ("hearts", grid::hearts),
    ("hearts_outline", grid::hearts_outline),
    ("lines", lines::lines),
    ("sine", lines::wave),
    ("squares", grid::squares),
    ("squares_outline", grid::squares_outline),
    ("stars", grid::stars),
    ("stars_outline", grid::stars_outline),
    ("triangles", grid::triangles),
    ("triangles_outline", grid::triangles_outline),
    ("wave", lines::wave),
    ("zigzag", lines::zigzag),
];

pub fn lookup(name: &str) -> Option<PatternFn> {
    PATTERNS.iter().find(|(n, _)| *n == name).map(|(_, f)| *f)
}

pub fn names() -> Vec<&'static str> {
    PATTERNS.iter().map(|(n, _)| *n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/patterns/mod.rs"]
mod tests;
