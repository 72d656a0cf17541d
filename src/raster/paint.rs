//! Vector drawing onto a fresh [`Layer`] through `vello_cpu`.

use kurbo::Shape;

use crate::foundation::core::{Affine, BezPath, Canvas, Point, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::raster::layer::Layer;

/// One positioned glyph in layer pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlacedGlyph {
    pub id: u32,
    pub x: f32,
    pub y: f32,
}

/// A transparent surface that accumulates anti-aliased fills and strokes.
pub struct Painter {
    ctx: vello_cpu::RenderContext,
    width: u16,
    height: u16,
}

impl Painter {
    pub fn new(canvas: Canvas) -> BannerResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BannerError::render("layer width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BannerError::render("layer height exceeds u16"))?;
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            width,
            height,
        })
    }

    pub fn set_transform(&mut self, transform: Affine) {
        self.ctx.set_transform(affine_to_cpu(transform));
    }

    pub fn reset_transform(&mut self) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
    }

    pub fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.ctx.set_paint(color.to_vello());
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    pub fn fill_shape(&mut self, shape: &impl Shape, color: Rgba8) {
        self.fill_path(&shape.to_path(0.1), color);
    }

    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba8) {
        if let Some(path) = polygon_path(points) {
            self.fill_path(&path, color);
        }
    }

    pub fn stroke_path(&mut self, path: &BezPath, width: f64, color: Rgba8) {
        if color.a == 0 || width <= 0.0 {
            return;
        }
        self.ctx.set_paint(color.to_vello());
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    pub fn stroke_shape(&mut self, shape: &impl Shape, width: f64, color: Rgba8) {
        self.stroke_path(&shape.to_path(0.1), width, color);
    }

    pub fn stroke_polyline(&mut self, points: &[Point], width: f64, color: Rgba8) {
        let mut path = BezPath::new();
        let mut it = points.iter();
        let Some(first) = it.next() else {
            return;
        };
        path.move_to(*first);
        for p in it {
            path.line_to(*p);
        }
        self.stroke_path(&path, width, color);
    }

    pub fn fill_glyphs(
        &mut self,
        font: &vello_cpu::peniko::FontData,
        font_size: f32,
        glyphs: &[PlacedGlyph],
        color: Rgba8,
    ) {
        if color.a == 0 || glyphs.is_empty() {
            return;
        }
        self.ctx.set_paint(color.to_vello());
        self.ctx
            .glyph_run(font)
            .font_size(font_size)
            .fill_glyphs(glyphs.iter().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            }));
    }

    /// Rasterize everything drawn so far into a premultiplied layer.
    pub fn finish(mut self) -> BannerResult<Layer> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Layer::from_premul(
            u32::from(self.width),
            u32::from(self.height),
            pixmap.data_as_u8_slice().to_vec(),
        )
    }
}

/// Closed path through `points`, or `None` for fewer than three points.
pub fn polygon_path(points: &[Point]) -> Option<BezPath> {
    if points.len() < 3 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();
    Some(path)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/paint.rs"]
mod tests;
