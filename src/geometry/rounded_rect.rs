//! Rectangles with an independent radius per corner.

use crate::foundation::core::{BezPath, CornerRadii, Point, Rect, Rgba8};
use crate::foundation::error::BannerResult;
use crate::raster::{Layer, Painter};

/// Cubic handle length for a quarter circle.
const KAPPA: f64 = 0.552_284_749_830_793_4;

#[derive(Clone, Copy)]
struct CornerArc {
    from: Point,
    to: Point,
    corner: Point,
}

impl CornerArc {
    fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            corner: self.corner,
        }
    }
}

/// Corner arcs in clockwise order (screen coordinates, y down) starting top-left.
fn corner_arcs(rect: Rect, r: CornerRadii) -> [CornerArc; 4] {
    let (x0, y0, x1, y1) = (rect.x0, rect.y0, rect.x1, rect.y1);
    [
        CornerArc {
            from: Point::new(x0, y0 + r.tl),
            to: Point::new(x0 + r.tl, y0),
            corner: Point::new(x0, y0),
        },
        CornerArc {
            from: Point::new(x1 - r.tr, y0),
            to: Point::new(x1, y0 + r.tr),
            corner: Point::new(x1, y0),
        },
        CornerArc {
            from: Point::new(x1, y1 - r.br),
            to: Point::new(x1 - r.br, y1),
            corner: Point::new(x1, y1),
        },
        CornerArc {
            from: Point::new(x0 + r.bl, y1),
            to: Point::new(x0, y1 - r.bl),
            corner: Point::new(x0, y1),
        },
    ]
}

fn push_contour(path: &mut BezPath, arcs: impl IntoIterator<Item = CornerArc>) {
    let mut started = false;
    for arc in arcs {
        if started {
            path.line_to(arc.from);
        } else {
            path.move_to(arc.from);
            started = true;
        }
        if arc.from != arc.to {
            let c1 = arc.from.lerp(arc.corner, KAPPA);
            let c2 = arc.to.lerp(arc.corner, KAPPA);
            path.curve_to(c1, c2, arc.to);
        }
    }
    if started {
        path.close_path();
    }
}

/// Normalize a box so `x0 <= x1` and `y0 <= y1`, collapsing crossed bounds to their midpoint.
fn collapse(rect: Rect) -> Rect {
    let (mut x0, mut x1) = (rect.x0, rect.x1);
    let (mut y0, mut y1) = (rect.y0, rect.y1);
    if x0 > x1 {
        let m = (x0 + x1) / 2.0;
        x0 = m;
        x1 = m;
    }
    if y0 > y1 {
        let m = (y0 + y1) / 2.0;
        y0 = m;
        y1 = m;
    }
    Rect::new(x0, y0, x1, y1)
}

/// Outline of the rounded rectangle as a single clockwise contour.
///
/// The region equals the union of the four quarter-disc corner pies and the five body bands
/// (top, bottom, left, right, centre), with every radius clamped to half the shorter side.
pub fn rounded_rect_path(rect: Rect, radii: CornerRadii) -> BezPath {
    let rect = collapse(rect);
    let radii = radii.clamped_to(rect);
    let mut path = BezPath::new();
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return path;
    }
    push_contour(&mut path, corner_arcs(rect, radii));
    path
}

/// Ring between the rounded box and the same box shrunk by `width` on every side.
///
/// The inner contour winds opposite to the outer one, so under non-zero filling the result has
/// outer coverage times one minus inner coverage.
pub fn rounded_ring_path(rect: Rect, radii: CornerRadii, width: f64) -> BezPath {
    let mut path = rounded_rect_path(rect, radii);
    if path.is_empty() {
        return path;
    }
    let outer = collapse(rect);
    let inner = collapse(Rect::new(
        outer.x0 + width,
        outer.y0 + width,
        outer.x1 - width,
        outer.y1 - width,
    ));
    if inner.width() > 0.0 && inner.height() > 0.0 {
        let inner_radii = radii.clamped_to(outer).inset(width).clamped_to(inner);
        let arcs = corner_arcs(inner, inner_radii);
        push_contour(&mut path, arcs.into_iter().rev().map(CornerArc::reversed));
    }
    path
}

/// Draw an asymmetric rounded rectangle onto `layer`.
///
/// With `fill`, the shape is filled. With `outline` and `width > 0`, a ring of that thickness is
/// drawn along the inside of the edge, leaving the interior of the ring untouched.
pub fn draw_asym_rounded_rect(
    layer: &mut Layer,
    rect: Rect,
    radii: CornerRadii,
    fill: Option<Rgba8>,
    outline: Option<Rgba8>,
    width: f64,
) -> BannerResult<()> {
    let mut painter = Painter::new(layer.canvas())?;
    if let Some(color) = fill {
        painter.fill_path(&rounded_rect_path(rect, radii), color);
    }
    if let Some(color) = outline
        && width > 0.0
    {
        painter.fill_path(&rounded_ring_path(rect, radii, width), color);
    }
    layer.over(&painter.finish()?)
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/rounded_rect.rs"]
mod tests;
