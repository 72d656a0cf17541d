//! Low-poly facets: a jittered triangle mesh where every triangle is a tilted plane.

use crate::foundation::core::Point;
use crate::foundation::error::BannerResult;
use crate::foundation::math::Rng64;
use crate::raster::Layer;
use crate::textures::TextureParams;
use crate::textures::lighting::{Lighting, shade};

const JITTER: f64 = 0.35;
const MAX_TILT: f64 = 0.08;

pub(crate) fn facet_cell(params: &TextureParams) -> usize {
    let ss = f64::from(params.ss);
    ((48.0 * ss / params.density) as usize).max(16 * params.ss as usize)
}

/// Vertex grid covering the canvas with one spare cell on every side.
fn mesh(params: &TextureParams, rng: &mut Rng64) -> (Vec<Point>, usize, usize) {
    let (w, h) = params.dims();
    let cell = facet_cell(params) as f64;
    let cols = w.div_ceil(facet_cell(params)) + 3;
    let rows = h.div_ceil(facet_cell(params)) + 3;
    let j = cell * JITTER;
    let mut pts = Vec::with_capacity(cols * rows);
    for r in 0..rows {
        for c in 0..cols {
            let x = (c as f64 - 1.0) * cell + rng.uniform(-j, j);
            let y = (r as f64 - 1.0) * cell + rng.uniform(-j, j);
            pts.push(Point::new(x, y));
        }
    }
    (pts, cols, rows)
}

/// Fill the pixels whose centres fall inside `tri` with the plane through `z`.
fn raster_triangle(height: &mut [f32], w: usize, h: usize, tri: [Point; 3], z: [f64; 3]) {
    let [p0, p1, p2] = tri;
    let denom = (p1.y - p2.y) * (p0.x - p2.x) + (p2.x - p1.x) * (p0.y - p2.y);
    if denom.abs() < 1e-8 {
        return;
    }
    let min_x = p0.x.min(p1.x).min(p2.x).floor().max(0.0) as usize;
    let min_y = p0.y.min(p1.y).min(p2.y).floor().max(0.0) as usize;
    let max_x = (p0.x.max(p1.x).max(p2.x).ceil().max(0.0) as usize).min(w);
    let max_y = (p0.y.max(p1.y).max(p2.y).ceil().max(0.0) as usize).min(h);
    let eps = -1e-9;
    for y in min_y..max_y {
        let py = y as f64 + 0.5;
        for x in min_x..max_x {
            let px = x as f64 + 0.5;
            let a = ((p1.y - p2.y) * (px - p2.x) + (p2.x - p1.x) * (py - p2.y)) / denom;
            let b = ((p2.y - p0.y) * (px - p2.x) + (p0.x - p2.x) * (py - p2.y)) / denom;
            let c = 1.0 - a - b;
            if a >= eps && b >= eps && c >= eps {
                height[y * w + x] = (a * z[0] + b * z[1] + c * z[2]) as f32;
            }
        }
    }
}

pub(crate) fn facet_height(params: &TextureParams, rng: &mut Rng64) -> Vec<f32> {
    let (w, h) = params.dims();
    let (pts, cols, rows) = mesh(params, rng);
    let mut height = vec![0.0f32; w * h];

    for r in 0..rows - 1 {
        for c in 0..cols - 1 {
            let i = r * cols + c;
            let quad = [pts[i], pts[i + 1], pts[i + cols + 1], pts[i + cols]];
            for tri in [[quad[0], quad[1], quad[2]], [quad[0], quad[2], quad[3]]] {
                let gx = rng.uniform(-MAX_TILT, MAX_TILT);
                let gy = rng.uniform(-MAX_TILT, MAX_TILT);
                let z = tri.map(|p| gx * p.x + gy * p.y);
                raster_triangle(&mut height, w, h, tri, z);
            }
        }
    }
    height
}

pub fn facets(layer: Layer, p: &TextureParams, rng: &mut Rng64) -> BannerResult<Layer> {
    shade(layer, &facet_height(p, rng), Lighting::new(6.0, 0.45))
}

#[cfg(test)]
#[path = "../../tests/unit/textures/facets.rs"]
mod tests;
