use super::*;
use crate::foundation::core::{Canvas, Rgba8};

fn params() -> EffectParams {
    EffectParams {
        canvas: Canvas::new(64, 32).unwrap(),
        ss: 2,
        position: (0.85, 0.15),
        scale: 1.0,
    }
}

fn fill(c: Rgba8) -> Layer {
    Layer::filled(Canvas::new(64, 32).unwrap(), c).unwrap()
}

#[test]
fn vignette_factor_spans_half_to_one() {
    assert_eq!(vignette_factor(64, 32, 32, 16), 1.0);
    assert_eq!(vignette_factor(64, 32, 0, 0), 0.5);
    let mid = vignette_factor(64, 32, 16, 8);
    assert!(mid > 0.7 && mid < 0.8);
}

#[test]
fn vignette_darkens_corners_of_mid_gray() {
    let out = vignette(fill(Rgba8::rgb(128, 128, 128)), &params()).unwrap();
    assert_eq!(out.rgba(32, 16), Rgba8::rgb(128, 128, 128));
    let corner = out.rgba(0, 0);
    assert_eq!(corner, Rgba8::rgb(64, 64, 64));
    assert!(out.rgba(63, 31).r < 70);
}

#[test]
fn vintage_is_sepia_then_vignette() {
    let out = vintage(fill(Rgba8::rgb(100, 100, 100)), &params()).unwrap();
    let c = out.rgba(32, 16);
    // 100 * (0.393 + 0.769 + 0.189) = 135.1
    assert_eq!((c.r, c.g, c.b), (135, 120, 93));
    assert!(out.rgba(0, 0).r < c.r);
}

#[test]
fn chromatic_aberration_offsets_red_and_blue() {
    let canvas = Canvas::new(16, 1).unwrap();
    let mut layer = Layer::filled(canvas, Rgba8::BLACK).unwrap();
    layer.set_pixel(8, 0, Rgba8::WHITE.premul());
    let out = chromatic_aberration(layer, &EffectParams {
        canvas,
        ..params()
    })
    .unwrap();
    // ss = 2: red moves right by 4, blue left by 4, green stays.
    assert_eq!(out.rgba(12, 0), Rgba8::rgb(255, 0, 0));
    assert_eq!(out.rgba(4, 0), Rgba8::rgb(0, 0, 255));
    assert_eq!(out.rgba(8, 0), Rgba8::rgb(0, 255, 0));
}

#[test]
fn chromatic_aberration_ignores_narrow_layers() {
    let layer = Layer::filled(Canvas::new(3, 3).unwrap(), Rgba8::WHITE).unwrap();
    let out = chromatic_aberration(layer.clone(), &params()).unwrap();
    assert_eq!(out, layer);
}
