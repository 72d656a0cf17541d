use super::*;
use crate::foundation::core::{Canvas, Rgba8};

#[test]
fn tiny_sigma_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    assert_eq!(blur_channels(&src, 1, 2, 0.0).unwrap(), src);
    assert_eq!(blur_channels(&src, 1, 2, f32::NAN).unwrap(), src);
}

#[test]
fn flat_layer_stays_flat() {
    let layer = Layer::filled(Canvas::new(6, 5).unwrap(), Rgba8::new(10, 20, 30, 255)).unwrap();
    let out = layer.blurred(2.0).unwrap();
    for (a, b) in out.data().iter().zip(layer.data()) {
        assert!(a.abs_diff(*b) <= 1, "{a} vs {b}");
    }
}

#[test]
fn blur_spreads_a_single_pixel() {
    let (w, h) = (9u32, 9u32);
    let mut src = vec![0u8; (w * h * 4) as usize];
    let center = ((4 * w + 4) * 4) as usize;
    src[center..center + 4].copy_from_slice(&[255, 255, 255, 255]);

    let out = blur_channels(&src, w, h, 1.2).unwrap();

    let lit = out.chunks_exact(4).filter(|px| px[3] != 0).count();
    assert!(lit > 1);
    assert!(out[center + 3] < 255);
    let total: i32 = out.chunks_exact(4).map(|px| i32::from(px[3])).sum();
    assert!((total - 255).abs() <= 16, "total alpha {total}");
}

#[test]
fn soft_edges_keep_their_color() {
    let (w, h) = (12u32, 3u32);
    let mut layer = Layer::new(Canvas::new(w, h).unwrap()).unwrap();
    for y in 0..h {
        for x in 0..w / 2 {
            layer.set_pixel(x, y, Rgba8::new(255, 0, 0, 255).premul());
        }
    }
    let out = layer.blurred(1.5).unwrap();

    let edge = out.pixel(w / 2, 1);
    assert!(edge.a > 0 && edge.a < 255, "{edge:?}");
    for y in 0..h {
        for x in 0..w {
            let px = out.pixel(x, y);
            assert_eq!((px.r, px.g, px.b), (px.a, 0, 0), "({x},{y})");
        }
    }
}

#[test]
fn mismatched_buffer_is_rejected() {
    assert!(blur_channels(&[0u8; 12], 2, 2, 1.0).is_err());
}
