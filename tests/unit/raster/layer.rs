use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn filled_layer_stores_premultiplied_pixels() {
    let layer = Layer::filled(canvas(2, 2), Rgba8::new(200, 100, 0, 128)).unwrap();
    let px = layer.pixel(1, 1);
    assert_eq!(px.a, 128);
    assert_eq!(px.r, 100);
    assert_eq!(px.g, 50);
}

#[test]
fn from_premul_rejects_wrong_length() {
    assert!(Layer::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(Layer::from_premul(0, 2, vec![]).is_err());
}

#[test]
fn over_requires_equal_sizes() {
    let mut a = Layer::new(canvas(2, 2)).unwrap();
    let b = Layer::new(canvas(3, 2)).unwrap();
    assert!(a.over(&b).is_err());
}

#[test]
fn over_at_clips_to_destination() {
    let mut dst = Layer::filled(canvas(4, 4), Rgba8::BLACK).unwrap();
    let src = Layer::filled(canvas(3, 3), Rgba8::WHITE).unwrap();
    dst.over_at(&src, 2, -1);
    assert_eq!(dst.rgba(3, 0), Rgba8::WHITE);
    assert_eq!(dst.rgba(2, 1), Rgba8::WHITE);
    assert_eq!(dst.rgba(1, 1), Rgba8::BLACK);
    assert_eq!(dst.rgba(3, 3), Rgba8::BLACK);
}

#[test]
fn mask_clips_to_transparent() {
    let mut layer = Layer::filled(canvas(2, 1), Rgba8::WHITE).unwrap();
    let mut alpha = Layer::new(canvas(2, 1)).unwrap();
    alpha.set_pixel(1, 0, Rgba8::WHITE.premul());
    layer.apply_mask(&Mask::from_alpha(&alpha)).unwrap();
    assert_eq!(layer.rgba(0, 0), Rgba8::TRANSPARENT);
    assert_eq!(layer.rgba(1, 0), Rgba8::WHITE);
}

#[test]
fn map_straight_sees_coordinates_and_straight_colors() {
    let mut layer = Layer::filled(canvas(3, 2), Rgba8::new(100, 100, 100, 255)).unwrap();
    layer.map_straight(|x, y, [r, g, b, a]| {
        if (x, y) == (2, 1) { [0, g, b, a] } else { [r, g, b, a] }
    });
    assert_eq!(layer.rgba(2, 1).r, 0);
    assert_eq!(layer.rgba(0, 0).r, 100);
}

#[test]
fn resize_hits_exact_target_dimensions() {
    let layer = Layer::filled(canvas(20, 10), Rgba8::new(30, 60, 90, 255)).unwrap();
    let small = layer.resized(10, 5).unwrap();
    assert_eq!((small.width(), small.height()), (10, 5));
    let c = small.rgba(5, 2);
    assert!((i32::from(c.r) - 30).abs() <= 1);
    assert_eq!(c.a, 255);
}

#[test]
fn into_image_unpremultiplies() {
    let layer = Layer::filled(canvas(1, 1), Rgba8::new(200, 100, 50, 128)).unwrap();
    let img = layer.into_image().unwrap();
    let p = img.get_pixel(0, 0).0;
    assert_eq!(p[3], 128);
    assert!((i32::from(p[0]) - 200).abs() <= 2);
}

#[test]
fn full_mask_reports_full() {
    assert!(Mask::full(canvas(3, 3)).is_full());
    assert!(!Mask::empty(canvas(3, 3)).is_full());
}
