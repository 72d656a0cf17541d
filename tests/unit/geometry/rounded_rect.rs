use super::*;
use crate::foundation::core::Canvas;

fn layer(w: u32, h: u32) -> Layer {
    Layer::new(Canvas::new(w, h).unwrap()).unwrap()
}

#[test]
fn square_corners_fill_the_whole_box() {
    let mut l = layer(20, 10);
    let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
    draw_asym_rounded_rect(&mut l, rect, CornerRadii::default(), Some(Rgba8::WHITE), None, 0.0)
        .unwrap();
    assert_eq!(l.rgba(0, 0), Rgba8::WHITE);
    assert_eq!(l.rgba(19, 9), Rgba8::WHITE);
}

#[test]
fn only_rounded_corners_lose_coverage() {
    let mut l = layer(40, 40);
    let rect = Rect::new(0.0, 0.0, 40.0, 40.0);
    let radii = CornerRadii::new(12.0, 0.0, 0.0, 0.0);
    draw_asym_rounded_rect(&mut l, rect, radii, Some(Rgba8::WHITE), None, 0.0).unwrap();
    assert_eq!(l.rgba(0, 0).a, 0);
    assert_eq!(l.rgba(39, 0).a, 255);
    assert_eq!(l.rgba(20, 20).a, 255);
}

#[test]
fn oversized_radii_are_clamped_not_inverted() {
    let mut l = layer(40, 20);
    let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
    draw_asym_rounded_rect(
        &mut l,
        rect,
        CornerRadii::uniform(500.0),
        Some(Rgba8::WHITE),
        None,
        0.0,
    )
    .unwrap();
    // A stadium: the middle is solid and the corners are empty.
    assert_eq!(l.rgba(20, 10).a, 255);
    assert_eq!(l.rgba(0, 0).a, 0);
    assert_eq!(l.rgba(39, 19).a, 0);
}

#[test]
fn outline_leaves_the_interior_transparent() {
    let mut l = layer(30, 30);
    let rect = Rect::new(0.0, 0.0, 30.0, 30.0);
    draw_asym_rounded_rect(
        &mut l,
        rect,
        CornerRadii::uniform(6.0),
        None,
        Some(Rgba8::rgb(200, 0, 0)),
        4.0,
    )
    .unwrap();
    assert_eq!(l.rgba(15, 15).a, 0);
    assert_eq!(l.rgba(15, 1), Rgba8::rgb(200, 0, 0));
    assert_eq!(l.rgba(1, 15), Rgba8::rgb(200, 0, 0));
}

#[test]
fn outline_wider_than_half_the_box_fills_it() {
    let path = rounded_ring_path(Rect::new(0.0, 0.0, 10.0, 10.0), CornerRadii::default(), 8.0);
    let mut painter = Painter::new(Canvas::new(10, 10).unwrap()).unwrap();
    painter.fill_path(&path, Rgba8::WHITE);
    let l = painter.finish().unwrap();
    assert_eq!(l.rgba(5, 5), Rgba8::WHITE);
}

#[test]
fn degenerate_box_yields_empty_path() {
    assert!(rounded_rect_path(Rect::new(5.0, 5.0, 5.0, 9.0), CornerRadii::uniform(2.0)).is_empty());
}
