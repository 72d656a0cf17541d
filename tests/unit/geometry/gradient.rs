use super::*;
use crate::foundation::core::Canvas;

fn layer(w: u32, h: u32) -> Layer {
    Layer::new(Canvas::new(w, h).unwrap()).unwrap()
}

const START: Rgba8 = Rgba8::rgb(0, 82, 204);
const END: Rgba8 = Rgba8::rgb(23, 43, 77);

#[test]
fn vertical_endpoints_match_configured_colors() {
    let mut l = layer(8, 32);
    fill_gradient(&mut l, Rect::new(0.0, 0.0, 8.0, 32.0), START, END, GradientKind::Vertical);
    assert_eq!(l.rgba(3, 0), START);
    assert_eq!(l.rgba(3, 31), END);
    assert_eq!(l.rgba(0, 10), l.rgba(7, 10));
}

#[test]
fn horizontal_and_diagonal_endpoints() {
    let mut l = layer(16, 4);
    let rect = Rect::new(0.0, 0.0, 16.0, 4.0);
    fill_gradient(&mut l, rect, START, END, GradientKind::Horizontal);
    assert_eq!(l.rgba(0, 2), START);
    assert_eq!(l.rgba(15, 2), END);

    fill_gradient(&mut l, rect, START, END, GradientKind::Diagonal);
    assert_eq!(l.rgba(0, 0), START);
    assert_eq!(l.rgba(15, 3), END);
}

#[test]
fn radial_center_is_start_color() {
    let mut l = layer(21, 21);
    fill_gradient(&mut l, Rect::new(0.0, 0.0, 21.0, 21.0), START, END, GradientKind::Radial);
    let c = l.rgba(10, 10);
    assert_eq!(c, START);
    assert!(rgb_distance(l.rgba(0, 0), END) < rgb_distance(c, END));
}

#[test]
fn radial_center_hits_start_on_even_and_offset_boxes() {
    let mut l = layer(32, 17);
    fill_gradient(&mut l, Rect::new(4.0, 3.0, 24.0, 16.0), START, END, GradientKind::Radial);
    // Box is 20x13 at (4,3); centre pixel is (4+10, 3+6).
    assert_eq!(l.rgba(14, 9), START);
    assert_ne!(l.rgba(4, 3), START);
}

#[test]
fn gradient_kind_round_trips_through_config_names() {
    for kind in GradientKind::names() {
        let parsed: GradientKind = serde_json::from_str(&format!("\"{kind}\"")).unwrap();
        assert_eq!(parsed.name(), kind);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), format!("\"{kind}\""));
    }
    let none: GradientKind = serde_json::from_str("\"none\"").unwrap();
    assert_eq!(none, GradientKind::Solid);
    assert_eq!(GradientKind::default(), GradientKind::Vertical);
}

#[test]
fn solid_uses_start_and_forces_alpha() {
    let mut l = layer(4, 4);
    fill_gradient(
        &mut l,
        Rect::new(1.0, 1.0, 3.0, 3.0),
        START.with_alpha(10),
        END,
        GradientKind::Solid,
    );
    assert_eq!(l.rgba(2, 2), START);
    assert_eq!(l.rgba(0, 0).a, 0);
}

#[test]
fn unknown_names_become_vertical() {
    assert_eq!(GradientKind::from_name("spiral"), GradientKind::Vertical);
    assert_eq!(GradientKind::from_name("NONE"), GradientKind::Solid);
    let k: GradientKind = serde_json::from_str("\"wobbly\"").unwrap();
    assert_eq!(k, GradientKind::Vertical);
}

#[test]
fn auto_adjust_pushes_identical_endpoints_apart() {
    for c in [Rgba8::WHITE, Rgba8::BLACK, Rgba8::rgb(128, 128, 128), Rgba8::rgb(250, 5, 120)] {
        let (s, e) = auto_adjust_endpoints(c, c);
        assert_eq!(s, c);
        assert!(rgb_distance(s, e) >= MIN_GRADIENT_DISTANCE, "{c:?} -> {e:?}");
    }
}

#[test]
fn auto_adjust_leaves_distinct_endpoints() {
    assert_eq!(auto_adjust_endpoints(START, END), (START, END));
}
