use super::*;

fn big(f: impl FnOnce(&mut BannerConfig)) -> BannerConfig {
    let mut cfg = BannerConfig {
        width: 100,
        height: 50,
        ..BannerConfig::default()
    };
    f(&mut cfg);
    cfg.scaled(2)
}

#[test]
fn registry_covers_all_shapes() {
    assert_eq!(
        names(),
        vec![
            "blob",
            "circle",
            "diagonal_bar",
            "ellipse",
            "polygon",
            "rectangle",
            "triangle",
            "wave"
        ]
    );
    assert!(lookup("none").is_none());
    assert!(lookup("hexagon").is_none());
}

#[test]
fn single_shape_always_carries_shape_color() {
    let p = ShapeParams::single(&big(|_| {})).unwrap();
    assert_eq!(p.color, Some(Rgba8::new(0, 200, 255, 90)));
    assert_eq!((p.canvas.width, p.canvas.height), (200, 100));
    assert_eq!(p.ss, 2);
}

#[test]
fn listed_shape_without_color_uses_default() {
    let spec: ShapeSpec =
        serde_json::from_value(serde_json::json!({"type": "circle", "radius": 10})).unwrap();
    let p = ShapeParams::from_spec(&big(|_| {}), &spec).unwrap();
    assert_eq!(p.color, None);
    assert_eq!(p.color_or(Rgba8::BLACK), Rgba8::BLACK);
    assert_eq!(p.length("radius"), Some(20.0));
}

#[test]
fn hex_shape_color_is_opaque_unless_alpha_given() {
    let p = ShapeParams::single(&big(|c| c.shape_color = ColorSpec::hex("#ff0000"))).unwrap();
    assert_eq!(p.color, Some(Rgba8::new(255, 0, 0, 255)));
    let p = ShapeParams::single(&big(|c| c.shape_color = ColorSpec::hex("#ff000080"))).unwrap();
    assert_eq!(p.color, Some(Rgba8::new(255, 0, 0, 128)));
}

#[test]
fn non_finite_params_are_ignored() {
    let mut p = ShapeParams::single(&big(|_| {})).unwrap();
    p.params.insert("sides".into(), f64::NAN);
    assert_eq!(p.get_or("sides", 6.0), 6.0);
}

#[test]
fn centers_are_logical_and_scaled_to_the_canvas() {
    let spec: ShapeSpec = serde_json::from_value(serde_json::json!({
        "type": "circle", "center": [30, 10], "radius": 5
    }))
    .unwrap();
    let p = ShapeParams::from_spec(&big(|_| {}), &spec).unwrap();
    assert_eq!(p.center(), Point::new(60.0, 20.0));
    assert!(!p.params.contains_key("center"));

    let p = ShapeParams::single(&big(|c| c.shape_center = Some([80.0, 40.0]))).unwrap();
    assert_eq!(p.center(), Point::new(160.0, 80.0));

    let p = ShapeParams::single(&big(|_| {})).unwrap();
    assert_eq!(p.center(), Point::new(100.0, 50.0));
}
