use super::*;

#[test]
fn empty_json_yields_defaults() {
    let cfg = BannerConfig::from_json_str("{}").unwrap();
    assert_eq!(cfg, BannerConfig::default());
    assert_eq!((cfg.width, cfg.height), (1024, 256));
    assert_eq!(cfg.pattern_seed, 7);
    assert_eq!(cfg.texture_seed, 42);
    assert!(cfg.text_color.is_auto());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = BannerConfig::from_json_value(serde_json::json!({
        "title": "Hello",
        "gradient_type": "radial",
        "icon_position": "left",
        "effect_position": "bottom_left",
        "SuperSampling": 3,
        "shapes": [{"type": "circle", "color": "#ff0000", "rotation": 12}]
    }))
    .unwrap();
    assert_eq!(cfg.title, "Hello");
    assert_eq!(cfg.gradient_type, GradientKind::Radial);
    assert_eq!(cfg.icon_position, IconPosition::Left);
    assert_eq!(cfg.effect_position, EffectPosition::BottomLeft);
    assert_eq!(cfg.supersampling, 3);
    let shapes = cfg.shapes.unwrap();
    assert_eq!(shapes[0].kind, "circle");
    assert_eq!(shapes[0].params.get("rotation"), Some(&12.0));
    assert_eq!(cfg.subtitle, BannerConfig::default().subtitle);
}

#[test]
fn scaled_multiplies_canvas_and_explicit_radii_only() {
    let cfg = BannerConfig {
        corner_radius_tl: Some(10),
        padding: 32,
        supersampling: 9,
        ..BannerConfig::default()
    };
    let big = cfg.scaled(cfg.clamped_ss());
    assert_eq!(big.supersampling, 3);
    assert_eq!((big.width, big.height), (3072, 768));
    assert_eq!(big.corner_radius_tl, Some(30));
    assert_eq!(big.corner_radius_tr, None);
    assert_eq!(big.padding, 32);
}

#[test]
fn clamped_ss_stays_in_range() {
    for (input, expected) in [(0, 2), (1, 2), (2, 2), (3, 3), (8, 3)] {
        let cfg = BannerConfig {
            supersampling: input,
            ..BannerConfig::default()
        };
        assert_eq!(cfg.clamped_ss(), expected);
    }
}

#[test]
fn default_radius_is_a_sixth_of_height_when_rounded() {
    let big = BannerConfig {
        rounded: true,
        corner_radius_br: Some(5),
        ..BannerConfig::default()
    }
    .scaled(2);
    let r = big.corner_radii();
    assert_eq!(r.tl, f64::from(512 / 6));
    assert_eq!(r.br, 10.0);
}

#[test]
fn border_px_scales_with_ss() {
    let big = BannerConfig {
        border: true,
        ..BannerConfig::default()
    }
    .scaled(3);
    assert_eq!(big.border_px(), 12);
    let (rect, _) = big.inner_box();
    assert_eq!(rect.x0, 12.0);
    assert_eq!(rect.x1, f64::from(3072 - 12));
}

#[test]
fn validate_rejects_degenerate_values() {
    let zero = BannerConfig {
        width: 0,
        ..BannerConfig::default()
    };
    assert!(zero.validate().is_err());
    let nan = BannerConfig {
        pattern_density: f64::NAN,
        ..BannerConfig::default()
    };
    assert!(nan.validate().is_err());
    assert!(BannerConfig::default().validate().is_ok());
}

#[test]
fn validate_bounds_the_supersampled_canvas() {
    let limit = MAX_DEVICE_SIDE / SS_RANGE.1;
    let at_limit = BannerConfig {
        width: limit,
        height: 16,
        ..BannerConfig::default()
    };
    assert!(at_limit.validate().is_ok());
    for (width, height) in [(limit + 1, 16), (16, limit + 1), (2_000_000_000, 16), (3_000_000_000, 16)] {
        let cfg = BannerConfig {
            width,
            height,
            ..BannerConfig::default()
        };
        assert!(cfg.validate().is_err(), "{width}x{height}");
    }
}

#[test]
fn scaling_huge_sizes_saturates_instead_of_overflowing() {
    let cfg = BannerConfig {
        width: 3_000_000_000,
        corner_radius_tl: Some(u32::MAX),
        ..BannerConfig::default()
    };
    let big = cfg.scaled(3);
    assert_eq!(big.width, u32::MAX);
    assert_eq!(big.corner_radius_tl, Some(u32::MAX));
}

#[test]
fn json_roundtrip_preserves_config() {
    let cfg = BannerConfig {
        pattern_colors: Some(vec!["#ff0000".into()]),
        effect_x: Some(0.3),
        ..BannerConfig::default()
    };
    let text = cfg.to_json_pretty().unwrap();
    assert_eq!(BannerConfig::from_json_str(&text).unwrap(), cfg);
}

#[test]
fn shape_centers_deserialize_from_pairs() {
    let cfg = BannerConfig::from_json_str(
        r#"{"shape_center": [12, 8], "shapes": [{"type": "circle", "center": [100, 50], "radius": 20}]}"#,
    )
    .unwrap();
    assert_eq!(cfg.shape_center, Some([12.0, 8.0]));
    let shapes = cfg.shapes.unwrap();
    assert_eq!(shapes[0].center, Some([100.0, 50.0]));
    assert_eq!(shapes[0].params.get("radius"), Some(&20.0));
}
