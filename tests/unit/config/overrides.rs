use super::*;

fn lib() -> PresetLibrary {
    PresetLibrary::builtin().unwrap()
}

#[test]
fn no_overrides_gives_defaults() {
    let cfg = Overrides::default().resolve(&lib(), None).unwrap();
    assert_eq!(cfg, BannerConfig::default());
}

#[test]
fn preset_is_applied_and_recorded() {
    let o = Overrides {
        preset: Some("modern_blue".into()),
        ..Overrides::default()
    };
    let cfg = o.resolve(&lib(), None).unwrap();
    assert_eq!(cfg.pattern, "dots");
    assert_eq!(cfg.preset_name.as_deref(), Some("modern_blue"));
}

#[test]
fn unknown_preset_is_an_error() {
    let o = Overrides {
        preset: Some("nope".into()),
        ..Overrides::default()
    };
    assert!(o.resolve(&lib(), None).is_err());
}

#[test]
fn compact_strings_beat_preset_and_base() {
    let mut base = JsonMap::new();
    base.insert("pattern".into(), json!("hearts"));
    base.insert("title".into(), json!("From file"));
    let o = Overrides {
        preset: Some("modern_blue".into()),
        pattern: Some("stars:red:40".into()),
        title: Some("From flag".into()),
        ..Overrides::default()
    };
    let cfg = o.resolve(&lib(), Some(base)).unwrap();
    assert_eq!(cfg.pattern, "stars");
    assert_eq!(cfg.pattern_opacity, 40);
    assert_eq!(cfg.title, "From flag");
}

#[test]
fn modifiers_run_after_merge() {
    let o = Overrides {
        pattern: Some("dots:white:100".into()),
        intensity: Some("low".into()),
        rounded: Some(20),
        padding: Some(4),
        size: Some("small".into()),
        ..Overrides::default()
    };
    let cfg = o.resolve(&lib(), None).unwrap();
    assert_eq!(cfg.pattern_opacity, 70);
    assert_eq!(cfg.corner_radius_tl, Some(20));
    assert!(cfg.rounded);
    assert_eq!(cfg.padding, 10);
    assert_eq!(cfg.icon_size, 96);
}

#[test]
fn shape_accent_uses_accent_color() {
    let o = Overrides {
        shape: Some("circle:accent:50".into()),
        accent: Some("#123456".into()),
        ..Overrides::default()
    };
    let cfg = o.resolve(&lib(), None).unwrap();
    assert_eq!(cfg.shape, "circle");
    assert_eq!(
        cfg.shape_color,
        crate::color::ColorSpec::Channels(vec![18.0, 52.0, 86.0, 50.0])
    );
}
