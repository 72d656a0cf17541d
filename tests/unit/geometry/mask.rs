use super::*;

fn big(f: impl FnOnce(&mut BannerConfig)) -> BannerConfig {
    let mut cfg = BannerConfig {
        width: 64,
        height: 32,
        ..BannerConfig::default()
    };
    f(&mut cfg);
    cfg.scaled(2)
}

#[test]
fn plain_config_yields_full_mask() {
    let mask = build_mask(&big(|_| {})).unwrap();
    assert_eq!((mask.width(), mask.height()), (128, 64));
    assert!(mask.is_full());
}

#[test]
fn border_insets_the_mask() {
    let mask = build_mask(&big(|c| c.border = true)).unwrap();
    assert_eq!(mask.get(0, 0), 0);
    assert_eq!(mask.get(7, 30), 0);
    assert_eq!(mask.get(8, 30), 255);
    assert_eq!(mask.get(64, 32), 255);
}

#[test]
fn rounded_corners_are_cleared() {
    let mask = build_mask(&big(|c| c.rounded = true)).unwrap();
    assert_eq!(mask.get(0, 0), 0);
    assert_eq!(mask.get(127, 63), 0);
    assert_eq!(mask.get(64, 0), 255);
    assert_eq!(mask.get(64, 32), 255);
}

#[test]
fn explicit_corner_overrides_default() {
    let mask = build_mask(&big(|c| c.corner_radius_tr = Some(10))).unwrap();
    assert_eq!(mask.get(0, 0), 255);
    assert_eq!(mask.get(127, 0), 0);
}

#[test]
fn mask_generation_is_idempotent() {
    let cfg = big(|c| {
        c.rounded = true;
        c.border = true;
        c.corner_radius_bl = Some(3);
    });
    assert_eq!(build_mask(&cfg).unwrap(), build_mask(&cfg).unwrap());
}
