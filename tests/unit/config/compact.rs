use super::*;

const PATTERNS: &[&str] = &["dots", "sine", "zigzag", "lines"];
const SHAPES: &[&str] = &["circle", "wave"];
const TEXTURES: &[&str] = &["paper", "metal"];

#[test]
fn bg_end_defaults_to_start_and_unknown_type_is_vertical() {
    let m = parse_bg("red");
    assert_eq!(m["bg_color_start"], "#ff0000");
    assert_eq!(m["bg_color_end"], "#ff0000");
    assert_eq!(m["gradient_type"], "vertical");

    let m = parse_bg("blue:purple:spiral");
    assert_eq!(m["bg_color_end"], "#800080");
    assert_eq!(m["gradient_type"], "vertical");

    assert_eq!(parse_bg("#000:#fff:radial")["gradient_type"], "radial");
}

#[test]
fn text_shadow_levels() {
    let m = parse_text("white:dark");
    assert_eq!(m["text_color"], "#ffffff");
    assert_eq!(m["shadow"], true);
    assert_eq!(m["shadow_opacity"], 150);

    let m = parse_text("black:nope");
    assert_eq!(m["shadow"], false);
    assert!(!m.contains_key("shadow_opacity"));

    let m = parse_text("black:true");
    assert_eq!(m["shadow"], true);
    assert!(!m.contains_key("shadow_opacity"));
}

#[test]
fn pattern_defaults_and_clamps() {
    let m = parse_pattern("dots", PATTERNS);
    assert_eq!(m["pattern"], "dots");
    assert_eq!(m["pattern_colors"], json!(["#000000"]));
    assert_eq!(m["pattern_opacity"], 255);

    let m = parse_pattern("sine:blue:999:40:1", PATTERNS);
    assert_eq!(m["pattern_opacity"], 255);
    assert_eq!(m["pattern_freq"], 10.0);
    assert_eq!(m["pattern_amp"], 5.0);

    let m = parse_pattern("dots:red:20:4:30", PATTERNS);
    assert!(!m.contains_key("pattern_freq"));
    assert_eq!(parse_pattern("plaid", PATTERNS)["pattern"], "none");
}

#[test]
fn comma_lists_take_the_first_entry() {
    let m = parse_pattern("lines:white:30,dots:gray:15", PATTERNS);
    assert_eq!(m["pattern"], "lines");
    assert_eq!(m["pattern_opacity"], 30);
}

#[test]
fn shape_accent_resolves_against_accent_flag() {
    let m = parse_shape("circle:accent:40", SHAPES, Some("#00ff00"));
    assert_eq!(m["shape_color"], json!([0, 255, 0, 40]));

    let m = parse_shape("wave:accent", SHAPES, None);
    assert_eq!(m["shape"], "wave");
    assert!(!m.contains_key("shape_color"));

    let m = parse_shape("circle:red", SHAPES, None);
    assert_eq!(m["shape_color"], json!([255, 0, 0, 90]));
}

#[test]
fn texture_and_effect() {
    let m = parse_texture("paper:20", TEXTURES);
    assert_eq!(m["texture"], "paper");
    assert_eq!(m["texture_opacity"], 20);

    let m = parse_effect("bloom:strong,vignette");
    assert_eq!(m["effect"], "bloom,vignette");
    assert_eq!(m["effect_scale"], 1.5);
}

#[test]
fn intensity_scales_only_present_opacities() {
    let mut m = JsonMap::new();
    m.insert("pattern_opacity".into(), json!(200));
    m.insert("shape_color".into(), json!([1, 2, 3, 100]));
    apply_intensity(&mut m, "high");
    assert_eq!(m["pattern_opacity"], 255);
    assert_eq!(m["shape_color"], json!([1, 2, 3, 130]));
    assert!(!m.contains_key("texture_opacity"));
}

#[test]
fn size_only_fills_unset_fields() {
    let mut m = JsonMap::new();
    m.insert("padding".into(), json!(50));
    apply_size(&mut m, "large");
    assert_eq!(m["padding"], 50);
    assert_eq!(m["icon_size"], 144);
}

#[test]
fn rounded_padding_contrast_and_accent() {
    let mut m = JsonMap::new();
    apply_rounded(&mut m, 12);
    apply_padding(&mut m, 500);
    apply_contrast(&mut m, "high");
    m.insert("pattern".into(), json!("dots"));
    apply_accent(&mut m, "orange");
    assert_eq!(m["rounded"], true);
    assert_eq!(m["corner_radius_bl"], 12);
    assert_eq!(m["padding"], 100);
    assert_eq!(m["min_contrast"], 7.0);
    assert_eq!(m["pattern_colors"], json!(["#ffa500"]));
}
