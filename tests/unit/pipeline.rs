use super::*;

use crate::foundation::core::Rgba8;

fn small(f: impl FnOnce(&mut BannerConfig)) -> BannerConfig {
    let mut cfg = BannerConfig {
        width: 64,
        height: 32,
        title: String::new(),
        subtitle: String::new(),
        bg_color_start: "#336699".into(),
        bg_color_end: "#336699".into(),
        test_mode: true,
        ..BannerConfig::default()
    };
    f(&mut cfg);
    cfg
}

fn px(img: &RgbaImage, x: u32, y: u32) -> [u8; 4] {
    img.get_pixel(x, y).0
}

#[test]
fn stages_run_in_pipeline_order() {
    let order: Vec<&str> = STAGES.iter().map(|(s, _)| s.name()).collect();
    assert_eq!(
        order,
        vec![
            "background",
            "pattern",
            "shape",
            "icon",
            "text",
            "texture",
            "effects",
            "overlay",
            "mask_clip",
            "border",
        ]
    );
}

#[test]
fn output_has_logical_size() {
    for ss in [1, 2, 3, 8] {
        let cfg = small(|c| c.supersampling = ss);
        let img = generate_banner(&cfg, &Services::without_fonts()).unwrap();
        assert_eq!(img.dimensions(), (64, 32));
    }
}

#[test]
fn solid_background_survives_downscale() {
    let img = generate_banner(&small(|_| {}), &Services::without_fonts()).unwrap();
    assert_eq!(px(&img, 32, 16), [0x33, 0x66, 0x99, 255]);
    assert_eq!(px(&img, 0, 0), [0x33, 0x66, 0x99, 255]);
}

#[test]
fn unknown_generators_pass_through() {
    let plain = generate_banner(&small(|_| {}), &Services::without_fonts()).unwrap();
    let odd = generate_banner(
        &small(|c| {
            c.pattern = "plaid".to_owned();
            c.shape = "hexagram".to_owned();
            c.texture = "velvet".to_owned();
            c.effect = "sparkle, none".to_owned();
            c.overlay = "fog".to_owned();
        }),
        &Services::without_fonts(),
    )
    .unwrap();
    assert_eq!(plain, odd);
}

#[test]
fn border_is_drawn_after_clipping() {
    let cfg = small(|c| {
        c.border = true;
        c.border_width = 6;
        c.border_color = "#ff0000".into();
    });
    let img = generate_banner(&cfg, &Services::without_fonts()).unwrap();
    assert_eq!(px(&img, 0, 16), [255, 0, 0, 255]);
    assert_eq!(px(&img, 32, 16), [0x33, 0x66, 0x99, 255]);
}

#[test]
fn rounded_corners_are_transparent() {
    let cfg = small(|c| {
        c.width = 128;
        c.height = 96;
        c.rounded = true;
    });
    let img = generate_banner(&cfg, &Services::without_fonts()).unwrap();
    assert_eq!(px(&img, 0, 0)[3], 0);
    assert_eq!(px(&img, 127, 95)[3], 0);
    assert_eq!(px(&img, 64, 48)[3], 255);
}

#[test]
fn invalid_config_fails_at_canvas_stage() {
    let cfg = small(|c| {
        c.width = 0;
        c.preset_name = Some("modern_blue".to_owned());
    });
    let err = generate_banner(&cfg, &Services::without_fonts()).unwrap_err();
    assert_eq!(err.stage, Stage::Canvas);
    let msg = err.to_string();
    assert!(msg.starts_with("layer: canvas | preset: modern_blue | error: "), "{msg}");
    assert!(err.config_dump().contains("\"width\": 0"));
}

#[test]
fn missing_preset_name_reads_unknown() {
    let err = StageError::new(
        Stage::Texture,
        &BannerConfig::default(),
        BannerError::render("boom"),
    );
    assert_eq!(
        err.to_string(),
        "layer: texture | preset: unknown | error: render error: boom"
    );
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn output_path_uses_format_when_extension_missing() {
    let cfg = BannerConfig {
        output: "out/banner".to_owned(),
        output_format: "PNG".to_owned(),
        ..BannerConfig::default()
    };
    assert_eq!(output_path(&cfg), PathBuf::from("out/banner.png"));

    let cfg = BannerConfig {
        output: "x.jpg".to_owned(),
        ..BannerConfig::default()
    };
    assert_eq!(output_path(&cfg), PathBuf::from("x.jpg"));
}

#[test]
fn render_to_file_writes_png() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("pipeline_render_test");
    let cfg = small(|c| c.output = dir.join("nested/banner.png").to_string_lossy().into_owned());
    let path = render_to_file(&cfg, &Services::without_fonts()).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (64, 32));
    assert_eq!(back.get_pixel(10, 10).0, [0x33, 0x66, 0x99, 255]);
}

#[test]
fn auto_adjust_separates_identical_endpoints_outside_test_mode() {
    let cfg = small(|c| c.test_mode = false);
    let img = generate_banner(&cfg, &Services::without_fonts()).unwrap();
    let top = px(&img, 32, 0);
    let bottom = px(&img, 32, 31);
    let start = Rgba8::rgb(top[0], top[1], top[2]);
    let end = Rgba8::rgb(bottom[0], bottom[1], bottom[2]);
    assert!(crate::color::rgb_distance(start, end) > 40.0);
}
