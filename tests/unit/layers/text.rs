use super::*;

use crate::layers::fonts::SystemFonts;

fn big(f: impl FnOnce(&mut BannerConfig)) -> BannerConfig {
    let mut cfg = BannerConfig::default();
    f(&mut cfg);
    cfg.scaled(2)
}

fn line(width: f64, size: f32) -> ShapedLine {
    ShapedLine {
        glyphs: vec![PlacedGlyph {
            id: 1,
            x: 0.0,
            y: size * 0.8,
        }],
        width,
        size,
    }
}

fn empty_line() -> ShapedLine {
    ShapedLine {
        glyphs: Vec::new(),
        width: 0.0,
        size: 10.0,
    }
}

#[test]
fn auto_text_color_prefers_contrast() {
    assert_eq!(auto_text_color(Rgba8::WHITE, 4.5), DARK_TEXT);
    assert_eq!(auto_text_color(Rgba8::BLACK, 4.5), Rgba8::WHITE);
    // White misses 4.5 on pure red, and dark gray contrasts slightly more.
    assert_eq!(auto_text_color(Rgba8::rgb(255, 0, 0), 4.5), DARK_TEXT);
    assert_eq!(auto_text_color(Rgba8::rgb(255, 0, 0), 3.0), Rgba8::WHITE);
}

#[test]
fn auto_box_opposes_text_lightness() {
    assert_eq!(
        auto_box_color(Rgba8::WHITE, Rgba8::rgb(0, 0, 128)),
        Rgba8::new(0, 0, 0, 38)
    );
    assert_eq!(
        auto_box_color(DARK_TEXT, Rgba8::WHITE),
        Rgba8::new(255, 255, 255, 38)
    );
    assert_eq!(
        auto_box_color(Rgba8::WHITE, Rgba8::rgb(128, 128, 128)),
        Rgba8::new(0, 0, 0, 90)
    );
}

#[test]
fn colors_without_box_follow_background() {
    let cfg = big(|_| {});
    let (text, boxed) = resolve_colors(&cfg, Rgba8::rgb(11, 62, 140));
    assert_eq!(text, Rgba8::WHITE);
    assert_eq!(boxed, None);

    let cfg = big(|c| c.text_color = "#ff0000".into());
    assert_eq!(resolve_colors(&cfg, Rgba8::WHITE).0, Rgba8::rgb(255, 0, 0));
}

#[test]
fn explicit_box_color_drives_auto_text() {
    let cfg = big(|c| {
        c.text_box = true;
        c.text_box_color = "rgba(250,250,250,0.5)".into();
    });
    let (text, boxed) = resolve_colors(&cfg, Rgba8::BLACK);
    assert_eq!(boxed, Some(Rgba8::new(250, 250, 250, 127)));
    assert_eq!(text, DARK_TEXT);
}

#[test]
fn auto_box_is_derived_from_text() {
    let cfg = big(|c| {
        c.text_box = true;
        c.text_box_color = "auto".into();
    });
    let (text, boxed) = resolve_colors(&cfg, Rgba8::BLACK);
    assert_eq!(text, Rgba8::WHITE);
    assert_eq!(boxed, Some(Rgba8::new(0, 0, 0, 38)));
}

#[test]
fn explicit_sizes_bypass_fitting() {
    let cfg = big(|c| c.title_font_size = Some(40));
    let sizes = fit_sizes(&cfg, |_| panic!("measured")).unwrap();
    assert_eq!(sizes, TextSizes { title: 80.0, subtitle: 36.0 });

    let cfg = big(|c| {
        c.title_font_size = Some(40);
        c.subtitle_font_size = Some(12);
    });
    assert_eq!(fit_sizes(&cfg, |_| Ok(0.0)).unwrap().subtitle, 24.0);
}

#[test]
fn fitting_starts_at_quarter_height() {
    let cfg = big(|_| {});
    let sizes = fit_sizes(&cfg, |_| Ok(0.0)).unwrap();
    assert_eq!(sizes, TextSizes { title: 128.0, subtitle: 57.0 });
}

#[test]
fn fitting_steps_down_to_the_floor() {
    let cfg = big(|_| {});
    let mut tried = Vec::new();
    let sizes = fit_sizes(&cfg, |size| {
        tried.push(size);
        Ok(f64::MAX)
    })
    .unwrap();
    assert_eq!(tried.first(), Some(&128.0));
    assert!(tried.windows(2).all(|w| w[0] - w[1] == 4.0));
    assert_eq!(sizes, TextSizes { title: 24.0, subtitle: 20.0 });
}

#[test]
fn long_titles_shrink_regardless_of_width() {
    let cfg = big(|c| c.title = "An extremely long banner headline".to_owned());
    let sizes = fit_sizes(&cfg, |_| Ok(0.0)).unwrap();
    assert_eq!(sizes.title, 24.0);
}

#[test]
fn block_is_centred_beside_the_icon() {
    let cfg = big(|_| {});
    let at = place(&cfg, &line(300.0, 128.0), &line(200.0, 57.0));
    assert_eq!(at.x, 64.0);
    assert_eq!(at.title_y, 117.0);
    assert_eq!(at.subtitle_y, 117.0 + 128.0 + 92.0);
    assert_eq!(at.bottom, at.subtitle_y + 57.0);

    let cfg = big(|c| c.icon_position = IconPosition::Left);
    assert_eq!(place(&cfg, &line(1.0, 128.0), &line(1.0, 57.0)).x, 64.0 + 317.0 + 64.0);
}

#[test]
fn lone_title_has_no_gap() {
    let cfg = big(|_| {});
    let at = place(&cfg, &line(300.0, 128.0), &empty_line());
    assert_eq!(at.subtitle_y, at.title_y + 128.0);
    assert_eq!(at.bottom, at.subtitle_y);
}

fn lit_pixels(layer: &Layer) -> usize {
    (0..layer.height())
        .flat_map(|y| (0..layer.width()).map(move |x| (x, y)))
        .filter(|&(x, y)| layer.rgba(x, y).r > 200)
        .count()
}

#[test]
fn missing_fonts_render_with_the_builtin_face() {
    let cfg = BannerConfig {
        width: 200,
        height: 60,
        title: "Hello".to_owned(),
        subtitle: String::new(),
        title_font: "NoSuchFont-Bold.ttf".to_owned(),
        ..BannerConfig::default()
    }
    .scaled(2);
    let layer = Layer::filled(cfg.canvas().unwrap(), Rgba8::BLACK).unwrap();
    let out = draw_text(layer.clone(), &cfg, &SystemFonts::empty(), Rgba8::BLACK).unwrap();
    assert_ne!(out, layer);
    assert!(lit_pixels(&out) > 50);
}

#[test]
fn empty_text_passes_through() {
    let cfg = big(|c| {
        c.title.clear();
        c.subtitle.clear();
    });
    let layer = Layer::filled(cfg.canvas().unwrap(), Rgba8::BLACK).unwrap();
    let out = draw_text(layer.clone(), &cfg, &SystemFonts::new(), Rgba8::BLACK).unwrap();
    assert_eq!(out, layer);
}

#[test]
fn system_font_draws_light_text_on_black() {
    let fonts = SystemFonts::new();
    let cfg = BannerConfig {
        width: 256,
        height: 64,
        title: "Hi".to_owned(),
        subtitle: String::new(),
        ..BannerConfig::default()
    }
    .scaled(2);
    let layer = Layer::filled(cfg.canvas().unwrap(), Rgba8::BLACK).unwrap();
    let out = draw_text(layer, &cfg, &fonts, Rgba8::BLACK).unwrap();
    assert!(lit_pixels(&out) > 50);
}
