//! The layer pipeline: every stage runs on the supersampled canvas, then one resize produces
//! the final image.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::RgbaImage;

use crate::color::{parse_color_keep_alpha, parse_rgb};
use crate::config::BannerConfig;
use crate::foundation::error::{BannerError, BannerResult};
use crate::foundation::math::Rng64;
use crate::geometry::{auto_adjust_endpoints, build_mask, draw_asym_rounded_rect, fill_gradient};
use crate::layers::{self, FontProvider, SystemFonts};
use crate::raster::Layer;
use crate::{effects, overlays, patterns, shapes, textures};

/// Pipeline stages in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    Canvas,
    Background,
    Pattern,
    Shape,
    Icon,
    Text,
    Texture,
    Effects,
    Overlay,
    MaskClip,
    Border,
    Downscale,
    Save,
}

impl Stage {
    pub fn name(self) -> &'static str {
        match self {
            Self::Canvas => "canvas",
            Self::Background => "background",
            Self::Pattern => "pattern",
            Self::Shape => "shape",
            Self::Icon => "icon",
            Self::Text => "text",
            Self::Texture => "texture",
            Self::Effects => "effects",
            Self::Overlay => "overlay",
            Self::MaskClip => "mask_clip",
            Self::Border => "border",
            Self::Downscale => "downscale",
            Self::Save => "save",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A failed render, tagged with the stage that failed and the config that was rendered.
#[derive(thiserror::Error, Debug)]
#[error(
    "layer: {stage} | preset: {} | error: {source}",
    .preset.as_deref().unwrap_or("unknown")
)]
pub struct StageError {
    pub stage: Stage,
    pub preset: Option<String>,
    pub config: Box<BannerConfig>,
    pub source: BannerError,
}

impl StageError {
    pub fn new(stage: Stage, config: &BannerConfig, source: BannerError) -> Self {
        Self {
            stage,
            preset: config.preset_name.clone(),
            config: Box::new(config.clone()),
            source,
        }
    }

    /// Pretty JSON of the config that failed.
    pub fn config_dump(&self) -> String {
        self.config
            .to_json_pretty()
            .unwrap_or_else(|e| format!("<config could not be serialized: {e}>"))
    }
}

/// External collaborators a render needs.
#[derive(Clone)]
pub struct Services {
    pub fonts: Arc<dyn FontProvider>,
}

impl Services {
    pub fn new(fonts: impl FontProvider + 'static) -> Self {
        Self {
            fonts: Arc::new(fonts),
        }
    }

    /// System font database plus `./fonts`.
    pub fn system() -> Self {
        Self::new(SystemFonts::new())
    }

    /// No system fonts; text renders with the built-in face.
    pub fn without_fonts() -> Self {
        Self::new(SystemFonts::empty())
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}

type StageFn = fn(Layer, &BannerConfig, &Services) -> BannerResult<Layer>;

const STAGES: &[(Stage, StageFn)] = &[
    (Stage::Background, background),
    (Stage::Pattern, pattern),
    (Stage::Shape, shape),
    (Stage::Icon, icon),
    (Stage::Text, text),
    (Stage::Texture, texture),
    (Stage::Effects, effect_chain),
    (Stage::Overlay, overlay),
    (Stage::MaskClip, mask_clip),
    (Stage::Border, border),
];

/// Render `config` to a straight-alpha image at its logical size.
#[tracing::instrument(
    skip(config, services),
    fields(preset = ?config.preset_name, width = config.width, height = config.height)
)]
pub fn generate_banner(config: &BannerConfig, services: &Services) -> Result<RgbaImage, StageError> {
    let fail = move |stage: Stage| move |e: BannerError| StageError::new(stage, config, e);

    config.validate().map_err(fail(Stage::Canvas))?;
    let big = config.scaled(config.clamped_ss());
    let mut layer = big
        .canvas()
        .and_then(Layer::new)
        .map_err(fail(Stage::Canvas))?;

    for &(stage, run) in STAGES {
        tracing::debug!(stage = %stage, "running stage");
        layer = run(layer, &big, services).map_err(fail(stage))?;
    }

    layer
        .resized(config.width, config.height)
        .and_then(Layer::into_image)
        .map_err(fail(Stage::Downscale))
}

/// Render and write the image to `config.output`. Returns the path written.
pub fn render_to_file(config: &BannerConfig, services: &Services) -> Result<PathBuf, StageError> {
    let image = generate_banner(config, services)?;
    let path = output_path(config);
    save_image(&image, &path).map_err(|e| StageError::new(Stage::Save, config, e))?;
    tracing::info!(path = %path.display(), "banner written");
    Ok(path)
}

/// `output`, with `output_format` as the extension when the path has none.
pub fn output_path(config: &BannerConfig) -> PathBuf {
    let path = PathBuf::from(&config.output);
    if path.extension().is_some() {
        path
    } else {
        path.with_extension(config.output_format.trim().to_ascii_lowercase())
    }
}

fn save_image(image: &RgbaImage, path: &Path) -> BannerResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| BannerError::io(format!("create '{}': {e}", parent.display())))?;
    }
    let format = image::ImageFormat::from_path(path)
        .map_err(|e| BannerError::io(format!("unsupported output format: {e}")))?;
    // JPEG and friends have no alpha channel.
    let keeps_alpha = matches!(
        format,
        image::ImageFormat::Png | image::ImageFormat::WebP | image::ImageFormat::Tiff
    );
    let written = if keeps_alpha {
        image.save_with_format(path, format)
    } else {
        image::DynamicImage::ImageRgba8(image.clone())
            .to_rgb8()
            .save_with_format(path, format)
    };
    written.map_err(|e| BannerError::io(format!("write '{}': {e}", path.display())))
}

fn log_unknown(family: &str, name: &str) {
    if !name.is_empty() && name != "none" {
        tracing::debug!(family, name, "unknown generator, passing through");
    }
}

fn background(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let mut start = parse_rgb(&big.bg_color_start);
    let mut end = parse_rgb(&big.bg_color_end);
    if !big.test_mode {
        (start, end) = auto_adjust_endpoints(start, end);
    }
    let (rect, _) = big.inner_box();
    fill_gradient(&mut layer, rect, start, end, big.gradient_type);
    let mask = build_mask(big)?;
    if !mask.is_full() {
        layer.apply_mask(&mask)?;
    }
    Ok(layer)
}

fn pattern(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let Some(generate) = patterns::lookup(&big.pattern) else {
        log_unknown("pattern", &big.pattern);
        return Ok(layer);
    };
    let params = patterns::PatternParams::from_config(big)?;
    let mut rng = Rng64::new(big.pattern_seed);
    layer.over(&generate(&params, &mut rng)?)?;
    Ok(layer)
}

fn shape(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    if let Some(list) = big.shapes.as_ref().filter(|l| !l.is_empty()) {
        for spec in list {
            let Some(generate) = shapes::lookup(&spec.kind) else {
                log_unknown("shape", &spec.kind);
                continue;
            };
            layer.over(&generate(&shapes::ShapeParams::from_spec(big, spec)?)?)?;
        }
        return Ok(layer);
    }
    let Some(generate) = shapes::lookup(&big.shape) else {
        log_unknown("shape", &big.shape);
        return Ok(layer);
    };
    layer.over(&generate(&shapes::ShapeParams::single(big)?)?)?;
    Ok(layer)
}

fn icon(layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    layers::draw_icon(layer, big, layers::average_background(big))
}

fn text(layer: Layer, big: &BannerConfig, services: &Services) -> BannerResult<Layer> {
    layers::draw_text(
        layer,
        big,
        services.fonts.as_ref(),
        layers::average_background(big),
    )
}

fn texture(layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let Some(generate) = textures::lookup(&big.texture) else {
        log_unknown("texture", &big.texture);
        return Ok(layer);
    };
    textures::apply(generate, layer, &textures::TextureParams::from_config(big)?)
}

fn effect_chain(layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    if effects::chain(&big.effect).is_empty() {
        return Ok(layer);
    }
    let params = effects::EffectParams::from_config(big)?;
    effects::apply_chain(layer, &big.effect, &params, &build_mask(big)?)
}

fn overlay(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let Some(generate) = overlays::lookup(&big.overlay) else {
        log_unknown("overlay", &big.overlay);
        return Ok(layer);
    };
    layer.over(&generate(&overlays::OverlayInput::from_config(big)?)?)?;
    Ok(layer)
}

fn mask_clip(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let mask = build_mask(big)?;
    if !mask.is_full() {
        layer.apply_mask(&mask)?;
    }
    Ok(layer)
}

fn border(mut layer: Layer, big: &BannerConfig, _: &Services) -> BannerResult<Layer> {
    let width = big.border_px();
    if width == 0 {
        return Ok(layer);
    }
    let color = parse_color_keep_alpha(&big.border_color, 255);
    let rect = layer.canvas().rect();
    draw_asym_rounded_rect(
        &mut layer,
        rect,
        big.corner_radii(),
        None,
        Some(color),
        f64::from(width),
    )?;
    Ok(layer)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
