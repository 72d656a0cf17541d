use std::collections::BTreeMap;
use std::path::Path;

use crate::color::ColorSpec;
use crate::foundation::core::{Canvas, CornerRadii, Rect};
use crate::foundation::error::{BannerError, BannerResult};
use crate::geometry::gradient::GradientKind;

/// Lowest and highest supersampling factor a render will use.
pub const SS_RANGE: (u32, u32) = (2, 3);

/// Largest supersampled canvas side the rasterizer accepts.
pub const MAX_DEVICE_SIDE: u32 = u16::MAX as u32;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Declarative description of one banner.
///
/// Every field has a default, so any JSON object (including `{}`) is a valid config.
/// Geometric fields are in logical pixels; see [`BannerConfig::scaled`] for the render-time view.
pub struct BannerConfig {
    /// Main headline. Empty skips the title.
    pub title: String,
    /// Secondary line under the title. Empty skips it.
    pub subtitle: String,
    /// Raster or SVG icon drawn next to the text block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_path: Option<String>,
    /// Output file path.
    pub output: String,
    /// Encoder name used when the output path has no extension.
    pub output_format: String,

    pub width: u32,
    pub height: u32,
    /// Inner spacing between the banner edge and icon/text.
    pub padding: u32,

    pub bg_color_start: ColorSpec,
    pub bg_color_end: ColorSpec,
    pub gradient_type: GradientKind,
    /// Text color, or `"auto"` to pick one by contrast.
    pub text_color: ColorSpec,
    /// Accepted so older configs load. Background colors always resolve, so nothing reads it;
    /// automatic text color comes from `text_color: "auto"`.
    pub auto_color: bool,
    /// Contrast ratio the automatic text color tries to reach.
    pub min_contrast: f64,

    pub title_font: String,
    pub subtitle_font: String,
    /// Fixed title size in logical pixels; disables auto-sizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_font_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle_font_size: Option<u32>,

    /// Accepted so older configs and the compact multiplier round-trip. The icon box is
    /// always 62% of the canvas height.
    pub icon_size: u32,
    pub icon_position: IconPosition,

    pub shadow: bool,
    pub shadow_opacity: u8,

    pub border: bool,
    pub border_width: u32,
    pub border_color: ColorSpec,

    /// Round every corner by `height / 6` unless a per-corner radius is set.
    pub rounded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_tl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_tr: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_br: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_radius_bl: Option<u32>,

    pub text_box: bool,
    /// Box fill, or `"auto"` to pick a light or dark box by contrast.
    pub text_box_color: ColorSpec,
    pub text_box_radius: u32,
    pub text_box_padding: u32,

    pub texture: String,
    pub texture_density: f64,
    pub texture_opacity: u8,
    pub texture_seed: u64,

    pub pattern: String,
    pub pattern_density: f64,
    pub pattern_opacity: u8,
    /// Whole-pattern rotation in degrees.
    pub pattern_rotation: f64,
    /// Per-motif random rotation range in degrees.
    pub pattern_tilt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_colors: Option<Vec<ColorSpec>>,
    pub pattern_jitter: f64,
    pub pattern_size_variance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_freq: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_amp: Option<f64>,
    pub pattern_seed: u64,

    pub shape: String,
    pub shape_color: ColorSpec,
    pub shape_params: BTreeMap<String, f64>,
    /// Centre of the single `shape` in logical pixels; the canvas centre when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape_center: Option<[f64; 2]>,
    /// Several shapes drawn in order. Takes precedence over `shape`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapes: Option<Vec<ShapeSpec>>,

    /// Comma-separated effect chain, e.g. `"bloom,vignette"`.
    pub effect: String,
    pub effect_position: EffectPosition,
    pub effect_scale: f64,
    /// Relative flare position in `[0,1]`, overriding `effect_position`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effect_y: Option<f64>,

    pub overlay: String,
    pub overlay_params: OverlayParams,

    /// Disables automatic color adjustments so output is predictable.
    pub test_mode: bool,
    #[serde(alias = "SuperSampling")]
    pub supersampling: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset_name: Option<String>,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: "Banner Maker".to_owned(),
            subtitle: "Professional Banner Generation Tool".to_owned(),
            icon_path: None,
            output: "banner.png".to_owned(),
            output_format: "png".to_owned(),
            width: 1024,
            height: 256,
            padding: 32,
            bg_color_start: ColorSpec::hex("#0052CC"),
            bg_color_end: ColorSpec::hex("#172B4D"),
            gradient_type: GradientKind::Vertical,
            text_color: ColorSpec::from("auto"),
            auto_color: true,
            min_contrast: 4.5,
            title_font: "DejaVuSansMono-Bold.ttf".to_owned(),
            subtitle_font: "DejaVuSansMono.ttf".to_owned(),
            title_font_size: None,
            subtitle_font_size: None,
            icon_size: 120,
            icon_position: IconPosition::Right,
            shadow: false,
            shadow_opacity: 100,
            border: false,
            border_width: 4,
            border_color: ColorSpec::hex("#c8c8c8"),
            rounded: false,
            corner_radius_tl: None,
            corner_radius_tr: None,
            corner_radius_br: None,
            corner_radius_bl: None,
            text_box: false,
            text_box_color: ColorSpec::from("rgba(0,0,0,0.35)"),
            text_box_radius: 8,
            text_box_padding: 12,
            texture: "none".to_owned(),
            texture_density: 1.0,
            texture_opacity: 255,
            texture_seed: 42,
            pattern: "none".to_owned(),
            pattern_density: 1.0,
            pattern_opacity: 255,
            pattern_rotation: 0.0,
            pattern_tilt: 0.0,
            pattern_colors: None,
            pattern_jitter: 0.0,
            pattern_size_variance: 0.0,
            pattern_freq: None,
            pattern_amp: None,
            pattern_seed: 7,
            shape: "none".to_owned(),
            shape_color: ColorSpec::Channels(vec![0.0, 200.0, 255.0, 90.0]),
            shape_params: BTreeMap::new(),
            shape_center: None,
            shapes: None,
            effect: "none".to_owned(),
            effect_position: EffectPosition::TopRight,
            effect_scale: 1.0,
            effect_x: None,
            effect_y: None,
            overlay: "none".to_owned(),
            overlay_params: OverlayParams::default(),
            test_mode: false,
            supersampling: 2,
            preset_name: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Which side of the banner holds the icon.
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Named anchor for the lens flare.
pub enum EffectPosition {
    TopLeft,
    #[default]
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
    /// Use `effect_x` / `effect_y`; falls back to the centre when unset.
    Custom,
}

impl EffectPosition {
    /// Relative `(x, y)` of the anchor in `[0,1]`.
    pub fn relative(self) -> (f64, f64) {
        match self {
            Self::TopLeft => (0.15, 0.15),
            Self::TopRight => (0.85, 0.15),
            Self::Center | Self::Custom => (0.5, 0.5),
            Self::BottomLeft => (0.15, 0.85),
            Self::BottomRight => (0.85, 0.85),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One entry of [`BannerConfig::shapes`].
pub struct ShapeSpec {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    /// `[x, y]` in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<[f64; 2]>,
    /// Remaining numeric parameters (`rotation`, `seed`, `amplitude`, ...).
    #[serde(flatten)]
    pub params: BTreeMap<String, f64>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters shared by the overlay generators. Unset fields use each overlay's own default.
pub struct OverlayParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color1: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color2: Option<ColorSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
}

impl BannerConfig {
    pub fn from_json_str(json: &str) -> BannerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: serde_json::Value) -> BannerResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_file(path: &Path) -> BannerResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| BannerError::io(format!("read config '{}': {e}", path.display())))?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> BannerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> BannerResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BannerError::validation("width/height must be > 0"));
        }
        for (name, value) in [("width", self.width), ("height", self.height)] {
            let device = value.checked_mul(SS_RANGE.1);
            if device.is_none_or(|d| d > MAX_DEVICE_SIDE) {
                return Err(BannerError::validation(format!(
                    "{name} {value} is too large; at most {} pixels",
                    MAX_DEVICE_SIDE / SS_RANGE.1
                )));
            }
        }
        for (name, value) in [
            ("texture_density", self.texture_density),
            ("pattern_density", self.pattern_density),
            ("effect_scale", self.effect_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BannerError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("pattern_rotation", self.pattern_rotation),
            ("pattern_tilt", self.pattern_tilt),
            ("pattern_jitter", self.pattern_jitter),
            ("pattern_size_variance", self.pattern_size_variance),
            ("min_contrast", self.min_contrast),
        ] {
            if !value.is_finite() {
                return Err(BannerError::validation(format!("{name} must be finite")));
            }
        }
        Ok(())
    }

    /// Supersampling factor actually used for a render.
    pub fn clamped_ss(&self) -> u32 {
        self.supersampling.clamp(SS_RANGE.0, SS_RANGE.1)
    }

    /// The render-time config: canvas and explicit radii multiplied by `ss`, which is
    /// clamped and stored in `supersampling`.
    pub fn scaled(&self, ss: u32) -> Self {
        let ss = ss.clamp(SS_RANGE.0, SS_RANGE.1);
        let up = |r: Option<u32>| r.map(|r| r.saturating_mul(ss));
        Self {
            width: self.width.saturating_mul(ss),
            height: self.height.saturating_mul(ss),
            corner_radius_tl: up(self.corner_radius_tl),
            corner_radius_tr: up(self.corner_radius_tr),
            corner_radius_br: up(self.corner_radius_br),
            corner_radius_bl: up(self.corner_radius_bl),
            supersampling: ss,
            ..self.clone()
        }
    }

    /// Current supersampling factor as stored (clamped only in a scaled config).
    pub fn ss(&self) -> u32 {
        self.supersampling.max(1)
    }

    pub fn canvas(&self) -> BannerResult<Canvas> {
        Canvas::new(self.width, self.height)
    }

    /// Per-corner outer radii: explicit values, else `height / 6` when `rounded`.
    pub fn corner_radii(&self) -> CornerRadii {
        let default = if self.rounded { self.height / 6 } else { 0 };
        let pick = |r: Option<u32>| f64::from(r.unwrap_or(default));
        CornerRadii::new(
            pick(self.corner_radius_tl),
            pick(self.corner_radius_tr),
            pick(self.corner_radius_br),
            pick(self.corner_radius_bl),
        )
    }

    /// Border thickness in device pixels, zero when the border is off.
    pub fn border_px(&self) -> u32 {
        if self.border {
            self.border_width * self.ss()
        } else {
            0
        }
    }

    /// The area inside the border, and its radii.
    pub fn inner_box(&self) -> (Rect, CornerRadii) {
        let bw = f64::from(self.border_px());
        let w = f64::from(self.width);
        let h = f64::from(self.height);
        let rect = Rect::new(bw, bw, (w - bw).max(bw), (h - bw).max(bw));
        (rect, self.corner_radii().inset(bw))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
