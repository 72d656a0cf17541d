use serde_json::{Value, json};

use crate::config::compact::{self, JsonMap};
use crate::config::model::BannerConfig;
use crate::config::presets::{PresetLibrary, merge_json};
use crate::foundation::error::{BannerError, BannerResult};
use crate::{patterns, shapes, textures};

/// User-facing adjustments layered over a preset and an optional config document.
///
/// Precedence, lowest first: preset, `base` document, compact strings, plain fields, modifiers.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub preset: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub icon: Option<String>,
    pub output: Option<String>,

    pub bg: Option<String>,
    pub text: Option<String>,
    pub pattern: Option<String>,
    pub shape: Option<String>,
    pub texture: Option<String>,
    pub effect: Option<String>,
    pub overlay: Option<String>,

    pub accent: Option<String>,
    pub intensity: Option<String>,
    pub contrast: Option<String>,
    pub size: Option<String>,
    pub rounded: Option<u32>,
    pub padding: Option<u32>,

    pub supersampling: Option<u32>,
    pub test_mode: bool,
}

impl Overrides {
    /// Fields produced by the compact strings alone.
    pub fn compact_json(&self) -> JsonMap {
        let mut out = JsonMap::new();
        if let Some(v) = &self.bg {
            merge_json(&mut out, compact::parse_bg(v));
        }
        if let Some(v) = &self.text {
            merge_json(&mut out, compact::parse_text(v));
        }
        if let Some(v) = &self.pattern {
            merge_json(&mut out, compact::parse_pattern(v, &patterns::names()));
        }
        if let Some(v) = &self.shape {
            merge_json(
                &mut out,
                compact::parse_shape(v, &shapes::names(), self.accent.as_deref()),
            );
        }
        if let Some(v) = &self.texture {
            merge_json(&mut out, compact::parse_texture(v, &textures::names()));
        }
        if let Some(v) = &self.effect {
            merge_json(&mut out, compact::parse_effect(v));
        }
        if let Some(v) = &self.overlay {
            merge_json(&mut out, compact::parse_overlay(v));
        }
        out
    }

    /// Merge everything into one JSON object.
    pub fn resolve_json(&self, presets: &PresetLibrary, base: Option<JsonMap>) -> BannerResult<JsonMap> {
        let mut config = JsonMap::new();
        if let Some(name) = &self.preset {
            let preset = presets
                .get(name)
                .ok_or_else(|| BannerError::validation(format!("unknown preset '{name}'")))?;
            merge_json(&mut config, preset.clone());
            config.insert("preset_name".into(), json!(name));
        }
        if let Some(base) = base {
            merge_json(&mut config, base);
        }
        merge_json(&mut config, self.compact_json());

        for (key, value) in [
            ("title", &self.title),
            ("subtitle", &self.subtitle),
            ("icon_path", &self.icon),
            ("output", &self.output),
        ] {
            if let Some(v) = value {
                config.insert(key.into(), json!(v));
            }
        }
        if let Some(ss) = self.supersampling {
            config.insert("supersampling".into(), json!(ss));
        }
        if self.test_mode {
            config.insert("test_mode".into(), json!(true));
        }

        if let Some(accent) = &self.accent {
            compact::apply_accent(&mut config, accent);
        }
        if let Some(level) = &self.intensity {
            compact::apply_intensity(&mut config, level);
        }
        if let Some(level) = &self.contrast {
            compact::apply_contrast(&mut config, level);
        }
        if let Some(size) = &self.size {
            compact::apply_size(&mut config, size);
        }
        if let Some(r) = self.rounded {
            compact::apply_rounded(&mut config, r);
        }
        if let Some(p) = self.padding {
            compact::apply_padding(&mut config, p);
        }
        Ok(config)
    }

    /// Range checks are left to the render, which reports them against the canvas stage.
    pub fn resolve(&self, presets: &PresetLibrary, base: Option<JsonMap>) -> BannerResult<BannerConfig> {
        let json = self.resolve_json(presets, base)?;
        BannerConfig::from_json_value(Value::Object(json))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/overrides.rs"]
mod tests;
