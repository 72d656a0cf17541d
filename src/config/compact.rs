//! Colon-separated shorthand parameters (`"blue:purple:diagonal"`) and the global modifiers
//! layered on top of a preset.
//!
//! Everything here works on JSON objects so that "was this key set?" stays observable; the
//! result deserializes into [`crate::config::BannerConfig`].

use serde_json::{Map, Value, json};

use crate::color::{ColorSpec, parse_rgb, to_hex};
use crate::geometry::gradient::GradientKind;

pub type JsonMap = Map<String, Value>;

const WAVE_PATTERNS: &[&str] = &["sine", "wave", "zigzag"];

fn hex_of(s: &str) -> String {
    to_hex(parse_rgb(&ColorSpec::from(s.trim())))
}

fn split(value: &str) -> Vec<&str> {
    value.split(':').map(str::trim).collect()
}

/// First non-empty entry of a comma list.
fn first_entry(value: &str) -> Option<&str> {
    value.split(',').map(str::trim).find(|s| !s.is_empty())
}

/// `start:end:type`. The end color defaults to the start; unknown types become vertical.
pub fn parse_bg(value: &str) -> JsonMap {
    let mut out = JsonMap::new();
    let Some(value) = first_entry(value) else {
        return out;
    };
    let parts = split(value);
    let start = hex_of(parts[0]);
    let end = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .map(|s| hex_of(s))
        .unwrap_or_else(|| start.clone());
    let kind = parts
        .get(2)
        .map(|s| GradientKind::from_name(s))
        .unwrap_or_default();
    out.insert("bg_color_start".into(), json!(start));
    out.insert("bg_color_end".into(), json!(end));
    out.insert("gradient_type".into(), json!(kind.name()));
    out
}

/// `color:shadow`, shadow one of `true`, `dark`, `medium`, `soft`.
pub fn parse_text(value: &str) -> JsonMap {
    let mut out = JsonMap::new();
    let Some(value) = first_entry(value) else {
        return out;
    };
    let parts = split(value);
    if !parts[0].is_empty() {
        let color = if parts[0].eq_ignore_ascii_case("auto") {
            "auto".to_owned()
        } else {
            hex_of(parts[0])
        };
        out.insert("text_color".into(), json!(color));
    }
    if let Some(shadow) = parts.get(1) {
        let opacity = match shadow.to_ascii_lowercase().as_str() {
            "true" => Some(None),
            "dark" => Some(Some(150)),
            "medium" => Some(Some(100)),
            "soft" => Some(Some(60)),
            _ => None,
        };
        out.insert("shadow".into(), json!(opacity.is_some()));
        if let Some(Some(o)) = opacity {
            out.insert("shadow_opacity".into(), json!(o));
        }
    }
    out
}

/// `type:color:opacity:freq:amp`. Frequency and amplitude only apply to wave-like patterns.
pub fn parse_pattern(value: &str, known: &[&str]) -> JsonMap {
    let mut out = JsonMap::new();
    let Some(value) = first_entry(value) else {
        return out;
    };
    let parts = split(value);
    let kind = parts[0].to_ascii_lowercase();
    let kind = if known.contains(&kind.as_str()) {
        kind
    } else {
        "none".to_owned()
    };

    let color = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .map(|s| hex_of(s))
        .unwrap_or_else(|| "#000000".to_owned());
    out.insert("pattern_colors".into(), json!([color]));

    let opacity = parts
        .get(2)
        .and_then(|s| s.parse::<i64>().ok())
        .map_or(255, |o| o.clamp(0, 255));
    out.insert("pattern_opacity".into(), json!(opacity));

    if WAVE_PATTERNS.contains(&kind.as_str()) {
        if let Some(freq) = parts.get(3).and_then(|s| s.parse::<f64>().ok()) {
            out.insert("pattern_freq".into(), json!(freq.clamp(0.5, 10.0)));
        }
        if let Some(amp) = parts.get(4).and_then(|s| s.parse::<f64>().ok()) {
            out.insert("pattern_amp".into(), json!(amp.clamp(5.0, 50.0)));
        }
    }
    out.insert("pattern".into(), json!(kind));
    out
}

/// `type:color:opacity`. The color `accent` is resolved against `accent` when given.
pub fn parse_shape(value: &str, known: &[&str], accent: Option<&str>) -> JsonMap {
    let mut out = JsonMap::new();
    let Some(value) = first_entry(value) else {
        return out;
    };
    let parts = split(value);
    let kind = parts[0].to_ascii_lowercase();
    let kind = if known.contains(&kind.as_str()) {
        kind
    } else {
        "none".to_owned()
    };
    out.insert("shape".into(), json!(kind));

    let Some(color) = parts.get(1).filter(|s| !s.is_empty()) else {
        return out;
    };
    let color = if color.eq_ignore_ascii_case("accent") {
        match accent {
            Some(a) => a,
            None => return out,
        }
    } else {
        color
    };
    let opacity = parts
        .get(2)
        .and_then(|s| s.parse::<i64>().ok())
        .map_or(90, |o| o.clamp(0, 255));
    let rgb = parse_rgb(&ColorSpec::from(color));
    out.insert(
        "shape_color".into(),
        json!([rgb.r, rgb.g, rgb.b, opacity]),
    );
    out
}

/// `type:opacity`.
pub fn parse_texture(value: &str, known: &[&str]) -> JsonMap {
    let mut out = JsonMap::new();
    let Some(value) = first_entry(value) else {
        return out;
    };
    let parts = split(value);
    let kind = parts[0].to_ascii_lowercase();
    let kind = if known.contains(&kind.as_str()) {
        kind
    } else {
        "none".to_owned()
    };
    out.insert("texture".into(), json!(kind));
    if let Some(opacity) = parts.get(1) {
        let opacity = opacity.parse::<i64>().map_or(255, |o| o.clamp(0, 255));
        out.insert("texture_opacity".into(), json!(opacity));
    }
    out
}

/// `type:intensity`, intensity `soft`, `medium` or `strong`. The effect chain keeps every
/// comma-separated name; the intensity is read from the first entry.
pub fn parse_effect(value: &str) -> JsonMap {
    let mut out = JsonMap::new();
    let names: Vec<String> = value
        .split(',')
        .map(|e| split(e)[0].to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    if names.is_empty() {
        return out;
    }
    out.insert("effect".into(), json!(names.join(",")));
    if let Some(intensity) = first_entry(value).and_then(|e| split(e).get(1).copied()) {
        let scale = match intensity.to_ascii_lowercase().as_str() {
            "soft" => 0.7,
            "strong" => 1.5,
            _ => 1.0,
        };
        out.insert("effect_scale".into(), json!(scale));
    }
    out
}

/// Overlay name, passed through lowercased.
pub fn parse_overlay(value: &str) -> JsonMap {
    let mut out = JsonMap::new();
    if let Some(v) = first_entry(value) {
        out.insert("overlay".into(), json!(split(v)[0].to_ascii_lowercase()));
    }
    out
}

/// Apply `accent`: pattern colors default to it when a pattern is set without colors.
pub fn apply_accent(config: &mut JsonMap, accent: &str) {
    let has_pattern = config
        .get("pattern")
        .and_then(Value::as_str)
        .is_some_and(|p| p != "none");
    if has_pattern && !config.contains_key("pattern_colors") {
        config.insert("pattern_colors".into(), json!([hex_of(accent)]));
    }
}

/// Scale the opacities present in `config` by the `low`/`medium`/`high` multiplier.
pub fn apply_intensity(config: &mut JsonMap, level: &str) {
    let mult = match level.to_ascii_lowercase().as_str() {
        "low" => 0.7,
        "high" => 1.3,
        _ => 1.0,
    };
    let scale = |v: f64| (v * mult).clamp(0.0, 255.0) as u64;
    for key in ["pattern_opacity", "texture_opacity", "shadow_opacity"] {
        if let Some(v) = config.get(key).and_then(Value::as_f64) {
            config.insert(key.into(), json!(scale(v)));
        }
    }
    if let Some(Value::Array(c)) = config.get_mut("shape_color")
        && c.len() >= 4
        && let Some(a) = c[3].as_f64()
    {
        c[3] = json!(scale(a));
    }
}

/// Set `min_contrast` from `low` (3), `medium` (4.5) or `high` (7).
pub fn apply_contrast(config: &mut JsonMap, level: &str) {
    let ratio = match level.to_ascii_lowercase().as_str() {
        "low" => 3.0,
        "medium" => 4.5,
        "high" => 7.0,
        _ => return,
    };
    config.insert("min_contrast".into(), json!(ratio));
}

/// Scale padding and icon size by `small`/`medium`/`large` when they are not already set.
pub fn apply_size(config: &mut JsonMap, size: &str) {
    let mult = match size.to_ascii_lowercase().as_str() {
        "small" => 0.8,
        "medium" => 1.0,
        "large" => 1.2,
        _ => return,
    };
    if !config.contains_key("padding") {
        config.insert("padding".into(), json!((32.0 * mult) as u64));
    }
    if !config.contains_key("icon_size") {
        config.insert("icon_size".into(), json!((120.0 * mult) as u64));
    }
}

pub fn apply_rounded(config: &mut JsonMap, radius: u32) {
    config.insert("rounded".into(), json!(true));
    for key in [
        "corner_radius_tl",
        "corner_radius_tr",
        "corner_radius_br",
        "corner_radius_bl",
    ] {
        config.insert(key.into(), json!(radius));
    }
}

pub fn apply_padding(config: &mut JsonMap, padding: u32) {
    config.insert("padding".into(), json!(padding.clamp(10, 100)));
}

#[cfg(test)]
#[path = "../../tests/unit/config/compact.rs"]
mod tests;
