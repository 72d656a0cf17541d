//! Color values as they appear in configuration, and the small color-math helpers the
//! generators share.
//!
//! Parsing never fails: malformed values resolve to a documented fallback so a typo in a
//! preset degrades the banner instead of aborting the render.

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// A color as written in configuration: a string (hex, named, `rgba(...)`) or a channel array.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Text(String),
    Channels(Vec<f64>),
}

impl ColorSpec {
    pub fn hex(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn rgba(c: Rgba8) -> Self {
        Self::Channels(vec![
            f64::from(c.r),
            f64::from(c.g),
            f64::from(c.b),
            f64::from(c.a),
        ])
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Text(s) if s.trim().eq_ignore_ascii_case("auto"))
    }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

const NAMED: &[(&str, [u8; 3])] = &[
    ("red", [255, 0, 0]),
    ("green", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("white", [255, 255, 255]),
    ("black", [0, 0, 0]),
    ("yellow", [255, 255, 0]),
    ("purple", [128, 0, 128]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("navy", [0, 0, 128]),
    ("teal", [0, 128, 128]),
    ("lime", [0, 255, 0]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("silver", [192, 192, 192]),
];

pub fn named_color(name: &str) -> Option<Rgba8> {
    let name = name.trim();
    NAMED
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, [r, g, b])| Rgba8::rgb(*r, *g, *b))
}

/// Hex digits without `#`. Returns rgb plus the embedded alpha for 8-digit forms.
fn parse_hex(s: &str) -> Option<([u8; 3], Option<u8>)> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return None;
    }

    fn byte(pair: &str) -> Option<u8> {
        u8::from_str_radix(pair, 16).ok()
    }

    match s.len() {
        3 => {
            let mut out = [0u8; 3];
            for (i, ch) in s.chars().enumerate() {
                let v = ch.to_digit(16)? as u8;
                out[i] = v * 16 + v;
            }
            Some((out, None))
        }
        6 => Some(([byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?], None)),
        8 => Some((
            [byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?],
            Some(byte(&s[6..8])?),
        )),
        _ => None,
    }
}

/// `rgba(r,g,b,a)` where `a <= 1` is a fraction and larger values are 0..255.
fn parse_rgba_fn(s: &str) -> Option<Rgba8> {
    let inner = s.trim().strip_prefix("rgba(")?.strip_suffix(')')?;
    let vals: Vec<f64> = inner
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    if vals.len() < 3 {
        return None;
    }
    let ch = |v: f64| v.clamp(0.0, 255.0) as u8;
    let a = match vals.get(3) {
        Some(&a) if a <= 1.0 => (a.max(0.0) * 255.0) as u8,
        Some(&a) => ch(a),
        None => 255,
    };
    Some(Rgba8::new(ch(vals[0]), ch(vals[1]), ch(vals[2]), a))
}

fn channels_to_rgb(v: &[f64]) -> Option<[u8; 3]> {
    if v.len() < 3 {
        return None;
    }
    let ch = |x: f64| x.clamp(0.0, 255.0) as u8;
    Some([ch(v[0]), ch(v[1]), ch(v[2])])
}

/// Resolve a color and apply `opacity`. 8-digit hex and `rgba(...)` keep their own alpha.
/// Anything unparseable becomes white at `opacity`.
pub fn parse_color(spec: &ColorSpec, opacity: u8) -> Rgba8 {
    let white = Rgba8::WHITE.with_alpha(opacity);
    match spec {
        ColorSpec::Text(s) => {
            if let Some(c) = named_color(s) {
                return c.with_alpha(opacity);
            }
            if s.trim_start().starts_with("rgba(") {
                return parse_rgba_fn(s).unwrap_or(white);
            }
            match parse_hex(s) {
                Some(([r, g, b], Some(a))) => Rgba8::new(r, g, b, a),
                Some(([r, g, b], None)) => Rgba8::new(r, g, b, opacity),
                None => white,
            }
        }
        ColorSpec::Channels(v) => match channels_to_rgb(v) {
            Some([r, g, b]) => Rgba8::new(r, g, b, opacity),
            None => white,
        },
    }
}

/// Like [`parse_color`], but a four-channel array also keeps its own alpha.
pub fn parse_color_keep_alpha(spec: &ColorSpec, opacity: u8) -> Rgba8 {
    match spec {
        ColorSpec::Channels(v) if v.len() >= 4 => {
            parse_rgba(spec).unwrap_or(Rgba8::WHITE.with_alpha(opacity))
        }
        _ => parse_color(spec, opacity),
    }
}

/// Opaque RGB view of a color; the embedded alpha is dropped. Malformed values become black.
pub fn parse_rgb(spec: &ColorSpec) -> Rgba8 {
    match spec {
        ColorSpec::Text(s) => {
            if let Some(c) = named_color(s) {
                return c;
            }
            if let Some(c) = parse_rgba_fn(s) {
                return c.with_alpha(255);
            }
            parse_hex(s)
                .map(|([r, g, b], _)| Rgba8::rgb(r, g, b))
                .unwrap_or(Rgba8::BLACK)
        }
        ColorSpec::Channels(v) => channels_to_rgb(v)
            .map(|[r, g, b]| Rgba8::rgb(r, g, b))
            .unwrap_or(Rgba8::BLACK),
    }
}

/// Color with an explicit alpha, as used by text boxes. `auto` yields `None`.
/// Plain 6-digit hex gets alpha 180; anything unparseable becomes `(0,0,0,90)`.
pub fn parse_rgba(spec: &ColorSpec) -> Option<Rgba8> {
    let fallback = Rgba8::new(0, 0, 0, 90);
    match spec {
        ColorSpec::Text(_) if spec.is_auto() => None,
        ColorSpec::Text(s) => {
            if let Some(c) = parse_rgba_fn(s) {
                return Some(c);
            }
            if let Some(c) = named_color(s) {
                return Some(c.with_alpha(180));
            }
            Some(match parse_hex(s) {
                Some(([r, g, b], Some(a))) => Rgba8::new(r, g, b, a),
                Some(([r, g, b], None)) => Rgba8::new(r, g, b, 180),
                None => fallback,
            })
        }
        ColorSpec::Channels(v) => {
            let [r, g, b] = channels_to_rgb(v)?;
            let a = match v.get(3) {
                Some(&a) if a <= 1.0 => (a.max(0.0) * 255.0) as u8,
                Some(&a) => a.clamp(0.0, 255.0) as u8,
                None => 255,
            };
            Some(Rgba8::new(r, g, b, a))
        }
    }
}

pub fn to_hex(c: Rgba8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// Normalize any color spelling to `#rrggbb`.
pub fn to_hex_spec(spec: &ColorSpec) -> ColorSpec {
    ColorSpec::Text(to_hex(parse_rgb(spec)))
}

/// WCAG relative luminance.
pub fn luminance(c: Rgba8) -> f64 {
    fn channel(c: u8) -> f64 {
        let c = f64::from(c) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(c.r) + 0.7152 * channel(c.g) + 0.0722 * channel(c.b)
}

pub fn contrast_ratio(a: Rgba8, b: Rgba8) -> f64 {
    let la = luminance(a);
    let lb = luminance(b);
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Perceived brightness in `[0,1]` with the Rec.601 weights.
pub fn perceived_luminance(c: Rgba8) -> f64 {
    (0.299 * f64::from(c.r) + 0.587 * f64::from(c.g) + 0.114 * f64::from(c.b)) / 255.0
}

/// Black or white, whichever contrasts more with `c`.
pub fn outline_color_for(c: Rgba8) -> Rgba8 {
    if contrast_ratio(c, Rgba8::BLACK) > contrast_ratio(c, Rgba8::WHITE) {
        Rgba8::BLACK
    } else {
        Rgba8::WHITE
    }
}

pub fn rgb_distance(a: Rgba8, b: Rgba8) -> f64 {
    let d = |x: u8, y: u8| f64::from(x) - f64::from(y);
    (d(a.r, b.r).powi(2) + d(a.g, b.g).powi(2) + d(a.b, b.b).powi(2)).sqrt()
}

/// Shift every channel by `delta`, clamped to `[0,255]`. Alpha is kept.
pub fn adjust(c: Rgba8, delta: i32) -> Rgba8 {
    let ch = |v: u8| (i32::from(v) + delta).clamp(0, 255) as u8;
    Rgba8::new(ch(c.r), ch(c.g), ch(c.b), c.a)
}

/// Channel-wise `int(s*(1-t) + e*t)`, opaque.
pub fn interpolate(start: Rgba8, end: Rgba8, t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let ch = |s: u8, e: u8| (f64::from(s) * (1.0 - t) + f64::from(e) * t) as u8;
    Rgba8::rgb(ch(start.r, end.r), ch(start.g, end.g), ch(start.b, end.b))
}

/// Integer channel average of two colors.
pub fn average(a: Rgba8, b: Rgba8) -> Rgba8 {
    let ch = |x: u8, y: u8| ((u16::from(x) + u16::from(y)) / 2) as u8;
    Rgba8::rgb(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b))
}

#[cfg(test)]
#[path = "../tests/unit/color/color.rs"]
mod tests;
