//! Title and subtitle: auto-sizing, contrast-aware color, outline, shadow and the text box.

use std::borrow::Cow;

use crate::color::{
    contrast_ratio, outline_color_for, parse_color, parse_rgba, perceived_luminance,
};
use crate::config::{BannerConfig, IconPosition};
use crate::foundation::core::{CornerRadii, Rect, Rgba8};
use crate::foundation::error::{BannerError, BannerResult};
use crate::geometry::draw_asym_rounded_rect;
use crate::layers::fonts::{FontBytes, FontProvider};
use crate::layers::icon::icon_size;
use crate::raster::{Layer, Painter, PlacedGlyph};

/// Titles longer than this keep shrinking down to the minimum size.
pub const MAX_TITLE_CHARS: usize = 22;

const DARK_TEXT: Rgba8 = Rgba8::rgb(32, 32, 32);

/// Parley contexts shared by every line of one render.
pub struct TextEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A font registered with a [`TextEngine`].
pub struct FontFace {
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// One shaped line, glyph positions relative to the top-left of the line box.
#[derive(Clone, Debug, PartialEq)]
pub struct ShapedLine {
    pub glyphs: Vec<PlacedGlyph>,
    pub width: f64,
    pub size: f32,
}

impl ShapedLine {
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Line box height; the font size, matching how the block is stacked.
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            f64::from(self.size)
        }
    }
}

impl TextEngine {
    pub fn new() -> Self {
        Self {
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    pub fn register(&mut self, font: &FontBytes) -> BannerResult<FontFace> {
        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(font.data.as_ref().clone()),
            None,
        );
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| BannerError::validation("no font families registered from font bytes"))?;
        let family = self
            .font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| BannerError::validation("registered font family has no name"))?
            .to_string();
        Ok(FontFace {
            family,
            data: font.to_vello(),
        })
    }

    /// Shape `text` on a single line at `size` pixels.
    pub fn shape(&mut self, face: &FontFace, text: &str, size: f32) -> BannerResult<ShapedLine> {
        if !size.is_finite() || size <= 0.0 {
            return Err(BannerError::validation("font size must be finite and > 0"));
        }
        if text.is_empty() {
            return Ok(ShapedLine {
                glyphs: Vec::new(),
                width: 0.0,
                size,
            });
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(face.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size));
        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                glyphs.extend(run.positioned_glyphs().map(|g| PlacedGlyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }
        Ok(ShapedLine {
            glyphs,
            width: f64::from(layout.width()),
            size,
        })
    }
}

/// Final title and subtitle sizes in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextSizes {
    pub title: f32,
    pub subtitle: f32,
}

fn subtitle_size_for(big: &BannerConfig, title: u32) -> u32 {
    match big.subtitle_font_size {
        Some(size) => size * big.ss(),
        None => (10 * big.ss()).max((f64::from(title) * 0.45) as u32),
    }
}

fn block_gap(big: &BannerConfig) -> u32 {
    (f64::from(big.height) * 0.18) as u32
}

/// Pick font sizes. Explicit sizes win; otherwise start at a quarter of the height and
/// step down until the title fits beside the icon and the block fits vertically.
pub fn fit_sizes(
    big: &BannerConfig,
    mut title_width: impl FnMut(f32) -> BannerResult<f64>,
) -> BannerResult<TextSizes> {
    let ss = big.ss();
    if let Some(size) = big.title_font_size {
        let title = (size * ss).max(1);
        return Ok(TextSizes {
            title: title as f32,
            subtitle: subtitle_size_for(big, title).max(1) as f32,
        });
    }

    let pad = f64::from(big.padding * ss);
    let max_title_w = f64::from(big.width) - (f64::from(icon_size(big)) + 3.0 * pad);
    let max_block_h = (f64::from(big.height) * 0.8) as u32;
    let min_size = 10 * ss;
    let fits_chars = big.title.chars().count() <= MAX_TITLE_CHARS;

    let mut size = ((f64::from(big.height) * 0.25) as u32).max(1);
    let mut chosen = size;
    while size > min_size {
        chosen = size;
        let sub = subtitle_size_for(big, size);
        let block_h = size + block_gap(big) + sub;
        if title_width(size as f32)? < max_title_w && block_h < max_block_h && fits_chars {
            break;
        }
        size -= 2 * ss;
    }
    Ok(TextSizes {
        title: chosen as f32,
        subtitle: subtitle_size_for(big, chosen).max(1) as f32,
    })
}

/// Where the text block lands on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextPlacement {
    pub x: f64,
    pub title_y: f64,
    pub subtitle_y: f64,
    /// Bottom edge of the last drawn line.
    pub bottom: f64,
}

/// Stack title and subtitle, centred against the icon block on the side opposite the icon.
pub fn place(big: &BannerConfig, title: &ShapedLine, subtitle: &ShapedLine) -> TextPlacement {
    let pad = f64::from(big.padding * big.ss());
    let icon = f64::from(icon_size(big));
    let (title_h, sub_h) = (title.height(), subtitle.height());
    let gap = if title.is_empty() || subtitle.is_empty() {
        0.0
    } else {
        f64::from(block_gap(big))
    };
    let text_h = title_h + gap + sub_h;
    let block_h = text_h.max(icon);
    let block_y = ((f64::from(big.height) - block_h) / 2.0).floor();

    let x = match big.icon_position {
        IconPosition::Left => pad + icon + pad,
        IconPosition::Right => pad,
    };
    let title_y = block_y + ((block_h - text_h) / 2.0).floor();
    let subtitle_y = title_y + title_h + gap;
    TextPlacement {
        x,
        title_y,
        subtitle_y,
        bottom: subtitle_y + sub_h,
    }
}

/// Dark gray on light backgrounds, white on dark ones, switching to whichever contrasts
/// more when the first guess misses `min_contrast`.
pub fn auto_text_color(against: Rgba8, min_contrast: f64) -> Rgba8 {
    let guess = if perceived_luminance(against) > 0.45 {
        DARK_TEXT
    } else {
        Rgba8::WHITE
    };
    if contrast_ratio(guess, against) >= min_contrast {
        return guess;
    }
    if contrast_ratio(Rgba8::WHITE, against) > contrast_ratio(DARK_TEXT, against) {
        Rgba8::WHITE
    } else {
        DARK_TEXT
    }
}

/// Translucent box opposite to the text lightness; more opaque when contrast is weak.
pub fn auto_box_color(text: Rgba8, avg_bg: Rgba8) -> Rgba8 {
    let contrast = contrast_ratio(text, avg_bg);
    let alpha = if contrast < 5.0 {
        90
    } else if contrast < 7.0 {
        64
    } else {
        38
    };
    if perceived_luminance(text) > 0.5 {
        Rgba8::new(0, 0, 0, alpha)
    } else {
        Rgba8::new(255, 255, 255, alpha)
    }
}

/// Text fill color and, when the text box is on, its fill.
pub fn resolve_colors(big: &BannerConfig, avg_bg: Rgba8) -> (Rgba8, Option<Rgba8>) {
    let auto_text = big.text_color.is_auto();
    let explicit_text = || parse_color(&big.text_color, 255);
    if !big.text_box {
        let text = if auto_text {
            auto_text_color(avg_bg, big.min_contrast)
        } else {
            explicit_text()
        };
        return (text, None);
    }

    match parse_rgba(&big.text_box_color) {
        None => {
            let text = if auto_text {
                auto_text_color(avg_bg, big.min_contrast)
            } else {
                explicit_text()
            };
            (text, Some(auto_box_color(text, avg_bg)))
        }
        Some(box_color) => {
            let text = if auto_text {
                auto_text_color(box_color.with_alpha(255), big.min_contrast)
            } else {
                explicit_text()
            };
            (text, Some(box_color))
        }
    }
}

fn draw_line(
    painter: &mut Painter,
    face: &FontFace,
    line: &ShapedLine,
    origin: (f64, f64),
    style: LineStyle,
) {
    let at = |dx: f64, dy: f64| -> Vec<PlacedGlyph> {
        line.glyphs
            .iter()
            .map(|g| PlacedGlyph {
                id: g.id,
                x: g.x + (origin.0 + dx) as f32,
                y: g.y + (origin.1 + dy) as f32,
            })
            .collect()
    };

    if let Some((offset, color)) = style.shadow {
        painter.fill_glyphs(&face.data, line.size, &at(offset, offset), color);
    }
    let o = style.outline_offset;
    for (dx, dy) in [
        (-o, -o),
        (-o, 0.0),
        (-o, o),
        (0.0, -o),
        (0.0, o),
        (o, -o),
        (o, 0.0),
        (o, o),
    ] {
        painter.fill_glyphs(&face.data, line.size, &at(dx, dy), style.outline);
    }
    painter.fill_glyphs(&face.data, line.size, &at(0.0, 0.0), style.fill);
}

#[derive(Clone, Copy)]
struct LineStyle {
    fill: Rgba8,
    outline: Rgba8,
    outline_offset: f64,
    shadow: Option<(f64, Rgba8)>,
}

/// Draw the text block. Unresolvable fonts fall back to the built-in face.
pub fn draw_text(
    mut layer: Layer,
    big: &BannerConfig,
    fonts: &dyn FontProvider,
    avg_bg: Rgba8,
) -> BannerResult<Layer> {
    if big.title.is_empty() && big.subtitle.is_empty() {
        return Ok(layer);
    }
    let title_font = fonts.load_or_fallback(&big.title_font);
    let subtitle_font = fonts.load_or_fallback(&big.subtitle_font);

    let mut engine = TextEngine::new();
    let title_face = engine.register(&title_font)?;
    let subtitle_face = engine.register(&subtitle_font)?;

    let sizes = fit_sizes(big, |size| {
        Ok(engine.shape(&title_face, &big.title, size)?.width)
    })?;
    let title = engine.shape(&title_face, &big.title, sizes.title)?;
    let subtitle = engine.shape(&subtitle_face, &big.subtitle, sizes.subtitle)?;
    let at = place(big, &title, &subtitle);
    tracing::debug!(title = sizes.title, subtitle = sizes.subtitle, "text sizes");

    let ss = f64::from(big.ss());
    let (fill, box_color) = resolve_colors(big, avg_bg);
    if let Some(box_color) = box_color {
        let pad = f64::from(big.text_box_padding) * ss;
        let rect = Rect::new(
            at.x - pad,
            at.title_y - pad,
            at.x + title.width.max(subtitle.width) + pad,
            at.bottom + pad,
        );
        let radius = f64::from(big.text_box_radius) * ss;
        draw_asym_rounded_rect(
            &mut layer,
            rect,
            CornerRadii::uniform(radius).clamped_to(rect),
            Some(box_color),
            None,
            0.0,
        )?;
    }

    let outline = outline_color_for(fill);
    let shadow = Rgba8::new(0, 0, 0, big.shadow_opacity);
    let mut painter = Painter::new(layer.canvas())?;
    draw_line(
        &mut painter,
        &title_face,
        &title,
        (at.x, at.title_y),
        LineStyle {
            fill,
            outline,
            outline_offset: 2.0 * ss,
            shadow: big.shadow.then_some((4.0 * ss, shadow)),
        },
    );
    draw_line(
        &mut painter,
        &subtitle_face,
        &subtitle,
        (at.x, at.subtitle_y),
        LineStyle {
            fill,
            outline,
            outline_offset: ss,
            shadow: big.shadow.then_some((2.0 * ss, shadow)),
        },
    );
    layer.over(&painter.finish()?)?;
    Ok(layer)
}

#[cfg(test)]
#[path = "../../tests/unit/layers/text.rs"]
mod tests;
