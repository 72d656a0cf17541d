use image::RgbaImage;

use crate::foundation::core::{Canvas, Rgba8, Rgba8Premul};
use crate::foundation::error::{BannerError, BannerResult};
use crate::raster::composite;

/// Premultiplied RGBA8 pixel buffer, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Layer {
    /// Fully transparent layer.
    pub fn new(canvas: Canvas) -> BannerResult<Self> {
        let len = canvas.rgba_len()?;
        Ok(Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; len],
        })
    }

    pub fn filled(canvas: Canvas, color: Rgba8) -> BannerResult<Self> {
        let mut layer = Self::new(canvas)?;
        let px = color.premul().to_array();
        for d in layer.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
        Ok(layer)
    }

    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> BannerResult<Self> {
        let expected = Canvas::new(width, height)?.rgba_len()?;
        if data.len() != expected {
            return Err(BannerError::render(format!(
                "layer byte length mismatch: expected {expected}, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build from straight-alpha RGBA8 bytes.
    pub fn from_straight(width: u32, height: u32, mut data: Vec<u8>) -> BannerResult<Self> {
        premultiply_in_place(&mut data);
        Self::from_premul(width, height, data)
    }

    pub fn from_image(img: &RgbaImage) -> BannerResult<Self> {
        Self::from_straight(img.width(), img.height(), img.as_raw().clone())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba8Premul {
        let i = self.offset(x, y);
        Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        }
    }

    /// Straight-alpha view of one pixel.
    pub fn rgba(&self, x: u32, y: u32) -> Rgba8 {
        self.pixel(x, y).to_straight()
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: Rgba8Premul) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px.to_array());
    }

    /// Source-over `src` onto `self`. Both layers must share dimensions.
    pub fn over(&mut self, src: &Layer) -> BannerResult<()> {
        self.check_same_size(src)?;
        composite::blend_over(&mut self.data, &src.data)
    }

    /// Source-over a smaller layer with its top-left corner at `(x, y)`, clipping to bounds.
    pub fn over_at(&mut self, src: &Layer, x: i64, y: i64) {
        let (dw, dh) = (i64::from(self.width), i64::from(self.height));
        for sy in 0..src.height {
            let ty = y + i64::from(sy);
            if !(0..dh).contains(&ty) {
                continue;
            }
            for sx in 0..src.width {
                let tx = x + i64::from(sx);
                if !(0..dw).contains(&tx) {
                    continue;
                }
                let (tx, ty) = (tx as u32, ty as u32);
                let out = composite::source_over(self.pixel(tx, ty), src.pixel(sx, sy));
                self.set_pixel(tx, ty, out);
            }
        }
    }

    /// `self = mix(self, other, t)`, used to fade a filtered copy back over its source.
    pub fn mix(&mut self, other: &Layer, t: f32) -> BannerResult<()> {
        self.check_same_size(other)?;
        composite::blend_mix(&mut self.data, &other.data, t)
    }

    pub fn apply_mask(&mut self, mask: &Mask) -> BannerResult<()> {
        if mask.width != self.width || mask.height != self.height {
            return Err(BannerError::render("mask size does not match layer"));
        }
        composite::apply_coverage(&mut self.data, &mask.data)
    }

    /// Copy of the pixels with straight alpha.
    pub fn to_straight(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_in_place(&mut out);
        out
    }

    /// Replace the pixels from a straight-alpha buffer of the same size.
    pub fn set_straight(&mut self, mut straight: Vec<u8>) -> BannerResult<()> {
        if straight.len() != self.data.len() {
            return Err(BannerError::render("straight buffer size does not match layer"));
        }
        premultiply_in_place(&mut straight);
        self.data = straight;
        Ok(())
    }

    /// Run `f` over every pixel in straight alpha. `f` receives `(x, y, [r,g,b,a])`.
    pub fn map_straight(&mut self, mut f: impl FnMut(u32, u32, [u8; 4]) -> [u8; 4]) {
        let w = self.width as usize;
        for (i, px) in self.data.chunks_exact_mut(4).enumerate() {
            let s = Rgba8Premul {
                r: px[0],
                g: px[1],
                b: px[2],
                a: px[3],
            }
            .to_straight();
            let [r, g, b, a] = f((i % w) as u32, (i / w) as u32, [s.r, s.g, s.b, s.a]);
            px.copy_from_slice(&Rgba8Premul::from_straight_rgba(r, g, b, a).to_array());
        }
    }

    /// Lanczos3 resample of the premultiplied pixels.
    pub fn resized(&self, width: u32, height: u32) -> BannerResult<Layer> {
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }
        let src = RgbaImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| BannerError::render("layer buffer does not fit its dimensions"))?;
        let out =
            image::imageops::resize(&src, width, height, image::imageops::FilterType::Lanczos3);
        let mut data = out.into_raw();
        // Lanczos ringing can push color above alpha.
        for px in data.chunks_exact_mut(4) {
            let a = px[3];
            for c in &mut px[..3] {
                *c = (*c).min(a);
            }
        }
        Layer::from_premul(width, height, data)
    }

    /// Straight-alpha image for encoding.
    pub fn into_image(self) -> BannerResult<RgbaImage> {
        let (w, h) = (self.width, self.height);
        let mut data = self.data;
        unpremultiply_in_place(&mut data);
        RgbaImage::from_raw(w, h, data)
            .ok_or_else(|| BannerError::render("layer buffer does not fit its dimensions"))
    }

    fn check_same_size(&self, other: &Layer) -> BannerResult<()> {
        if self.width != other.width || self.height != other.height {
            return Err(BannerError::render(format!(
                "layer size mismatch: {}x{} vs {}x{}",
                self.width, self.height, other.width, other.height
            )));
        }
        Ok(())
    }
}

pub fn premultiply_in_place(rgba8: &mut [u8]) {
    for px in rgba8.chunks_exact_mut(4) {
        let p = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
        px.copy_from_slice(&p.to_array());
    }
}

pub fn unpremultiply_in_place(rgba8: &mut [u8]) {
    for px in rgba8.chunks_exact_mut(4) {
        let s = Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
        .to_straight();
        px.copy_from_slice(&[s.r, s.g, s.b, s.a]);
    }
}

/// Single-channel 8-bit coverage buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    pub fn empty(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.width as usize * canvas.height as usize],
        }
    }

    pub fn full(canvas: Canvas) -> Self {
        Self {
            data: vec![255; canvas.width as usize * canvas.height as usize],
            ..Self::empty(canvas)
        }
    }

    /// Coverage taken from the alpha channel of a layer.
    pub fn from_alpha(layer: &Layer) -> Self {
        Self {
            width: layer.width,
            height: layer.height,
            data: layer.data.chunks_exact(4).map(|px| px[3]).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_full(&self) -> bool {
        self.data.iter().all(|&v| v == 255)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/layer.rs"]
mod tests;
