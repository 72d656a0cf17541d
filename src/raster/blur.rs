//! Gaussian softening. Channels are filtered independently, so a premultiplied layer blurs
//! without dark fringes where its coverage falls off.

use image::RgbaImage;
use image::imageops::{self, GaussianBlurParameters};

use crate::foundation::error::{BannerError, BannerResult};
use crate::raster::layer::Layer;

/// Below this the kernel collapses to the centre tap.
const MIN_SIGMA: f32 = 0.1;

/// Blur four interleaved channels of a `width * height` buffer. Edges repeat the border pixel.
///
/// Used directly for light buffers that are summed rather than composited; everything else
/// goes through [`Layer::blurred`].
pub fn blur_channels(data: &[u8], width: u32, height: u32, sigma: f32) -> BannerResult<Vec<u8>> {
    let expected = u64::from(width) * u64::from(height) * 4;
    if data.len() as u64 != expected {
        return Err(BannerError::render(format!(
            "blur buffer holds {} bytes, {width}x{height} needs {expected}",
            data.len()
        )));
    }
    if !sigma.is_finite() || sigma < MIN_SIGMA || width == 0 || height == 0 {
        return Ok(data.to_vec());
    }
    let img = RgbaImage::from_raw(width, height, data.to_vec())
        .ok_or_else(|| BannerError::render("blur buffer does not fit its dimensions"))?;
    let params = GaussianBlurParameters::new_from_sigma(sigma);
    Ok(imageops::blur_advanced(&img, params).into_raw())
}

impl Layer {
    /// Gaussian-blurred copy; `sigma` is in device pixels.
    pub fn blurred(&self, sigma: f32) -> BannerResult<Layer> {
        let data = blur_channels(self.data(), self.width(), self.height(), sigma)?;
        Layer::from_premul(self.width(), self.height(), data)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
