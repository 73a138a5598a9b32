use image::RgbaImage;

use crate::{
    assets::{decode, svg_raster},
    foundation::{
        core::{NativeSize, Rect},
        error::{LoopedError, LoopedResult},
    },
};

/// Watermark width as a fraction of the image width.
pub const WIDTH_FRACTION: f64 = 0.15;
/// Gap between watermark and right edge, as a fraction of image width.
pub const RIGHT_MARGIN: f64 = 0.05;
/// Gap between watermark and bottom edge, as a fraction of image height.
pub const BOTTOM_MARGIN: f64 = 0.02;

// Text watermarks are rasterized at this multiple of their view box for sharp downscaling.
const TEXT_RASTER_SCALE: u32 = 4;

/// Decoded watermark pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Watermark {
    pixels: RgbaImage,
}

impl Watermark {
    pub fn from_pixels(pixels: RgbaImage) -> LoopedResult<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(LoopedError::asset_load("watermark image is empty"));
        }
        Ok(Self { pixels })
    }

    /// Decode a raster watermark (PNG with transparency is typical).
    pub fn from_bytes(bytes: &[u8]) -> LoopedResult<Self> {
        Self::from_pixels(decode::decode_image(bytes)?)
    }

    /// Rasterize a wordmark from `text` in white bold type on a transparent background.
    pub fn from_text(text: &str) -> LoopedResult<Self> {
        let markup = format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="300" height="80" viewBox="0 0 300 80"><text x="150" y="58" font-family="Arial" font-size="56" font-weight="900" fill="#FFFFFF" text-anchor="middle">{}</text></svg>"##,
            svg_raster::escape_xml(text)
        );
        let tree = svg_raster::parse_svg(markup.as_bytes())?;
        let (w, h) = svg_raster::natural_size(&tree)?;
        let pixels =
            svg_raster::rasterize_svg_to_rgba8(&tree, w * TEXT_RASTER_SCALE, h * TEXT_RASTER_SCALE)?;
        Self::from_pixels(pixels)
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Bottom-right placement on an image of `image` size, aspect ratio preserved.
    pub fn placement(&self, image: NativeSize) -> Rect {
        let iw = f64::from(image.width);
        let ih = f64::from(image.height);
        let w = iw * WIDTH_FRACTION;
        let h = w * f64::from(self.pixels.height()) / f64::from(self.pixels.width());
        let x = iw - w - iw * RIGHT_MARGIN;
        let y = ih - h - ih * BOTTOM_MARGIN;
        Rect::new(x, y, x + w, y + h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/watermark.rs"]
mod tests;
