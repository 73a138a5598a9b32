use std::path::Path;

use crate::foundation::{
    core::NativeSize,
    error::{LoopedError, LoopedResult},
};

/// Decode an encoded raster (PNG, JPEG, ...) into straight-alpha RGBA8 at native resolution.
pub fn decode_image(bytes: &[u8]) -> LoopedResult<image::RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| LoopedError::asset_load(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read just enough of `bytes` to learn the image's native dimensions.
pub fn probe_size(bytes: &[u8]) -> LoopedResult<NativeSize> {
    let reader = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoopedError::asset_load(format!("guess image format: {e}")))?;
    let (width, height) = reader
        .into_dimensions()
        .map_err(|e| LoopedError::asset_load(format!("read image dimensions: {e}")))?;
    Ok(NativeSize::new(width, height))
}

pub fn read_asset_bytes(path: &Path) -> LoopedResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        LoopedError::asset_load(format!("read asset bytes from '{}': {e}", path.display()))
    })
}

/// Encode straight-alpha RGBA8 as PNG.
pub fn encode_png(img: &image::RgbaImage) -> LoopedResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| LoopedError::encoding(format!("encode png: {e}")))?;
    if buf.is_empty() {
        return Err(LoopedError::encoding("png encoder produced no output"));
    }
    Ok(buf)
}

/// Encode as JPEG at `quality` (1-100). Alpha is dropped.
pub fn encode_jpeg(img: &image::RgbaImage, quality: u8) -> LoopedResult<Vec<u8>> {
    let rgb = image::DynamicImage::ImageRgba8(img.clone()).to_rgb8();
    let mut buf = Vec::new();
    let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality);
    rgb.write_with_encoder(encoder)
        .map_err(|e| LoopedError::encoding(format!("encode jpeg: {e}")))?;
    if buf.is_empty() {
        return Err(LoopedError::encoding("jpeg encoder produced no output"));
    }
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
