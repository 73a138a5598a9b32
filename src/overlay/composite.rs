use image::{Pixel as _, RgbaImage, imageops};

use crate::{
    assets::decode,
    foundation::{
        core::{NativeSize, PreviewRect, PreviewSize, PreviewToNative, Rect},
        error::LoopedResult,
    },
    overlay::{editor::OverlaySource, layout::Brightness},
};

/// Largest overlay side drawn with a full resize. Bigger targets are sampled only where they
/// cover the canvas.
const MAX_RESIZE_DIM: u32 = 4096;

/// Flattened result of one apply: base photo with brightness and overlay baked in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompositeImage {
    pub width: u32,
    pub height: u32,
    /// PNG-encoded pixels.
    pub png: Vec<u8>,
}

/// An overlay and where it sits in the preview.
#[derive(Clone, Copy, Debug)]
pub struct PlacedOverlay<'a> {
    pub source: &'a OverlaySource,
    pub rect: PreviewRect,
}

/// Scale R, G and B of every pixel by `brightness`, saturating at 255. Alpha is untouched.
///
/// Neutral brightness returns without touching the buffer.
pub fn apply_brightness(img: &mut RgbaImage, brightness: Brightness) {
    if brightness.is_neutral() {
        return;
    }
    let factor = brightness.factor();
    for px in img.chunks_exact_mut(4) {
        for c in &mut px[..3] {
            *c = (f64::from(*c) * factor).round_ties_even().min(255.0) as u8;
        }
    }
}

/// Alpha-blend `overlay` into `dst`, stretched to fill `target` (native pixels).
///
/// The target has no upper bound and may extend past the canvas on any side.
pub fn draw_overlay(dst: &mut RgbaImage, overlay: &RgbaImage, target: Rect) {
    let (w, h) = target_px(target);
    if w > MAX_RESIZE_DIM || h > MAX_RESIZE_DIM {
        draw_overlay_clipped(dst, overlay, target);
        return;
    }
    let scaled;
    let src = if overlay.dimensions() == (w, h) {
        overlay
    } else {
        scaled = imageops::resize(overlay, w, h, imageops::FilterType::Triangle);
        &scaled
    };
    imageops::overlay(dst, src, target.x0.round() as i64, target.y0.round() as i64);
}

// Bilinear sampling over the visible part of `target` only, so memory stays bounded by the canvas.
fn draw_overlay_clipped(dst: &mut RgbaImage, overlay: &RgbaImage, target: Rect) {
    let (cw, ch) = dst.dimensions();
    let (w, h) = target_px(target);
    let (w, h) = (f64::from(w), f64::from(h));
    let x0 = target.x0.round();
    let y0 = target.y0.round();

    let vx0 = x0.max(0.0);
    let vx1 = (x0 + w).min(f64::from(cw));
    let vy0 = y0.max(0.0);
    let vy1 = (y0 + h).min(f64::from(ch));
    if vx0 >= vx1 || vy0 >= vy1 {
        return;
    }
    tracing::debug!(w, h, "overlay larger than resize limit, sampling visible region");

    for y in (vy0 as u32)..(vy1 as u32) {
        let v = ((f64::from(y) + 0.5 - y0) / h) as f32;
        for x in (vx0 as u32)..(vx1 as u32) {
            let u = ((f64::from(x) + 0.5 - x0) / w) as f32;
            if let Some(px) = imageops::sample_bilinear(overlay, u, v) {
                dst.get_pixel_mut(x, y).blend(&px);
            }
        }
    }
}

fn target_px(target: Rect) -> (u32, u32) {
    let w = target.width().round().max(1.0) as u32;
    let h = target.height().round().max(1.0) as u32;
    (w, h)
}

fn overlay_pixels(source: &OverlaySource, target: Rect) -> LoopedResult<RgbaImage> {
    match source {
        OverlaySource::Raster(bytes) => decode::decode_image(bytes),
        OverlaySource::Scorecard(graphic) => {
            let (w, h) = target_px(target);
            graphic.rasterize(w.min(MAX_RESIZE_DIM), h.min(MAX_RESIZE_DIM))
        }
    }
}

/// Produce the composite for `base_photo`.
///
/// Every input is decoded before anything is drawn, so a failed overlay load never yields a
/// half-built image.
#[tracing::instrument(skip(base_photo, overlay), fields(base_len = base_photo.len()))]
pub fn flatten(
    base_photo: &[u8],
    overlay: Option<PlacedOverlay<'_>>,
    brightness: Brightness,
    preview: PreviewSize,
) -> LoopedResult<CompositeImage> {
    let mut canvas = decode::decode_image(base_photo)?;
    let (width, height) = canvas.dimensions();

    let placed = match overlay {
        Some(o) => {
            let to_native = PreviewToNative::new(preview, NativeSize::new(width, height))?;
            let target = to_native.map_rect(o.rect);
            Some((overlay_pixels(o.source, target)?, target))
        }
        None => None,
    };

    apply_brightness(&mut canvas, brightness);
    if let Some((pixels, target)) = &placed {
        tracing::debug!(
            x = target.x0,
            y = target.y0,
            w = target.width(),
            h = target.height(),
            "drawing overlay"
        );
        draw_overlay(&mut canvas, pixels, *target);
    }

    let png = decode::encode_png(&canvas)?;
    Ok(CompositeImage { width, height, png })
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/composite.rs"]
mod tests;
