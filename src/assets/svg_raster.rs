use std::sync::{Arc, OnceLock};

use crate::foundation::error::{LoopedError, LoopedResult};

// Avoid pathological allocations when callers pass absurd target sizes.
const MAX_DIM: u32 = 16_384;

fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    static DB: OnceLock<Arc<usvg::fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        Arc::new(db)
    })
    .clone()
}

/// Parse SVG bytes into a `usvg` tree, resolving text against system fonts.
pub fn parse_svg(bytes: &[u8]) -> LoopedResult<usvg::Tree> {
    let opts = usvg::Options {
        fontdb: system_fontdb(),
        ..Default::default()
    };
    usvg::Tree::from_data(bytes, &opts)
        .map_err(|e| LoopedError::asset_load(format!("parse svg tree: {e}")))
}

/// Size of `tree` in whole pixels at its natural scale.
pub fn natural_size(tree: &usvg::Tree) -> LoopedResult<(u32, u32)> {
    fn to_px(v: f32) -> LoopedResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(LoopedError::asset_load("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }
    let size = tree.size();
    Ok((to_px(size.width())?, to_px(size.height())?))
}

/// Rasterize `tree` stretched to `width x height`, returning straight-alpha RGBA8.
pub fn rasterize_svg_to_rgba8(
    tree: &usvg::Tree,
    width: u32,
    height: u32,
) -> LoopedResult<image::RgbaImage> {
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(LoopedError::encoding(format!(
            "svg raster size out of range: {width}x{height} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| LoopedError::encoding("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);
    resvg::render(tree, xform, &mut pixmap.as_mut());

    let mut straight = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for px in pixmap.pixels() {
        let c = px.demultiply();
        straight.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image::RgbaImage::from_raw(width, height, straight)
        .ok_or_else(|| LoopedError::encoding("svg raster buffer size mismatch"))
}

/// Escape text for use in SVG element content or attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg_raster.rs"]
mod tests;
