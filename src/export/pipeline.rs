use std::path::PathBuf;

use crate::{
    assets::decode,
    export::{
        download::DownloadDir,
        share::{ExportFile, ShareError, SharePayload, ShareTarget},
        watermark::Watermark,
    },
    foundation::{core::NativeSize, error::LoopedResult},
    overlay::composite::draw_overlay,
};

pub const JPEG_QUALITY: u8 = 95;
pub const FILE_PREFIX: &str = "looped";
pub const SHARE_TITLE: &str = "Shared from Looped";
pub const SHARE_TEXT: &str = "Check out my round!";

/// How the exported image reached the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Handed to the native share sheet.
    Shared,
    /// The user dismissed the share sheet; nothing else happens.
    ShareCancelled,
    /// Written to the download directory.
    Downloaded(PathBuf),
}

/// `looped-{label}-{timestamp_ms}.jpg`, with runs of non-alphanumeric label characters collapsed
/// to a single `-`. An empty label becomes `round`.
pub fn export_file_name(label: &str, timestamp_ms: u128) -> String {
    let mut slug = String::with_capacity(label.len());
    for c in label.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');
    let slug = if slug.is_empty() { "round" } else { slug };
    format!("{FILE_PREFIX}-{slug}-{timestamp_ms}.jpg")
}

/// Stamp `watermark` onto the image and encode it as a named JPEG.
pub fn render_export(
    image_bytes: &[u8],
    watermark: &Watermark,
    label: &str,
    timestamp_ms: u128,
) -> LoopedResult<ExportFile> {
    let mut canvas = decode::decode_image(image_bytes)?;
    let (width, height) = canvas.dimensions();
    let target = watermark.placement(NativeSize::new(width, height));
    draw_overlay(&mut canvas, watermark.pixels(), target);

    Ok(ExportFile {
        name: export_file_name(label, timestamp_ms),
        mime: "image/jpeg",
        bytes: decode::encode_jpeg(&canvas, JPEG_QUALITY)?,
    })
}

/// Watermark, encode and deliver an image.
///
/// Sharing is preferred when `share` accepts the file. A cancelled share ends the export; any
/// other share error falls back to a direct download.
#[tracing::instrument(skip(image_bytes, watermark, share, downloads), fields(image_len = image_bytes.len()))]
pub fn export_image(
    image_bytes: &[u8],
    watermark: &Watermark,
    label: &str,
    timestamp_ms: u128,
    share: &mut dyn ShareTarget,
    downloads: &DownloadDir,
) -> LoopedResult<ExportOutcome> {
    let file = render_export(image_bytes, watermark, label, timestamp_ms)
        .inspect_err(|e| tracing::error!(error = %e, "export failed"))?;

    if share.can_share(&file) {
        let payload = SharePayload {
            title: SHARE_TITLE,
            text: SHARE_TEXT,
            file: &file,
        };
        match share.share(payload) {
            Ok(()) => return Ok(ExportOutcome::Shared),
            Err(ShareError::Cancelled) => {
                tracing::debug!(file = %file.name, "share cancelled");
                return Ok(ExportOutcome::ShareCancelled);
            }
            Err(e @ ShareError::Failed(_)) => {
                tracing::warn!(error = %e, "share failed, falling back to download");
            }
        }
    }

    let path = downloads
        .save(&file)
        .inspect_err(|e| tracing::error!(error = %e, "download failed"))?;
    tracing::debug!(path = %path.display(), "downloaded export");
    Ok(ExportOutcome::Downloaded(path))
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
