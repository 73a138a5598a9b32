use image::RgbaImage;

use super::*;

fn photo_png(w: u32, h: u32) -> Vec<u8> {
    decode::encode_png(&RgbaImage::from_pixel(w, h, image::Rgba([20, 120, 40, 255]))).unwrap()
}

fn red_watermark() -> Watermark {
    Watermark::from_pixels(RgbaImage::from_pixel(20, 10, image::Rgba([255, 0, 0, 255]))).unwrap()
}

struct ScriptedShare {
    available: bool,
    response: Result<(), ShareError>,
    offered: Vec<String>,
}

impl ScriptedShare {
    fn new(available: bool, response: Result<(), ShareError>) -> Self {
        Self {
            available,
            response,
            offered: Vec::new(),
        }
    }
}

impl ShareTarget for ScriptedShare {
    fn can_share(&self, _file: &ExportFile) -> bool {
        self.available
    }

    fn share(&mut self, payload: SharePayload<'_>) -> Result<(), ShareError> {
        assert_eq!(payload.title, SHARE_TITLE);
        self.offered.push(payload.file.name.clone());
        self.response.clone()
    }
}

fn count_files(dir: &std::path::Path) -> usize {
    std::fs::read_dir(dir).map(|rd| rd.count()).unwrap_or(0)
}

#[test]
fn file_name_sanitizes_label() {
    assert_eq!(
        export_file_name("Pebble Beach", 1700000000000),
        "looped-Pebble-Beach-1700000000000.jpg"
    );
    assert_eq!(
        export_file_name("  St. Andrews -- Old Course!! ", 5),
        "looped-St-Andrews-Old-Course-5.jpg"
    );
    assert_eq!(export_file_name("", 7), "looped-round-7.jpg");
    assert_eq!(export_file_name("!!!", 7), "looped-round-7.jpg");
}

#[test]
fn render_export_stamps_watermark_bottom_right() {
    let file = render_export(&photo_png(200, 100), &red_watermark(), "x", 1).unwrap();
    assert_eq!(file.mime, "image/jpeg");
    let img = decode::decode_image(&file.bytes).unwrap();
    assert_eq!(img.dimensions(), (200, 100));

    // Watermark spans x 160..190, y 83..98.
    let inside = img.get_pixel(175, 90).0;
    assert!(inside[0] > 200 && inside[1] < 60, "got {inside:?}");
    let outside = img.get_pixel(20, 20).0;
    assert!(outside[0] < 60 && outside[1] > 90, "got {outside:?}");
}

#[test]
fn share_success_skips_download() {
    let tmp = tempfile::tempdir().unwrap();
    let mut share = ScriptedShare::new(true, Ok(()));
    let out = export_image(
        &photo_png(40, 40),
        &red_watermark(),
        "Torrey Pines",
        42,
        &mut share,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap();
    assert_eq!(out, ExportOutcome::Shared);
    assert_eq!(share.offered, vec!["looped-Torrey-Pines-42.jpg".to_string()]);
    assert_eq!(count_files(tmp.path()), 0);
}

#[test]
fn share_cancel_is_benign_and_does_not_download() {
    let tmp = tempfile::tempdir().unwrap();
    let mut share = ScriptedShare::new(true, Err(ShareError::Cancelled));
    let out = export_image(
        &photo_png(40, 40),
        &red_watermark(),
        "",
        1,
        &mut share,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap();
    assert_eq!(out, ExportOutcome::ShareCancelled);
    assert_eq!(count_files(tmp.path()), 0);
}

#[test]
fn share_failure_falls_back_to_download() {
    let tmp = tempfile::tempdir().unwrap();
    let mut share = ScriptedShare::new(true, Err(ShareError::Failed("sheet crashed".into())));
    let out = export_image(
        &photo_png(40, 40),
        &red_watermark(),
        "Bethpage",
        9,
        &mut share,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap();
    assert_eq!(
        out,
        ExportOutcome::Downloaded(tmp.path().join("looped-Bethpage-9.jpg"))
    );
    assert_eq!(share.offered.len(), 1);
}

#[test]
fn unavailable_share_downloads_immediately() {
    let tmp = tempfile::tempdir().unwrap();
    let mut share = ScriptedShare::new(false, Ok(()));
    let out = export_image(
        &photo_png(40, 40),
        &red_watermark(),
        "Bethpage",
        9,
        &mut share,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap();
    assert!(matches!(out, ExportOutcome::Downloaded(_)));
    assert!(share.offered.is_empty());

    let mut none = crate::export::share::NoShare;
    let out = export_image(
        &photo_png(40, 40),
        &red_watermark(),
        "Bethpage",
        10,
        &mut none,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap();
    assert!(matches!(out, ExportOutcome::Downloaded(_)));
}

#[test]
fn broken_image_fails_before_any_delivery() {
    let tmp = tempfile::tempdir().unwrap();
    let mut share = ScriptedShare::new(true, Ok(()));
    let err = export_image(
        b"not an image",
        &red_watermark(),
        "x",
        1,
        &mut share,
        &DownloadDir::new(tmp.path()),
    )
    .unwrap_err();
    assert!(matches!(err, crate::LoopedError::AssetLoad(_)));
    assert!(share.offered.is_empty());
    assert_eq!(count_files(tmp.path()), 0);
}
