use super::*;

#[test]
fn placement_is_bottom_right_with_margins() {
    let wm = Watermark::from_pixels(RgbaImage::new(200, 50)).unwrap();
    let r = wm.placement(NativeSize::new(1000, 800));
    // 15% of width, aspect 4:1.
    assert_eq!(r.width(), 150.0);
    assert_eq!(r.height(), 37.5);
    // 5% right margin, 2% bottom margin.
    assert_eq!(r.x0, 1000.0 - 150.0 - 50.0);
    assert_eq!(r.y0, 800.0 - 37.5 - 16.0);
}

#[test]
fn empty_watermark_is_rejected() {
    assert!(Watermark::from_pixels(RgbaImage::new(0, 10)).is_err());
    assert!(Watermark::from_bytes(b"garbage").is_err());
}

#[test]
fn text_watermark_has_view_box_aspect() {
    let wm = Watermark::from_text("Looped & Co").unwrap();
    assert_eq!(wm.pixels().dimensions(), (1200, 320));
}
