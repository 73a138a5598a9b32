use super::*;

#[test]
fn preview_rect_contains_is_inclusive() {
    let r = PreviewRect::new(PreviewPoint::new(10.0, 20.0), PreviewSize::new(100.0, 50.0));
    assert!(r.contains(PreviewPoint::new(10.0, 20.0)));
    assert!(r.contains(PreviewPoint::new(110.0, 70.0)));
    assert!(r.contains(PreviewPoint::new(60.0, 45.0)));
    assert!(!r.contains(PreviewPoint::new(9.9, 45.0)));
    assert!(!r.contains(PreviewPoint::new(60.0, 70.1)));
}

#[test]
fn clamp_non_negative_has_no_upper_bound() {
    let p = PreviewPoint::new(-5.0, 9000.0).clamp_non_negative();
    assert_eq!(p, PreviewPoint::new(0.0, 9000.0));
}

#[test]
fn preview_to_native_doubles_rect() {
    let map =
        PreviewToNative::new(PreviewSize::new(800.0, 400.0), NativeSize::new(1600, 800)).unwrap();
    assert_eq!(map.scale(), Vec2::new(2.0, 2.0));

    let r = map.map_rect(PreviewRect::new(
        PreviewPoint::new(50.0, 50.0),
        PreviewSize::new(400.0, 175.0),
    ));
    assert_eq!(r, Rect::new(100.0, 100.0, 900.0, 450.0));
    assert_eq!(r.width(), 800.0);
    assert_eq!(r.height(), 350.0);
}

#[test]
fn preview_to_native_scales_axes_independently() {
    let map =
        PreviewToNative::new(PreviewSize::new(400.0, 400.0), NativeSize::new(1200, 800)).unwrap();
    assert_eq!(map.scale(), Vec2::new(3.0, 2.0));
}

#[test]
fn preview_to_native_rejects_degenerate_sizes() {
    assert!(PreviewToNative::new(PreviewSize::new(0.0, 10.0), NativeSize::new(10, 10)).is_err());
    assert!(
        PreviewToNative::new(PreviewSize::new(f64::NAN, 10.0), NativeSize::new(10, 10)).is_err()
    );
    assert!(PreviewToNative::new(PreviewSize::new(10.0, 10.0), NativeSize::new(10, 0)).is_err());
}
