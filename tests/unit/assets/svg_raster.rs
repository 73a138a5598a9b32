use super::*;

const RED_SQUARE: &[u8] = br##"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2" viewBox="0 0 4 2"><rect x="0" y="0" width="2" height="2" fill="#ff0000"/></svg>"##;

#[test]
fn parse_ok_and_err() {
    parse_svg(RED_SQUARE).unwrap();
    let err = parse_svg(b"<svg").unwrap_err();
    assert!(matches!(err, LoopedError::AssetLoad(_)));
}

#[test]
fn natural_size_reads_view_box() {
    let tree = parse_svg(RED_SQUARE).unwrap();
    assert_eq!(natural_size(&tree).unwrap(), (4, 2));
}

#[test]
fn rasterize_stretches_and_keeps_transparency() {
    let tree = parse_svg(RED_SQUARE).unwrap();
    let img = rasterize_svg_to_rgba8(&tree, 8, 4).unwrap();
    assert_eq!(img.dimensions(), (8, 4));
    assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(6, 1).0[3], 0);
}

#[test]
fn rasterize_rejects_zero_and_huge_sizes() {
    let tree = parse_svg(RED_SQUARE).unwrap();
    assert!(rasterize_svg_to_rgba8(&tree, 0, 4).is_err());
    assert!(rasterize_svg_to_rgba8(&tree, MAX_DIM + 1, 4).is_err());
}

#[test]
fn escaped_text_parses_inside_markup() {
    let text = r#"<"Tom's" & co>"#;
    assert_eq!(escape_xml(text), "&lt;&quot;Tom&apos;s&quot; &amp; co&gt;");
    let markup = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="4" height="2"><text id="{0}">{0}</text></svg>"#,
        escape_xml(text)
    );
    parse_svg(markup.as_bytes()).unwrap();
}
