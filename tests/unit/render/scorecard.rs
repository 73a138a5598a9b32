use super::*;

fn par_round() -> ScoreGrid {
    ScoreGrid::from_scores([4, 3, 5, 4, 4, 3, 4, 5, 4, 4, 3, 4, 5, 4, 3, 5, 4, 4])
}

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

#[test]
fn render_is_byte_identical_for_same_input() {
    let opts = RenderOptions {
        text_color: TextColor::White,
        course_name: Some("Pebble Beach".to_string()),
    };
    let a = render_scorecard(&par_round(), &opts);
    let b = render_scorecard(&par_round(), &opts);
    assert_eq!(a, b);
}

#[test]
fn all_zero_grid_produces_no_graphic() {
    let opts = RenderOptions {
        text_color: TextColor::Black,
        course_name: Some(String::new()),
    };
    assert!(render_if_entered(&ScoreGrid::new(), &opts).is_none());
    assert!(render_if_entered(&par_round(), &opts).is_some());
}

#[test]
fn all_zero_grid_renders_placeholders_when_forced() {
    let g = render_scorecard(&ScoreGrid::new(), &RenderOptions::default());
    assert_eq!(count(&g.markup, ">-</text>"), 18);
    assert!(g.markup.contains(r#"text-anchor="end">0</text>"#));
}

#[test]
fn layout_without_course_name() {
    let g = render_scorecard(&par_round(), &RenderOptions::default());
    let m = &g.markup;
    assert!(m.starts_with(r#"<svg viewBox="0 0 800 380""#));
    assert!(m.ends_with("</svg>"));
    assert!(m.contains(r##"<text x="40" y="40" font-family="Arial" font-size="20" font-weight="900" fill="#000000">FRONT 9</text>"##));
    assert!(m.contains(r##"<text x="40" y="170" font-family="Arial" font-size="20" font-weight="900" fill="#000000">BACK 9</text>"##));
    // hole 1 column centre: 40 + 68/2
    assert!(m.contains(r##"<text x="74" y="75" font-family="Arial" font-size="16" font-weight="800" fill="#000000" text-anchor="middle">1</text>"##));
    assert!(m.contains(r##"<text x="686" y="75" font-family="Arial" font-size="16" font-weight="800" fill="#000000" text-anchor="middle">OUT</text>"##));
    assert!(m.contains(r##"<text x="686" y="110" font-family="Arial" font-size="24" font-weight="900" fill="#000000" text-anchor="middle">36</text>"##));
    assert!(m.contains(r##"<text x="686" y="205" font-family="Arial" font-size="16" font-weight="800" fill="#000000" text-anchor="middle">IN</text>"##));
    assert!(m.contains(r##"<text x="610" y="298" font-family="Arial" font-size="18" font-weight="900" fill="#000000">TOTAL:</text>"##));
    assert!(m.contains(r##"<text x="765" y="300" font-family="Arial" font-size="32" font-weight="900" fill="#000000" text-anchor="end">72</text>"##));
}

#[test]
fn course_name_adds_header_and_shifts_bands() {
    let opts = RenderOptions {
        text_color: TextColor::Black,
        course_name: Some("St Andrews".to_string()),
    };
    let m = render_scorecard(&par_round(), &opts).markup;
    assert!(m.contains(r##"<text x="40" y="30" font-family="Arial" font-size="24" font-weight="900" fill="#000000">St Andrews</text>"##));
    assert!(m.contains(r##"y="70" font-family="Arial" font-size="20" font-weight="900" fill="#000000">FRONT 9<"##));
    assert!(m.contains(r##"y="200" font-family="Arial" font-size="20" font-weight="900" fill="#000000">BACK 9<"##));
    assert!(m.contains(r##"<text x="686" y="270" font-family="Arial" font-size="24" font-weight="900" fill="#000000" text-anchor="middle">36</text>"##));
    assert!(m.contains(r#"y="330" font-family="Arial" font-size="32""#));
}

#[test]
fn empty_course_name_is_treated_as_absent() {
    let with_empty = RenderOptions {
        text_color: TextColor::Black,
        course_name: Some(String::new()),
    };
    assert_eq!(
        render_scorecard(&par_round(), &with_empty),
        render_scorecard(&par_round(), &RenderOptions::default())
    );
}

#[test]
fn text_color_applies_to_every_text_element() {
    let opts = RenderOptions {
        text_color: TextColor::White,
        course_name: Some("Augusta".to_string()),
    };
    let m = render_scorecard(&par_round(), &opts).markup;
    let texts = count(&m, "<text ");
    assert_eq!(texts, 1 + 2 + 36 + 4 + 2);
    assert_eq!(count(&m, r##"fill="#FFFFFF""##), texts);
    assert!(!m.contains("#000000"));
}

#[test]
fn course_name_is_xml_escaped() {
    let opts = RenderOptions {
        text_color: TextColor::Black,
        course_name: Some(r#"Tom's <Links> & "Bar""#.to_string()),
    };
    let g = render_scorecard(&par_round(), &opts);
    assert!(g.markup.contains("Tom&apos;s &lt;Links&gt; &amp; &quot;Bar&quot;"));
    crate::assets::svg_raster::parse_svg(g.markup.as_bytes()).unwrap();
}

#[test]
fn data_uri_is_percent_encoded_markup() {
    let g = render_scorecard(&par_round(), &RenderOptions::default());
    let encoded = g
        .data_uri
        .strip_prefix("data:image/svg+xml;charset=utf-8,")
        .unwrap();
    assert!(encoded.starts_with("%3Csvg%20viewBox%3D%220%200%20800%20380%22"));
    assert!(!encoded.contains(' '));
    assert!(!encoded.contains('<'));
    let decoded = percent_encoding::percent_decode_str(encoded)
        .decode_utf8()
        .unwrap();
    assert_eq!(decoded, g.markup);
}

#[test]
fn text_color_serde_names() {
    assert_eq!(serde_json::to_string(&TextColor::White).unwrap(), "\"white\"");
    let opts: RenderOptions = serde_json::from_str(r#"{"text_color":"white"}"#).unwrap();
    assert_eq!(opts.text_color, TextColor::White);
    assert_eq!(opts.course_name, None);
}

#[test]
fn rasterize_matches_view_box_aspect() {
    let g = render_scorecard(&par_round(), &RenderOptions::default());
    let img = g.rasterize(400, 190).unwrap();
    assert_eq!(img.dimensions(), (400, 190));
}

#[test]
fn largest_scores_render_wide_totals() {
    let mut scores = [0; crate::score::grid::HOLES];
    scores[0] = u32::MAX;
    scores[1] = 1;
    let m = render_scorecard(&ScoreGrid::from_scores(scores), &RenderOptions::default()).markup;
    assert!(m.contains(">4294967295</text>"));
    assert!(m.contains(r#"text-anchor="end">4294967296</text>"#));
}
