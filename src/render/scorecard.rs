//! Scorecard graphic: an 18-hole grid rendered as scalable SVG markup.
//!
//! The markup uses a fixed `800x380` view box so it scales to any container without
//! re-rendering. The same markup is exposed as a percent-encoded `data:` URI for direct use as an
//! image source.

use std::fmt::Write as _;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::{
    assets::svg_raster,
    foundation::error::LoopedResult,
    score::grid::{NINE, ScoreGrid},
};

pub const VIEW_BOX_WIDTH: f64 = 800.0;
pub const VIEW_BOX_HEIGHT: f64 = 380.0;

const LEFT: f64 = 40.0;
const CELL_WIDTH: f64 = (VIEW_BOX_WIDTH - 120.0) / 10.0;
const COURSE_SHIFT: f64 = 30.0;
const FONT: &str = "Arial";

/// Characters left as-is by `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const DATA_URI_PREFIX: &str = "data:image/svg+xml;charset=utf-8,";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    Black,
    White,
}

impl TextColor {
    pub fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#FFFFFF",
        }
    }
}

/// Display options paired with a [`ScoreGrid`] snapshot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RenderOptions {
    #[serde(default)]
    pub text_color: TextColor,
    #[serde(default)]
    pub course_name: Option<String>,
}

impl RenderOptions {
    fn course_name(&self) -> Option<&str> {
        self.course_name.as_deref().filter(|s| !s.is_empty())
    }
}

/// Rendered scorecard: SVG markup plus an equivalent `data:` URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScorecardGraphic {
    pub markup: String,
    pub data_uri: String,
}

impl ScorecardGraphic {
    /// Rasterize the markup into straight-alpha RGBA8 at the given pixel size.
    pub fn rasterize(&self, width: u32, height: u32) -> LoopedResult<image::RgbaImage> {
        let tree = svg_raster::parse_svg(self.markup.as_bytes())?;
        svg_raster::rasterize_svg_to_rgba8(&tree, width, height)
    }
}

/// Render only when at least one hole has been entered.
///
/// An all-zero grid yields `None`: there is no overlay to offer.
pub fn render_if_entered(grid: &ScoreGrid, opts: &RenderOptions) -> Option<ScorecardGraphic> {
    grid.has_entries().then(|| render_scorecard(grid, opts))
}

/// Render `grid` with `opts`. Pure: identical inputs produce byte-identical markup.
pub fn render_scorecard(grid: &ScoreGrid, opts: &RenderOptions) -> ScorecardGraphic {
    let markup = scorecard_markup(grid, opts);
    let data_uri = format!(
        "{DATA_URI_PREFIX}{}",
        utf8_percent_encode(&markup, URI_COMPONENT)
    );
    ScorecardGraphic { markup, data_uri }
}

fn scorecard_markup(grid: &ScoreGrid, opts: &RenderOptions) -> String {
    let fill = opts.text_color.hex();
    let course = opts.course_name();
    let shift = if course.is_some() { COURSE_SHIFT } else { 0.0 };
    let agg = grid.aggregate();
    let total_col_x = LEFT + (NINE as f64) * CELL_WIDTH + CELL_WIDTH / 2.0;

    let mut svg = String::with_capacity(8 * 1024);
    svg.push_str(&format!(
        r#"<svg viewBox="0 0 {VIEW_BOX_WIDTH} {VIEW_BOX_HEIGHT}" xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMid meet">"#
    ));

    let mut text = |x: f64, y: f64, size: u32, weight: u32, anchor: Option<&str>, body: &str| {
        let anchor = anchor
            .map(|a| format!(r#" text-anchor="{a}""#))
            .unwrap_or_default();
        // Writing to a String cannot fail.
        let _ = write!(
            svg,
            r#"<text x="{x}" y="{y}" font-family="{FONT}" font-size="{size}" font-weight="{weight}" fill="{fill}"{anchor}>{body}</text>"#
        );
    };

    if let Some(name) = course {
        text(LEFT, 30.0, 24, 900, None, &svg_raster::escape_xml(name));
    }

    for (side, label, title_y, total_label, side_total) in [
        (0usize, "FRONT 9", 40.0, "OUT", agg.front_nine),
        (1usize, "BACK 9", 170.0, "IN", agg.back_nine),
    ] {
        let band = if side == 0 { 0.0 } else { 130.0 };
        text(LEFT, title_y + shift, 20, 900, None, label);

        for i in 0..NINE {
            let hole = side * NINE + i;
            let x = LEFT + (i as f64) * CELL_WIDTH + CELL_WIDTH / 2.0;
            text(
                x,
                75.0 + band + shift,
                16,
                800,
                Some("middle"),
                &(hole + 1).to_string(),
            );
            text(
                x,
                110.0 + band + shift,
                24,
                900,
                Some("middle"),
                &grid.display_cell(hole),
            );
        }

        text(
            total_col_x,
            75.0 + band + shift,
            16,
            800,
            Some("middle"),
            total_label,
        );
        text(
            total_col_x,
            110.0 + band + shift,
            24,
            900,
            Some("middle"),
            &side_total.to_string(),
        );
    }

    text(VIEW_BOX_WIDTH - 190.0, 298.0 + shift, 18, 900, None, "TOTAL:");
    text(
        VIEW_BOX_WIDTH - 35.0,
        300.0 + shift,
        32,
        900,
        Some("end"),
        &agg.total.to_string(),
    );

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
#[path = "../../tests/unit/render/scorecard.rs"]
mod tests;
