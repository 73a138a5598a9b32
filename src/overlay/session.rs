//! JSON description of an editing session, so a composite can be reproduced outside the UI.
//!
//! ```json
//! {
//!   "base_photo": "round.jpg",
//!   "preview": { "width": 800.0, "height": 400.0 },
//!   "overlay": { "scores": [4,3,5,4,4,3,4,5,4,4,3,4,5,4,3,5,4,4], "course_name": "Home" },
//!   "layout": { "position": { "x": 50.0, "y": 50.0 }, "size": { "width": 400.0, "height": 175.0 }, "brightness": 110 }
//! }
//! ```
//!
//! Relative paths resolve against the directory holding the session file.

use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::{
    assets::decode,
    foundation::{core::PreviewSize, error::LoopedResult},
    overlay::{
        editor::{OverlayEditor, OverlaySource},
        layout::OverlayLayout,
    },
    render::scorecard::{RenderOptions, render_if_entered},
    score::grid::ScoreGrid,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OverlaySpec {
    /// An image file, typically a transparent PNG.
    Image { image: PathBuf },
    /// A scorecard rendered from these scores.
    Scorecard {
        scores: ScoreGrid,
        #[serde(flatten)]
        options: RenderOptions,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EditSession {
    pub base_photo: PathBuf,
    pub preview: PreviewSize,
    #[serde(default)]
    pub overlay: Option<OverlaySpec>,
    /// Explicit layout; when absent the editor's initial layout for the photo is used.
    #[serde(default)]
    pub layout: Option<OverlayLayout>,
}

impl EditSession {
    pub fn from_json(s: &str) -> LoopedResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn read(path: &Path) -> LoopedResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("open session '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Load every referenced asset and build the editor. `root` anchors relative paths.
    pub fn into_editor(self, root: &Path) -> LoopedResult<OverlayEditor> {
        let base = decode::read_asset_bytes(&root.join(&self.base_photo))?;
        let mut editor = OverlayEditor::open(base, self.preview);
        if let Some(layout) = self.layout {
            editor = editor.with_layout(layout);
        }

        match self.overlay {
            Some(OverlaySpec::Image { image }) => {
                let bytes = decode::read_asset_bytes(&root.join(image))?;
                editor.load_overlay(OverlaySource::Raster(bytes));
            }
            Some(OverlaySpec::Scorecard { scores, options }) => {
                match render_if_entered(&scores, &options) {
                    Some(graphic) => editor.load_overlay(OverlaySource::Scorecard(graphic)),
                    None => tracing::debug!("scorecard is empty, no overlay"),
                }
            }
            None => {}
        }
        Ok(editor)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/session.rs"]
mod tests;
