//! Looped turns a golf round into a shareable picture.
//!
//! # Pipeline overview
//!
//! 1. **Score**: [`ScoreGrid`] holds 18 stroke counts and derives front/back/total.
//! 2. **Render**: [`render_scorecard`] maps a grid and [`RenderOptions`] to SVG markup plus an
//!    equivalent `data:` URI.
//! 3. **Composite**: [`OverlayEditor`] positions an overlay (scorecard or uploaded PNG) over a
//!    photo in preview space, adjusts brightness, and flattens to a [`CompositeImage`] at the
//!    photo's native resolution.
//! 4. **Export**: [`export_image`] stamps a watermark, encodes a JPEG, and delivers it through a
//!    [`ShareTarget`] or falls back to a [`DownloadDir`].
//!
//! The composite's bytes replace the cover photo of a [`PostDraft`], which is then uploaded and
//! submitted by the surrounding application.
//!
//! Everything here is synchronous and single-threaded. Preview pixels and native pixels are
//! distinct types; [`PreviewToNative`] is the only conversion between them.
#![forbid(unsafe_code)]

mod assets;
mod export;
mod foundation;
mod overlay;
mod post;
mod render;
mod score;

pub use assets::decode::{decode_image, encode_jpeg, encode_png, probe_size, read_asset_bytes};
pub use export::download::DownloadDir;
pub use export::pipeline::{
    ExportOutcome, FILE_PREFIX, JPEG_QUALITY, SHARE_TEXT, SHARE_TITLE, export_file_name,
    export_image, render_export,
};
pub use export::share::{ExportFile, NoShare, ShareError, SharePayload, ShareTarget};
pub use export::watermark::Watermark;
pub use foundation::core::{
    NativeSize, PreviewPoint, PreviewRect, PreviewSize, PreviewToNative, Rect, Vec2,
};
pub use foundation::error::{LoopedError, LoopedResult};
pub use overlay::composite::{CompositeImage, PlacedOverlay, apply_brightness, draw_overlay, flatten};
pub use overlay::drag::{DragSession, NoopCapture, PointerCapture};
pub use overlay::editor::{ApplyOutcome, EditorState, OverlayEditor, OverlaySource};
pub use overlay::layout::{
    Brightness, MIN_HEIGHT, MIN_WIDTH, OVERLAY_ASPECT, OverlayLayout, RESIZE_STEP,
};
pub use overlay::session::{EditSession, OverlaySpec};
pub use post::draft::{DraftError, PostDraft, PostSubmission, UploadService};
pub use render::scorecard::{
    RenderOptions, ScorecardGraphic, TextColor, render_if_entered, render_scorecard,
};
pub use score::grid::{Aggregate, HOLES, NINE, ScoreEdit, ScoreGrid};
