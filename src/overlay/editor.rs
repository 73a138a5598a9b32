use crate::{
    assets::decode,
    foundation::{
        core::{NativeSize, PreviewPoint, PreviewSize},
        error::LoopedResult,
    },
    overlay::{
        composite::{self, CompositeImage, PlacedOverlay},
        drag::{DragSession, NoopCapture, PointerCapture},
        layout::{Brightness, OverlayLayout},
    },
    render::scorecard::ScorecardGraphic,
};

/// Image placed on top of the base photo.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OverlaySource {
    /// An uploaded raster, typically a transparent PNG.
    Raster(Vec<u8>),
    /// A rendered scorecard graphic, rasterized at apply time at the target resolution.
    Scorecard(ScorecardGraphic),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorState {
    NoOverlay,
    Positioning,
}

/// What an apply produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Neutral brightness and no overlay: the original photo stands as is.
    Unchanged,
    Composite(CompositeImage),
}

/// Editing session for one base photo.
///
/// Layout and drag math live entirely in preview pixels; native pixels only appear inside
/// [`OverlayEditor::apply`].
pub struct OverlayEditor {
    base_photo: Vec<u8>,
    native: Option<NativeSize>,
    preview: PreviewSize,
    overlay: Option<OverlaySource>,
    layout: OverlayLayout,
    capture: Box<dyn PointerCapture>,
}

impl std::fmt::Debug for OverlayEditor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverlayEditor")
            .field("base_photo_len", &self.base_photo.len())
            .field("native", &self.native)
            .field("preview", &self.preview)
            .field("state", &self.state())
            .field("layout", &self.layout)
            .finish()
    }
}

impl OverlayEditor {
    /// Open an editor over `base_photo`, shown in a preview container of `preview` size.
    ///
    /// When the photo's dimensions can be read the overlay starts at
    /// [`OverlayLayout::initial_for`]; otherwise it keeps the default size and the load failure
    /// surfaces on apply.
    pub fn open(base_photo: Vec<u8>, preview: PreviewSize) -> Self {
        let native = match decode::probe_size(&base_photo) {
            Ok(size) => Some(size),
            Err(e) => {
                tracing::debug!(error = %e, "could not probe base photo size");
                None
            }
        };
        let layout = native
            .map(|n| OverlayLayout::initial_for(n.width))
            .unwrap_or_default();
        Self {
            base_photo,
            native,
            preview,
            overlay: None,
            layout,
            capture: Box::new(NoopCapture),
        }
    }

    pub fn with_overlay(mut self, source: OverlaySource) -> Self {
        self.load_overlay(source);
        self
    }

    pub fn with_pointer_capture(mut self, capture: Box<dyn PointerCapture>) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_layout(mut self, layout: OverlayLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn state(&self) -> EditorState {
        if self.overlay.is_some() {
            EditorState::Positioning
        } else {
            EditorState::NoOverlay
        }
    }

    pub fn layout(&self) -> &OverlayLayout {
        &self.layout
    }

    pub fn native_size(&self) -> Option<NativeSize> {
        self.native
    }

    pub fn overlay(&self) -> Option<&OverlaySource> {
        self.overlay.as_ref()
    }

    pub fn load_overlay(&mut self, source: OverlaySource) {
        self.overlay = Some(source);
    }

    pub fn remove_overlay(&mut self) {
        self.overlay = None;
    }

    /// The preview container was resized.
    pub fn set_preview_size(&mut self, preview: PreviewSize) {
        self.preview = preview;
    }

    pub fn set_brightness(&mut self, percent: i32) {
        self.layout.brightness = Brightness::new(percent);
    }

    pub fn grow(&mut self) {
        if self.overlay.is_some() {
            self.layout.grow();
        }
    }

    pub fn shrink(&mut self) {
        if self.overlay.is_some() {
            self.layout.shrink();
        }
    }

    /// Pointer went down at `at`. Starts a drag only when an overlay is loaded and hit.
    pub fn begin_drag(&mut self, at: PreviewPoint) -> Option<DragSession<'_>> {
        self.overlay.as_ref()?;
        DragSession::start(&mut self.layout, self.capture.as_mut(), at)
    }

    /// Touch started. Multi-finger gestures never start a drag.
    pub fn begin_touch_drag(&mut self, touches: &[PreviewPoint]) -> Option<DragSession<'_>> {
        match touches {
            [only] => self.begin_drag(*only),
            _ => None,
        }
    }

    /// Flatten the current edit.
    ///
    /// The editor is not modified, so a failed apply leaves everything as it was and the user can
    /// simply retry.
    #[tracing::instrument(skip(self), fields(state = ?self.state()))]
    pub fn apply(&self) -> LoopedResult<ApplyOutcome> {
        let brightness = self.layout.brightness;
        if brightness.is_neutral() && self.overlay.is_none() {
            tracing::debug!("nothing to apply, keeping original photo");
            return Ok(ApplyOutcome::Unchanged);
        }

        let placed = self.overlay.as_ref().map(|source| PlacedOverlay {
            source,
            rect: self.layout.rect(),
        });
        composite::flatten(&self.base_photo, placed, brightness, self.preview)
            .map(ApplyOutcome::Composite)
            .inspect_err(|e| tracing::error!(error = %e, "apply failed"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/editor.rs"]
mod tests;
