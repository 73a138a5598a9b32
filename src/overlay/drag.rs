//! Drag sessions and the pointer capture they hold.
//!
//! While a drag is active the host must deliver pointer/touch motion from anywhere in the
//! viewport, not just over the overlay, so fast gestures are not lost. That global subscription is
//! modelled as a [`PointerCapture`] acquired when a [`DragSession`] starts and released when it is
//! dropped, whichever way the session ends.

use crate::foundation::core::{PreviewPoint, Vec2};
use crate::overlay::layout::OverlayLayout;

/// Host hook for viewport-wide pointer and touch listening.
pub trait PointerCapture {
    /// Start routing move/release events from the whole viewport to the active drag.
    fn acquire(&mut self);
    /// Stop routing. Called exactly once per successful `acquire`.
    fn release(&mut self);
}

/// Capture for hosts that already deliver every event (CLIs, tests).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopCapture;

impl PointerCapture for NoopCapture {
    fn acquire(&mut self) {}
    fn release(&mut self) {}
}

/// An in-progress drag of the overlay.
///
/// Holds the layout and the capture mutably for its whole lifetime, so nothing else can resize
/// or remove the overlay mid-drag. Dropping the session ends the drag.
pub struct DragSession<'a> {
    layout: &'a mut OverlayLayout,
    capture: &'a mut dyn PointerCapture,
    grab: Vec2,
}

impl<'a> DragSession<'a> {
    /// Start a drag if `at` hits the overlay. Returns `None` (gesture passes through) otherwise.
    pub(crate) fn start(
        layout: &'a mut OverlayLayout,
        capture: &'a mut dyn PointerCapture,
        at: PreviewPoint,
    ) -> Option<Self> {
        if !layout.contains(at) {
            return None;
        }
        let grab = at.offset_from(layout.position);
        capture.acquire();
        tracing::trace!(x = at.x, y = at.y, "overlay drag started");
        Some(Self {
            layout,
            capture,
            grab,
        })
    }

    /// Pointer moved to `to`; the overlay keeps its grab offset, clamped at zero.
    pub fn move_to(&mut self, to: PreviewPoint) {
        self.layout.move_to(to.translated(-self.grab));
    }

    /// Touch moved. Only single-finger gestures move the overlay.
    pub fn touch_move(&mut self, touches: &[PreviewPoint]) {
        if let [only] = touches {
            self.move_to(*only);
        }
    }

    pub fn position(&self) -> PreviewPoint {
        self.layout.position
    }

    /// Pointer released.
    pub fn end(self) {}
}

impl Drop for DragSession<'_> {
    fn drop(&mut self) {
        self.capture.release();
        tracing::trace!(
            x = self.layout.position.x,
            y = self.layout.position.y,
            "overlay drag ended"
        );
    }
}
