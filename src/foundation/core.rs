//! Coordinate types for the overlay editor.
//!
//! Two unit systems are in play and never mix: *preview* pixels (the on-screen editing
//! container, where drag and resize happen) and *native* pixels (the base photo at full
//! resolution, where compositing happens). [`PreviewToNative`] is the only bridge.

use crate::foundation::error::{LoopedError, LoopedResult};

pub use kurbo::{Rect, Vec2};

/// A point in preview pixel space, relative to the container's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewPoint {
    pub x: f64,
    pub y: f64,
}

impl PreviewPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp both coordinates to be non-negative. There is no upper bound.
    pub fn clamp_non_negative(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y.max(0.0),
        }
    }

    pub fn offset_from(self, origin: PreviewPoint) -> Vec2 {
        Vec2::new(self.x - origin.x, self.y - origin.y)
    }

    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
        }
    }
}

/// A size in preview pixel space.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewSize {
    pub width: f64,
    pub height: f64,
}

impl PreviewSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in preview pixel space, top-left anchored.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PreviewRect {
    pub origin: PreviewPoint,
    pub size: PreviewSize,
}

impl PreviewRect {
    pub const fn new(origin: PreviewPoint, size: PreviewSize) -> Self {
        Self { origin, size }
    }

    /// Hit test, inclusive on every edge.
    pub fn contains(&self, p: PreviewPoint) -> bool {
        p.x >= self.origin.x
            && p.x <= self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y <= self.origin.y + self.size.height
    }
}

/// Dimensions of a decoded image in native pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NativeSize {
    pub width: u32,
    pub height: u32,
}

impl NativeSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Linear map from the preview container onto the base photo's native pixel grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewToNative {
    scale: Vec2,
}

impl PreviewToNative {
    pub fn new(preview: PreviewSize, native: NativeSize) -> LoopedResult<Self> {
        if !(preview.width.is_finite() && preview.width > 0.0)
            || !(preview.height.is_finite() && preview.height > 0.0)
        {
            return Err(LoopedError::validation(
                "preview container must have a positive size",
            ));
        }
        if native.width == 0 || native.height == 0 {
            return Err(LoopedError::validation("native image must have a positive size"));
        }
        Ok(Self {
            scale: Vec2::new(
                f64::from(native.width) / preview.width,
                f64::from(native.height) / preview.height,
            ),
        })
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn map_rect(&self, r: PreviewRect) -> Rect {
        let x0 = r.origin.x * self.scale.x;
        let y0 = r.origin.y * self.scale.y;
        Rect::new(
            x0,
            y0,
            x0 + r.size.width * self.scale.x,
            y0 + r.size.height * self.scale.y,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
