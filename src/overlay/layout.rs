use crate::foundation::{
    core::{PreviewPoint, PreviewRect, PreviewSize},
    error::LoopedError,
};

/// Base aspect ratio of the scorecard overlay (height : width).
pub const OVERLAY_ASPECT: f64 = 350.0 / 800.0;
/// Width change applied by one grow/shrink step, in preview pixels.
pub const RESIZE_STEP: f64 = 30.0;
pub const MIN_WIDTH: f64 = 100.0;
pub const MIN_HEIGHT: f64 = 44.0;
/// Widest initial overlay, in preview pixels.
pub const MAX_INITIAL_WIDTH: f64 = 600.0;

/// Photo brightness as an integer percentage in `[50, 150]`. `100` leaves pixels untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Brightness(u16);

impl Brightness {
    pub const MIN: u16 = 50;
    pub const MAX: u16 = 150;
    pub const NEUTRAL: Self = Self(100);

    /// Clamp `percent` into the slider domain.
    pub fn new(percent: i32) -> Self {
        Self(percent.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u16)
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    pub fn is_neutral(self) -> bool {
        self == Self::NEUTRAL
    }

    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TryFrom<u16> for Brightness {
    type Error = LoopedError;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        if !(Self::MIN..=Self::MAX).contains(&v) {
            return Err(LoopedError::validation(format!(
                "brightness must be within {}..={}, got {v}",
                Self::MIN,
                Self::MAX
            )));
        }
        Ok(Self(v))
    }
}

impl From<Brightness> for u16 {
    fn from(b: Brightness) -> Self {
        b.0
    }
}

/// Placement of an overlay over the base photo, in preview pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OverlayLayout {
    pub position: PreviewPoint,
    pub size: PreviewSize,
    #[serde(default)]
    pub brightness: Brightness,
}

impl Default for OverlayLayout {
    fn default() -> Self {
        Self {
            position: PreviewPoint::new(50.0, 50.0),
            size: PreviewSize::new(400.0, 175.0),
            brightness: Brightness::NEUTRAL,
        }
    }
}

impl OverlayLayout {
    /// Starting size once the base photo's native width is known: 80% of it, capped at
    /// [`MAX_INITIAL_WIDTH`], at the overlay aspect ratio.
    ///
    /// The native width is intentionally read as a preview-pixel count, without going through
    /// [`PreviewToNative`](crate::PreviewToNative); it only seeds the starting size.
    pub fn initial_for(native_width: u32) -> Self {
        let width = MAX_INITIAL_WIDTH.min(f64::from(native_width) * 0.8);
        Self {
            size: PreviewSize::new(width, width * OVERLAY_ASPECT),
            ..Self::default()
        }
    }

    pub fn rect(&self) -> PreviewRect {
        PreviewRect::new(self.position, self.size)
    }

    pub fn contains(&self, p: PreviewPoint) -> bool {
        self.rect().contains(p)
    }

    pub fn move_to(&mut self, p: PreviewPoint) {
        self.position = p.clamp_non_negative();
    }

    /// Change width by `delta` and height proportionally, respecting the minimum bounds.
    pub fn resize_by(&mut self, delta: f64) {
        self.size = PreviewSize::new(
            (self.size.width + delta).max(MIN_WIDTH),
            (self.size.height + delta * OVERLAY_ASPECT).max(MIN_HEIGHT),
        );
    }

    pub fn grow(&mut self) {
        self.resize_by(RESIZE_STEP);
    }

    pub fn shrink(&mut self) {
        self.resize_by(-RESIZE_STEP);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/layout.rs"]
mod tests;
