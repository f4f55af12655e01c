use serde::{Deserialize, Serialize};

/// Raw canvas size in pixels.
///
/// A zero-sized viewport is accepted by layout and yields degenerate geometry;
/// only frame backends require `is_valid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Per-side canvas padding in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::uniform(0.0)
    }
}

/// Axis-aligned rectangle in pixel space, Y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Frame {
    #[must_use]
    pub const fn from_ltrb(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn from_viewport(viewport: Viewport) -> Self {
        Self::from_ltrb(
            0.0,
            0.0,
            f64::from(viewport.width),
            f64::from(viewport.height),
        )
    }

    /// Shrinks every side independently.
    ///
    /// Insets larger than the frame collapse it instead of inverting it: the
    /// leading edge stops at the trailing one and the trailing edge never
    /// crosses the leading one, so a non-inverted frame stays non-inverted.
    #[must_use]
    pub fn inset(self, padding: Padding) -> Self {
        let left = (self.left + padding.left).min(self.right);
        let top = (self.top + padding.top).min(self.bottom);
        Self::from_ltrb(
            left,
            top,
            (self.right - padding.right).max(left),
            (self.bottom - padding.bottom).max(top),
        )
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }
}
