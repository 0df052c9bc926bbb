//! Geometric primitives for overlay placement.

use serde::{Deserialize, Serialize};

/// A position expressed as percentages of the video frame (0..=100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of the frame.
    pub const CENTER: Self = Self::new(50.0, 50.0);

    /// Clamp both coordinates into the 0..=100 range.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            x: self.x.clamp(0.0, 100.0),
            y: self.y.clamp(0.0, 100.0),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::CENTER
    }
}

/// A size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelSize {
    pub width: f64,
    pub height: f64,
}

impl PixelSize {
    /// Create a new pixel size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area in square pixels.
    #[inline]
    pub fn area(self) -> f64 {
        self.width * self.height
    }
}
