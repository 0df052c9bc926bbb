//! Color types for overlay styling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{EditorError, Result};

/// RGBA color with 32-bit float components in 0..=1.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from RGB with alpha = 1.0.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit RGBA values.
    #[inline]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Convert to 8-bit RGBA.
    #[inline]
    pub fn to_rgba8(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.g.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.b.clamp(0.0, 1.0) * 255.0).round() as u8,
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ]
    }

    /// Same color with a different alpha.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parse a `#rrggbb` or `#rrggbbaa` hex string.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.is_ascii() {
            return Err(EditorError::Serialization(format!(
                "invalid hex color: {hex}"
            )));
        }
        let byte = |range: std::ops::Range<usize>| -> Result<u8> {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| EditorError::Serialization(format!("invalid hex color: {hex}")))
        };
        match digits.len() {
            6 => Ok(Self::from_rgba8(byte(0..2)?, byte(2..4)?, byte(4..6)?, 255)),
            8 => Ok(Self::from_rgba8(
                byte(0..2)?,
                byte(2..4)?,
                byte(4..6)?,
                byte(6..8)?,
            )),
            _ => Err(EditorError::Serialization(format!(
                "invalid hex color: {hex}"
            ))),
        }
    }

    // Common colors
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
}

impl fmt::Display for Color {
    /// CSS `rgba(...)` form, matching overlay style strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.to_rgba8();
        write!(f, "rgba({}, {}, {}, {})", r, g, b, self.a.clamp(0.0, 1.0))
    }
}
