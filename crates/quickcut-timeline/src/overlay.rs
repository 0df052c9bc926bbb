//! Overlay types: subtitles, text overlays, and image overlays.
//!
//! Subtitles are time-bounded; text and image overlays stay visible from
//! the moment they are added. That asymmetry is deliberate.

use quickcut_core::{Color, PixelSize, Position, TimeSpan};
use serde::{Deserialize, Serialize};

// ── Subtitles ───────────────────────────────────────────────────

/// Visual style of a subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleStyle {
    pub font_family: String,
    pub font_size: f64,
    pub color: Color,
    /// Background carries its own alpha.
    pub background: Color,
}

impl Default for SubtitleStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".into(),
            font_size: 24.0,
            color: Color::WHITE,
            background: Color::BLACK.with_alpha(0.5),
        }
    }
}

/// A time-bounded subtitle line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubtitleItem {
    /// Unique ID
    pub id: String,
    /// Displayed text, never empty
    pub text: String,
    /// Visible from (inclusive)
    pub start_time: f64,
    /// Visible until (inclusive)
    pub end_time: f64,
    /// Placement as frame percentages
    pub position: Position,
    pub style: SubtitleStyle,
}

impl SubtitleItem {
    /// Create a subtitle with default style, centered near the bottom.
    pub fn new(id: impl Into<String>, text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            start_time: start,
            end_time: end,
            position: Position::new(50.0, 90.0),
            style: SubtitleStyle::default(),
        }
    }

    /// The visibility window, inclusive at both endpoints.
    #[inline]
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start_time, self.end_time)
    }

    /// Whether the subtitle is visible at the given playhead time.
    #[inline]
    pub fn visible_at(&self, time: f64) -> bool {
        self.span().contains(time)
    }
}

/// Partial update for a subtitle.
#[derive(Debug, Clone, Default)]
pub struct SubtitlePatch {
    pub text: Option<String>,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    pub position: Option<Position>,
    pub style: Option<SubtitleStyle>,
}

impl SubtitlePatch {
    pub(crate) fn apply(self, subtitle: &mut SubtitleItem) {
        if let Some(text) = self.text {
            subtitle.text = text;
        }
        if let Some(start) = self.start_time {
            subtitle.start_time = start;
        }
        if let Some(end) = self.end_time {
            subtitle.end_time = end;
        }
        if let Some(position) = self.position {
            subtitle.position = position.clamped();
        }
        if let Some(style) = self.style {
            subtitle.style = style;
        }
    }
}

// ── Text overlays ───────────────────────────────────────────────

/// Visual style of a text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub color: Color,
    pub background: Color,
    /// Padding in pixels
    pub padding: f64,
    /// Overall opacity, 0.0..=1.0
    pub opacity: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Arial".into(),
            font_size: 32.0,
            color: Color::WHITE,
            background: Color::TRANSPARENT,
            padding: 8.0,
            opacity: 1.0,
        }
    }
}

/// A text overlay, visible for the whole timeline once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOverlay {
    /// Unique ID
    pub id: String,
    pub text: String,
    pub position: Position,
    pub style: TextStyle,
}

impl TextOverlay {
    /// Create a centered overlay with default style.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            position: Position::CENTER,
            style: TextStyle::default(),
        }
    }
}

/// Partial update for a text overlay.
#[derive(Debug, Clone, Default)]
pub struct TextOverlayPatch {
    pub text: Option<String>,
    pub position: Option<Position>,
    pub style: Option<TextStyle>,
}

impl TextOverlayPatch {
    pub(crate) fn apply(self, overlay: &mut TextOverlay) {
        if let Some(text) = self.text {
            overlay.text = text;
        }
        if let Some(position) = self.position {
            overlay.position = position.clamped();
        }
        if let Some(mut style) = self.style {
            style.opacity = style.opacity.clamp(0.0, 1.0);
            overlay.style = style;
        }
    }
}

// ── Image overlays ──────────────────────────────────────────────

/// Visual style of an image overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageStyle {
    pub border_width: f64,
    pub border_color: Color,
    pub border_radius: f64,
    /// Overall opacity, 0.0..=1.0
    pub opacity: f64,
}

impl Default for ImageStyle {
    fn default() -> Self {
        Self {
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
            border_radius: 0.0,
            opacity: 1.0,
        }
    }
}

/// An image composited over the video, visible once added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageOverlay {
    /// Unique ID
    pub id: String,
    /// Image source URL
    pub source: Option<String>,
    pub position: Position,
    /// Rendered size in pixels
    pub size: PixelSize,
    pub style: ImageStyle,
}

impl ImageOverlay {
    /// Create a centered overlay at a default size.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: None,
            position: Position::CENTER,
            size: PixelSize::new(200.0, 200.0),
            style: ImageStyle::default(),
        }
    }

    /// Attach a source URL.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Partial update for an image overlay.
#[derive(Debug, Clone, Default)]
pub struct ImageOverlayPatch {
    pub source: Option<Option<String>>,
    pub position: Option<Position>,
    pub size: Option<PixelSize>,
    pub style: Option<ImageStyle>,
}

impl ImageOverlayPatch {
    pub(crate) fn apply(self, overlay: &mut ImageOverlay) {
        if let Some(source) = self.source {
            overlay.source = source;
        }
        if let Some(position) = self.position {
            overlay.position = position.clamped();
        }
        if let Some(size) = self.size {
            overlay.size = size;
        }
        if let Some(mut style) = self.style {
            style.opacity = style.opacity.clamp(0.0, 1.0);
            overlay.style = style;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subtitle_visibility_bounds() {
        let sub = SubtitleItem::new("sub-1", "Hello", 2.0, 5.0);
        assert!(!sub.visible_at(1.0));
        assert!(sub.visible_at(2.0));
        assert!(sub.visible_at(3.0));
        assert!(sub.visible_at(5.0));
        assert!(!sub.visible_at(6.0));
    }

    #[test]
    fn test_text_patch_clamps_opacity() {
        let mut overlay = TextOverlay::new("text-1", "Title");
        TextOverlayPatch {
            style: Some(TextStyle {
                opacity: 3.0,
                ..TextStyle::default()
            }),
            ..Default::default()
        }
        .apply(&mut overlay);
        assert_eq!(overlay.style.opacity, 1.0);
    }

    #[test]
    fn test_patch_clamps_position() {
        let mut overlay = ImageOverlay::new("img-1");
        ImageOverlayPatch {
            position: Some(Position::new(150.0, -20.0)),
            ..Default::default()
        }
        .apply(&mut overlay);
        assert_eq!(overlay.position, Position::new(100.0, 0.0));
    }
}
