//! Clip types for the timeline.

use serde::{Deserialize, Serialize};

/// A video clip on the timeline.
///
/// Video clips form one continuous sequence: `start_time` is derived from
/// the durations of the clips before it and is maintained by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoClip {
    /// Unique clip ID
    pub id: String,
    /// Clip name (displayed in UI)
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Timeline start in seconds, recomputed by the store
    pub start_time: f64,
    /// Source media URL
    pub source: Option<String>,
    /// Thumbnail URL
    pub thumbnail: Option<String>,
}

impl VideoClip {
    /// Create a new clip starting at zero; the store places it.
    pub fn new(id: impl Into<String>, name: impl Into<String>, duration: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            start_time: 0.0,
            source: None,
            thumbnail: None,
        }
    }

    /// Attach a source URL.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach a thumbnail URL.
    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    /// Timeline end in seconds.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }
}

/// Partial update for a video clip. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct VideoClipPatch {
    pub name: Option<String>,
    pub duration: Option<f64>,
    pub source: Option<Option<String>>,
    pub thumbnail: Option<Option<String>>,
}

impl VideoClipPatch {
    /// Merge this patch into a clip. Returns whether the duration changed,
    /// which requires the store to re-place subsequent clips.
    pub(crate) fn apply(self, clip: &mut VideoClip) -> bool {
        if let Some(name) = self.name {
            clip.name = name;
        }
        if let Some(source) = self.source {
            clip.source = source;
        }
        if let Some(thumbnail) = self.thumbnail {
            clip.thumbnail = thumbnail;
        }
        match self.duration {
            Some(duration) => {
                clip.duration = duration;
                true
            }
            None => false,
        }
    }
}

/// An audio clip, placed freely on the timeline.
///
/// Unlike video clips, audio clips may overlap each other and the video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioClip {
    /// Unique clip ID
    pub id: String,
    /// Clip name
    pub name: String,
    /// Duration in seconds
    pub duration: f64,
    /// Timeline start in seconds
    pub start_time: f64,
    /// Volume gain, 0.0..=1.0
    pub volume: f64,
    /// Is the clip muted
    pub muted: bool,
    /// Source media URL
    pub source: Option<String>,
}

impl AudioClip {
    /// Create a new audio clip at the given start, full volume.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        duration: f64,
        start_time: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            duration,
            start_time,
            volume: 1.0,
            muted: false,
            source: None,
        }
    }

    /// Attach a source URL.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Timeline end in seconds.
    #[inline]
    pub fn end_time(&self) -> f64 {
        self.start_time + self.duration
    }

    /// Effective volume, accounting for mute.
    #[inline]
    pub fn effective_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }
}

/// Partial update for an audio clip.
#[derive(Debug, Clone, Default)]
pub struct AudioClipPatch {
    pub name: Option<String>,
    pub duration: Option<f64>,
    pub start_time: Option<f64>,
    pub volume: Option<f64>,
    pub muted: Option<bool>,
    pub source: Option<Option<String>>,
}

impl AudioClipPatch {
    pub(crate) fn apply(self, clip: &mut AudioClip) {
        if let Some(name) = self.name {
            clip.name = name;
        }
        if let Some(duration) = self.duration {
            clip.duration = duration;
        }
        if let Some(start_time) = self.start_time {
            clip.start_time = start_time.max(0.0);
        }
        if let Some(volume) = self.volume {
            clip.volume = volume.clamp(0.0, 1.0);
        }
        if let Some(muted) = self.muted {
            clip.muted = muted;
        }
        if let Some(source) = self.source {
            clip.source = source;
        }
    }
}
