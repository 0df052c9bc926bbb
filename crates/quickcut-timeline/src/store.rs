//! The editor state store.
//!
//! Single source of truth for everything editable: clips, overlays,
//! subtitles, transport, selection, and export state. Collections are
//! private; every mutation goes through an operation that keeps the store
//! internally consistent, in particular the video-clip contiguity
//! invariant: clip *i* always starts at the summed duration of clips
//! 0..i-1. The relayout pass runs inside every structural mutation, so
//! callers cannot get it wrong.
//!
//! Mutations addressed by id return `Err(NotFound)` rather than silently
//! ignoring unknown ids; the state is untouched either way.

use quickcut_core::{EditorError, Result};
use serde::{Deserialize, Serialize};

use crate::clip::{AudioClip, AudioClipPatch, VideoClip, VideoClipPatch};
use crate::export::ExportState;
use crate::overlay::{
    ImageOverlay, ImageOverlayPatch, SubtitleItem, SubtitlePatch, TextOverlay, TextOverlayPatch,
};
use crate::selection::{ElementKind, Selection};

/// ID given to the clip synthesized when a video's duration is first known.
const SEED_CLIP_ID: &str = "clip-1";
const SEED_CLIP_NAME: &str = "Main Video";

/// The editable state of one editing session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditorStore {
    video_source: Option<String>,
    video_thumbnail: Option<String>,
    duration: f64,
    current_time: f64,
    playing: bool,
    video_clips: Vec<VideoClip>,
    audio_clips: Vec<AudioClip>,
    subtitles: Vec<SubtitleItem>,
    text_overlays: Vec<TextOverlay>,
    image_overlays: Vec<ImageOverlay>,
    selection: Option<Selection>,
    export: ExportState,
}

impl EditorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Transport ───────────────────────────────────────────────

    /// Replace the current video reference. Duration is reported
    /// separately by the player once the media loads.
    pub fn set_video(&mut self, source: impl Into<String>, thumbnail: Option<String>) {
        self.video_source = Some(source.into());
        self.video_thumbnail = thumbnail;
    }

    /// Set the video duration. If no clips exist yet and the duration is
    /// positive, seeds a single clip spanning the whole video. This is the
    /// only mechanism that seeds the clip collection.
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = seconds.max(0.0);
        // Shrinking the duration must not strand the playhead past the end.
        self.current_time = self.current_time.clamp(0.0, self.duration);
        if self.video_clips.is_empty() && seconds > 0.0 {
            let mut clip = VideoClip::new(SEED_CLIP_ID, SEED_CLIP_NAME, seconds);
            clip.source = self.video_source.clone();
            clip.thumbnail = self.video_thumbnail.clone();
            self.video_clips.push(clip);
        }
    }

    /// Move the playhead, clamped into `[0, duration]`.
    pub fn set_current_time(&mut self, seconds: f64) {
        self.current_time = seconds.clamp(0.0, self.duration.max(0.0));
    }

    /// Flip between playing and paused.
    pub fn toggle_playback(&mut self) {
        self.playing = !self.playing;
    }

    /// Force the playing flag (player-reported play/pause events).
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    pub fn video_source(&self) -> Option<&str> {
        self.video_source.as_deref()
    }

    pub fn video_thumbnail(&self) -> Option<&str> {
        self.video_thumbnail.as_deref()
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    // ── Video clips ─────────────────────────────────────────────

    pub fn video_clips(&self) -> &[VideoClip] {
        &self.video_clips
    }

    /// Append a video clip. The store assigns its start time.
    pub fn add_video_clip(&mut self, clip: VideoClip) -> Result<()> {
        if clip.duration <= 0.0 {
            return Err(EditorError::InvalidRange(format!(
                "clip duration must be positive, got {}",
                clip.duration
            )));
        }
        self.video_clips.push(clip);
        self.relayout_video_clips();
        Ok(())
    }

    /// Merge a patch into the clip with the given id.
    pub fn update_video_clip(&mut self, id: &str, patch: VideoClipPatch) -> Result<()> {
        if let Some(duration) = patch.duration {
            if duration <= 0.0 {
                return Err(EditorError::InvalidRange(format!(
                    "clip duration must be positive, got {duration}"
                )));
            }
        }
        let clip = self
            .video_clips
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        if patch.apply(clip) {
            self.relayout_video_clips();
        }
        Ok(())
    }

    /// Remove a video clip. The collection must keep at least one clip
    /// once it has been seeded.
    pub fn remove_video_clip(&mut self, id: &str) -> Result<()> {
        let index = self
            .video_clips
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        if self.video_clips.len() == 1 {
            return Err(EditorError::EmptyCollection);
        }
        self.video_clips.remove(index);
        self.relayout_video_clips();
        self.clear_selection_of(id, ElementKind::Video);
        Ok(())
    }

    /// Reorder the video clips to match `ids`, which must be a permutation
    /// of the current clip ids. Start times are recomputed afterwards.
    pub fn reorder_video_clips(&mut self, ids: &[&str]) -> Result<()> {
        if ids.len() != self.video_clips.len() {
            return Err(EditorError::InvalidRange(format!(
                "reorder list has {} ids, timeline has {} clips",
                ids.len(),
                self.video_clips.len()
            )));
        }
        // Validate before touching anything: every id must name a clip and
        // appear once. Equal lengths + distinct + present = permutation.
        let mut seen = std::collections::HashSet::with_capacity(ids.len());
        for id in ids {
            if !self.video_clips.iter().any(|c| c.id == *id) {
                return Err(EditorError::NotFound { id: (*id).into() });
            }
            if !seen.insert(*id) {
                return Err(EditorError::InvalidRange(format!(
                    "duplicate clip id in reorder list: {id}"
                )));
            }
        }
        let mut remaining = std::mem::take(&mut self.video_clips);
        let mut reordered = Vec::with_capacity(ids.len());
        for id in ids {
            let index = remaining
                .iter()
                .position(|c| c.id == *id)
                .expect("validated above");
            reordered.push(remaining.remove(index));
        }
        self.video_clips = reordered;
        self.relayout_video_clips();
        Ok(())
    }

    /// Total timeline length: the sum of all video-clip durations.
    pub fn total_duration(&self) -> f64 {
        self.video_clips.iter().map(|c| c.duration).sum()
    }

    /// Recompute each clip's start time as the running sum of preceding
    /// durations. Runs after every structural mutation.
    fn relayout_video_clips(&mut self) {
        let mut elapsed = 0.0;
        for clip in &mut self.video_clips {
            clip.start_time = elapsed;
            elapsed += clip.duration;
        }
    }

    // ── Audio clips ─────────────────────────────────────────────

    pub fn audio_clips(&self) -> &[AudioClip] {
        &self.audio_clips
    }

    /// Append an audio clip. Audio placement is free; only the duration is
    /// validated and the volume clamped.
    pub fn add_audio_clip(&mut self, mut clip: AudioClip) -> Result<()> {
        if clip.duration <= 0.0 {
            return Err(EditorError::InvalidRange(format!(
                "clip duration must be positive, got {}",
                clip.duration
            )));
        }
        clip.volume = clip.volume.clamp(0.0, 1.0);
        clip.start_time = clip.start_time.max(0.0);
        self.audio_clips.push(clip);
        Ok(())
    }

    pub fn update_audio_clip(&mut self, id: &str, patch: AudioClipPatch) -> Result<()> {
        if let Some(duration) = patch.duration {
            if duration <= 0.0 {
                return Err(EditorError::InvalidRange(format!(
                    "clip duration must be positive, got {duration}"
                )));
            }
        }
        let clip = self
            .audio_clips
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        patch.apply(clip);
        Ok(())
    }

    pub fn remove_audio_clip(&mut self, id: &str) -> Result<()> {
        let index = self
            .audio_clips
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        self.audio_clips.remove(index);
        self.clear_selection_of(id, ElementKind::Audio);
        Ok(())
    }

    // ── Subtitles ───────────────────────────────────────────────

    pub fn subtitles(&self) -> &[SubtitleItem] {
        &self.subtitles
    }

    /// Append a subtitle. Text must be non-empty and the window must run
    /// forward within the video's duration.
    pub fn add_subtitle(&mut self, subtitle: SubtitleItem) -> Result<()> {
        if subtitle.text.trim().is_empty() {
            return Err(EditorError::EmptyText);
        }
        self.check_subtitle_window(subtitle.start_time, subtitle.end_time)?;
        self.subtitles.push(subtitle);
        Ok(())
    }

    pub fn update_subtitle(&mut self, id: &str, patch: SubtitlePatch) -> Result<()> {
        let index = self
            .subtitles
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        if let Some(text) = &patch.text {
            if text.trim().is_empty() {
                return Err(EditorError::EmptyText);
            }
        }
        let start = patch.start_time.unwrap_or(self.subtitles[index].start_time);
        let end = patch.end_time.unwrap_or(self.subtitles[index].end_time);
        self.check_subtitle_window(start, end)?;
        patch.apply(&mut self.subtitles[index]);
        Ok(())
    }

    pub fn remove_subtitle(&mut self, id: &str) -> Result<()> {
        let index = self
            .subtitles
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        self.subtitles.remove(index);
        self.clear_selection_of(id, ElementKind::Subtitle);
        Ok(())
    }

    /// Subtitles visible at the given playhead time (inclusive bounds).
    pub fn visible_subtitles(&self, time: f64) -> impl Iterator<Item = &SubtitleItem> {
        self.subtitles.iter().filter(move |s| s.visible_at(time))
    }

    fn check_subtitle_window(&self, start: f64, end: f64) -> Result<()> {
        if start < 0.0 || end <= start {
            return Err(EditorError::InvalidRange(format!(
                "subtitle window must run forward from >= 0, got {start}..{end}"
            )));
        }
        if self.duration > 0.0 && end > self.duration {
            return Err(EditorError::InvalidRange(format!(
                "subtitle ends at {end} but the video lasts {}",
                self.duration
            )));
        }
        Ok(())
    }

    // ── Text overlays ───────────────────────────────────────────

    pub fn text_overlays(&self) -> &[TextOverlay] {
        &self.text_overlays
    }

    pub fn add_text_overlay(&mut self, overlay: TextOverlay) -> Result<()> {
        if overlay.text.trim().is_empty() {
            return Err(EditorError::EmptyText);
        }
        self.text_overlays.push(overlay);
        Ok(())
    }

    pub fn update_text_overlay(&mut self, id: &str, patch: TextOverlayPatch) -> Result<()> {
        if let Some(text) = &patch.text {
            if text.trim().is_empty() {
                return Err(EditorError::EmptyText);
            }
        }
        let overlay = self
            .text_overlays
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        patch.apply(overlay);
        Ok(())
    }

    pub fn remove_text_overlay(&mut self, id: &str) -> Result<()> {
        let index = self
            .text_overlays
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        self.text_overlays.remove(index);
        self.clear_selection_of(id, ElementKind::Text);
        Ok(())
    }

    // ── Image overlays ──────────────────────────────────────────

    pub fn image_overlays(&self) -> &[ImageOverlay] {
        &self.image_overlays
    }

    pub fn add_image_overlay(&mut self, overlay: ImageOverlay) -> Result<()> {
        self.image_overlays.push(overlay);
        Ok(())
    }

    pub fn update_image_overlay(&mut self, id: &str, patch: ImageOverlayPatch) -> Result<()> {
        let overlay = self
            .image_overlays
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        patch.apply(overlay);
        Ok(())
    }

    pub fn remove_image_overlay(&mut self, id: &str) -> Result<()> {
        let index = self
            .image_overlays
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| EditorError::NotFound { id: id.into() })?;
        self.image_overlays.remove(index);
        self.clear_selection_of(id, ElementKind::Image);
        Ok(())
    }

    // ── Selection ───────────────────────────────────────────────

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Select an element, silently replacing any previous selection.
    pub fn select(&mut self, id: impl Into<String>, kind: ElementKind) {
        self.selection = Some(Selection::new(id, kind));
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Drop the selection if it points at the element being removed.
    fn clear_selection_of(&mut self, id: &str, kind: ElementKind) {
        if let Some(sel) = &self.selection {
            if sel.id == id && sel.kind == kind {
                self.selection = None;
            }
        }
    }

    // ── Export ──────────────────────────────────────────────────

    pub fn export(&self) -> &ExportState {
        &self.export
    }

    pub fn start_export(&mut self) -> Result<()> {
        self.export.start()
    }

    pub fn set_export_progress(&mut self, percent: f64) -> Result<()> {
        self.export.set_progress(percent)
    }

    pub fn finish_export(&mut self) -> Result<()> {
        self.export.finish()
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Restore the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Owned copy of the full state, for persistence.
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}
