//! QuickCut Player - playback coordination
//!
//! The editor store is the source of truth for transport state; the actual
//! decode/render engine lives behind the [`MediaPlayer`] trait. The
//! [`PlaybackCoordinator`] is the only component allowed to talk to the
//! player in either direction: it translates store state into
//! load/play/pause/seek commands and funnels player callbacks back into the
//! store.
//!
//! The one subtle rule lives in [`PlaybackCoordinator::sync`]: seeks are
//! suppressed while playing. A playing player reports its own progress,
//! which updates `current_time`, which would otherwise trigger a seek on
//! every tick and feed back into itself.

use quickcut_timeline::EditorStore;
use tracing::debug;

/// The external media player collaborator.
pub trait MediaPlayer {
    /// Load a media source by URL.
    fn load(&mut self, url: &str);
    /// Begin playback.
    fn play(&mut self);
    /// Pause playback.
    fn pause(&mut self);
    /// Jump to a position in seconds.
    fn seek(&mut self, seconds: f64);
}

/// Callbacks the player delivers back to the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerEvent {
    /// Elapsed playback position in seconds.
    Progress(f64),
    /// The media's duration became known.
    DurationDiscovered(f64),
    /// The player started playing on its own (e.g. media key).
    Played,
    /// The player paused on its own.
    Paused,
}

/// Mirrors the last state pushed to the player and issues only the
/// commands needed to close the gap with the store.
#[derive(Debug, Default)]
pub struct PlaybackCoordinator {
    loaded_url: Option<String>,
    playing: bool,
    last_seek: Option<f64>,
}

impl PlaybackCoordinator {
    /// Create a coordinator for a freshly constructed player.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the store's transport state to the player.
    ///
    /// Call after any store mutation. Issues `load` when the source
    /// changed, `play`/`pause` on transport flips, and `seek` only while
    /// paused and only when the playhead actually moved.
    pub fn sync<P: MediaPlayer>(&mut self, store: &EditorStore, player: &mut P) {
        if let Some(url) = store.video_source() {
            if self.loaded_url.as_deref() != Some(url) {
                debug!(%url, "loading source");
                player.load(url);
                self.loaded_url = Some(url.to_string());
                self.playing = false;
                self.last_seek = None;
            }
        }

        if store.is_playing() != self.playing {
            if store.is_playing() {
                debug!("play");
                player.play();
            } else {
                debug!("pause");
                player.pause();
            }
            self.playing = store.is_playing();
        }

        // Seek only while paused: during playback the player owns the
        // position and reports it back through Progress events.
        if !store.is_playing() && self.last_seek != Some(store.current_time()) {
            debug!(seconds = store.current_time(), "seek");
            player.seek(store.current_time());
            self.last_seek = Some(store.current_time());
        }
    }

    /// Funnel a player callback into the store.
    pub fn handle_event(&mut self, store: &mut EditorStore, event: PlayerEvent) {
        match event {
            PlayerEvent::Progress(seconds) => {
                store.set_current_time(seconds);
                // Remember the player's own position so pausing does not
                // immediately seek back to it.
                self.last_seek = Some(store.current_time());
            }
            PlayerEvent::DurationDiscovered(seconds) => {
                debug!(seconds, "duration discovered");
                store.set_duration(seconds);
            }
            // The player already is in the reported state; mirror it so the
            // next sync does not echo the command back.
            PlayerEvent::Played => {
                store.set_playing(true);
                self.playing = true;
            }
            PlayerEvent::Paused => {
                store.set_playing(false);
                self.playing = false;
            }
        }
    }
}
