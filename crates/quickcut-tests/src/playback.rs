//! Integration tests for the playback coordination loop.

use quickcut_player::{MediaPlayer, PlaybackCoordinator, PlayerEvent};
use quickcut_timeline::{EditorStore, SubtitleItem};

#[derive(Debug, Default)]
struct RecordingPlayer {
    commands: Vec<String>,
}

impl MediaPlayer for RecordingPlayer {
    fn load(&mut self, url: &str) {
        self.commands.push(format!("load {url}"));
    }
    fn play(&mut self) {
        self.commands.push("play".into());
    }
    fn pause(&mut self) {
        self.commands.push("pause".into());
    }
    fn seek(&mut self, seconds: f64) {
        self.commands.push(format!("seek {seconds}"));
    }
}

#[test]
fn progress_ticks_drive_subtitle_visibility() {
    let mut store = EditorStore::new();
    store.set_video("quickcut://video-1", None);
    let mut coord = PlaybackCoordinator::new();

    coord.handle_event(&mut store, PlayerEvent::DurationDiscovered(30.0));
    store
        .add_subtitle(SubtitleItem::new("sub-1", "Hello", 2.0, 5.0))
        .unwrap();

    store.toggle_playback();
    coord.handle_event(&mut store, PlayerEvent::Progress(1.0));
    assert_eq!(store.visible_subtitles(store.current_time()).count(), 0);

    coord.handle_event(&mut store, PlayerEvent::Progress(3.0));
    assert_eq!(store.visible_subtitles(store.current_time()).count(), 1);

    coord.handle_event(&mut store, PlayerEvent::Progress(6.0));
    assert_eq!(store.visible_subtitles(store.current_time()).count(), 0);
}

#[test]
fn playback_loop_never_seeks_while_playing() {
    let mut store = EditorStore::new();
    store.set_video("quickcut://video-1", None);
    let mut coord = PlaybackCoordinator::new();
    let mut player = RecordingPlayer::default();

    coord.handle_event(&mut store, PlayerEvent::DurationDiscovered(30.0));
    coord.sync(&store, &mut player);
    store.toggle_playback();
    coord.sync(&store, &mut player);
    player.commands.clear();

    for tenth in 1..=50 {
        coord.handle_event(&mut store, PlayerEvent::Progress(f64::from(tenth) * 0.1));
        coord.sync(&store, &mut player);
    }
    assert!(
        player.commands.is_empty(),
        "progress ticks leaked commands: {:?}",
        player.commands
    );
}

#[test]
fn progress_beyond_duration_clamps() {
    let mut store = EditorStore::new();
    store.set_video("quickcut://video-1", None);
    let mut coord = PlaybackCoordinator::new();

    coord.handle_event(&mut store, PlayerEvent::DurationDiscovered(30.0));
    coord.handle_event(&mut store, PlayerEvent::Progress(31.7));
    assert_eq!(store.current_time(), 30.0);
}

#[test]
fn external_pause_reconciles_transport() {
    let mut store = EditorStore::new();
    store.set_video("quickcut://video-1", None);
    let mut coord = PlaybackCoordinator::new();
    let mut player = RecordingPlayer::default();

    coord.handle_event(&mut store, PlayerEvent::DurationDiscovered(30.0));
    store.toggle_playback();
    coord.sync(&store, &mut player);

    // Player pauses itself (e.g. end of media); store follows, and the
    // next sync issues no redundant pause.
    coord.handle_event(&mut store, PlayerEvent::Paused);
    assert!(!store.is_playing());
    player.commands.clear();
    coord.sync(&store, &mut player);
    assert!(!player.commands.iter().any(|c| c == "pause"));
}
