//! QuickCut - scripted headless editing session.
//!
//! There is no GUI yet; this binary drives a full editing session through
//! the data model: upload intake, timeline edits, playback coordination,
//! the simulated export, and session save/load.

use anyhow::Result;
use quickcut_core::{format_timecode, format_timecode_centis, generate_id};
use quickcut_media::{ExportSimulator, ExportTick, UrlPool};
use quickcut_player::{MediaPlayer, PlaybackCoordinator, PlayerEvent};
use quickcut_timeline::{
    AudioClip, EditorStore, ElementKind, SessionFile, SubtitleItem, TextOverlay, VideoClip,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Stand-in player that just logs commands.
#[derive(Default)]
struct LoggingPlayer;

impl MediaPlayer for LoggingPlayer {
    fn load(&mut self, url: &str) {
        info!(%url, "player: load");
    }
    fn play(&mut self) {
        info!("player: play");
    }
    fn pause(&mut self) {
        info!("player: pause");
    }
    fn seek(&mut self, seconds: f64) {
        info!(seconds, "player: seek");
    }
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("QuickCut starting...");

    let mut store = EditorStore::new();
    let mut pool = UrlPool::new();
    let mut coordinator = PlaybackCoordinator::new();
    let mut player = LoggingPlayer;

    // ── Upload & seed ──────────────────────────────────────
    let upload = pool.accept("vacation.mp4", "video/mp4")?;
    store.set_video(upload.url.clone(), None);
    coordinator.sync(&store, &mut player);
    coordinator.handle_event(&mut store, PlayerEvent::DurationDiscovered(30.0));
    info!(
        duration = %format_timecode(store.duration()),
        clips = store.video_clips().len(),
        "video loaded"
    );

    // ── Timeline edits ─────────────────────────────────────
    let outro_id = generate_id("clip");
    store.add_video_clip(VideoClip::new(&outro_id, "Outro", 8.0))?;
    store.reorder_video_clips(&[outro_id.as_str(), "clip-1"])?;

    let audio_id = generate_id("audio");
    store.add_audio_clip(AudioClip::new(&audio_id, "Background Music", 38.0, 0.0))?;

    let sub_id = generate_id("sub");
    store.add_subtitle(SubtitleItem::new(&sub_id, "Welcome!", 1.0, 4.0))?;
    store.add_text_overlay(TextOverlay::new(generate_id("text"), "Summer 2026"))?;
    store.select(&sub_id, ElementKind::Subtitle);

    for clip in store.video_clips() {
        info!(
            name = %clip.name,
            start = %format_timecode_centis(clip.start_time),
            end = %format_timecode_centis(clip.end_time()),
            "clip"
        );
    }

    // ── Playback round trip ────────────────────────────────
    store.toggle_playback();
    coordinator.sync(&store, &mut player);
    coordinator.handle_event(&mut store, PlayerEvent::Progress(2.5));
    info!(
        playhead = %format_timecode_centis(store.current_time()),
        visible_subtitles = store.visible_subtitles(store.current_time()).count(),
        "playing"
    );
    store.toggle_playback();
    coordinator.sync(&store, &mut player);

    // ── Export simulation ──────────────────────────────────
    let mut simulator = ExportSimulator::new();
    let mut rng = rand::thread_rng();
    simulator.begin(&mut store)?;
    loop {
        match simulator.tick(&mut store, &mut rng)? {
            ExportTick::Finished | ExportTick::Idle => break,
            ExportTick::Progress(_) => {}
        }
    }
    info!(progress = store.export().progress(), "export done");

    // ── Persist & reload ───────────────────────────────────
    let path = std::env::temp_dir().join("quickcut-session.json");
    SessionFile::new(store.snapshot()).save_to_file(&path)?;
    let restored = SessionFile::load_from_file(&path)?;
    info!(
        path = %path.display(),
        clips = restored.session.video_clips().len(),
        "session saved and reloaded"
    );

    // ── Teardown ───────────────────────────────────────────
    pool.revoke(&upload.url)?;
    anyhow::ensure!(pool.live_count() == 0, "leaked object URLs at shutdown");
    info!("clean shutdown");
    Ok(())
}
