//! Integration tests for a full editing session.
//!
//! Exercises the path a user takes: upload, seed, edit the timeline,
//! persist, reload, tear down.

use quickcut_core::generate_id;
use quickcut_media::{MediaKind, UrlPool};
use quickcut_timeline::{
    AudioClip, AudioClipPatch, EditorStore, ElementKind, SessionFile, SubtitleItem, TextOverlay,
    VideoClip,
};

fn editing_session() -> (EditorStore, UrlPool, String) {
    let mut pool = UrlPool::new();
    let upload = pool.accept("vacation.mp4", "video/mp4").unwrap();
    assert_eq!(upload.kind, MediaKind::Video);

    let mut store = EditorStore::new();
    store.set_video(upload.url.clone(), None);
    store.set_duration(30.0);
    (store, pool, upload.url)
}

#[test]
fn upload_seeds_one_full_length_clip() {
    let (store, _pool, url) = editing_session();
    assert_eq!(store.video_clips().len(), 1);
    let clip = &store.video_clips()[0];
    assert_eq!(clip.start_time, 0.0);
    assert_eq!(clip.duration, 30.0);
    assert_eq!(clip.source.as_deref(), Some(url.as_str()));
}

#[test]
fn full_edit_session_keeps_invariants() {
    let (mut store, _pool, _url) = editing_session();

    let outro = generate_id("clip");
    store
        .add_video_clip(VideoClip::new(&outro, "Outro", 8.0))
        .unwrap();
    store
        .reorder_video_clips(&[outro.as_str(), "clip-1"])
        .unwrap();

    let audio = generate_id("audio");
    store
        .add_audio_clip(AudioClip::new(&audio, "Music", 38.0, 0.0))
        .unwrap();
    store
        .update_audio_clip(
            &audio,
            AudioClipPatch {
                volume: Some(0.4),
                ..Default::default()
            },
        )
        .unwrap();

    store
        .add_subtitle(SubtitleItem::new(generate_id("sub"), "Hi", 1.0, 4.0))
        .unwrap();
    store
        .add_text_overlay(TextOverlay::new(generate_id("text"), "Summer"))
        .unwrap();

    // Contiguity after the reorder
    assert_eq!(store.video_clips()[0].id, outro);
    assert_eq!(store.video_clips()[0].start_time, 0.0);
    assert_eq!(store.video_clips()[1].start_time, 8.0);
    assert_eq!(store.total_duration(), 38.0);
    assert_eq!(store.audio_clips()[0].volume, 0.4);
}

#[test]
fn selection_scoped_to_one_element() {
    let (mut store, _pool, _url) = editing_session();
    store
        .add_text_overlay(TextOverlay::new("text-1", "Title"))
        .unwrap();

    store.select("clip-1", ElementKind::Video);
    store.select("text-1", ElementKind::Text);

    let sel = store.selection().unwrap();
    assert_eq!((sel.id.as_str(), sel.kind), ("text-1", ElementKind::Text));
}

#[test]
fn session_roundtrip_preserves_everything() {
    let (mut store, _pool, _url) = editing_session();
    store
        .add_subtitle(SubtitleItem::new("sub-1", "Hello", 2.0, 5.0))
        .unwrap();
    store.set_current_time(12.0);

    let dir = std::env::temp_dir();
    let path = dir.join(format!("{}.json", generate_id("quickcut-test")));
    SessionFile::new(store.snapshot()).save_to_file(&path).unwrap();

    let restored = SessionFile::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(restored.session.duration(), store.duration());
    assert_eq!(restored.session.current_time(), 12.0);
    assert_eq!(restored.session.subtitles(), store.subtitles());
    assert_eq!(restored.session.video_clips(), store.video_clips());
}

#[test]
fn teardown_releases_every_url_once() {
    let (mut store, mut pool, url) = editing_session();
    let image = pool.accept("logo.png", "image/png").unwrap();
    store.set_video(url.clone(), None);

    pool.revoke(&url).unwrap();
    pool.revoke(&image.url).unwrap();
    assert_eq!(pool.live_count(), 0);
    assert!(pool.revoke(&url).is_err());
}

#[test]
fn reset_clears_the_whole_session() {
    let (mut store, _pool, _url) = editing_session();
    store
        .add_text_overlay(TextOverlay::new("text-1", "Title"))
        .unwrap();
    store.toggle_playback();
    store.reset();

    assert!(store.video_clips().is_empty());
    assert!(store.text_overlays().is_empty());
    assert!(!store.is_playing());
    assert_eq!(store.duration(), 0.0);

    // A fresh upload seeds again from scratch.
    store.set_video("quickcut://video-2", None);
    store.set_duration(12.0);
    assert_eq!(store.video_clips().len(), 1);
    assert_eq!(store.video_clips()[0].duration, 12.0);
}
