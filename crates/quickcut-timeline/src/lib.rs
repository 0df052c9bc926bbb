//! QuickCut Timeline - Timeline data model
//!
//! Implements the editable state of a video project:
//! - Video and audio clips
//! - Subtitles and text/image overlays
//! - The editor store with invariant-preserving mutations
//! - Versioned session serialization
//!
//! Video clips are contiguous and non-overlapping: the store recomputes
//! every clip's start time after each structural mutation, so the invariant
//! holds by construction rather than by caller convention.

pub mod clip;
pub mod export;
pub mod overlay;
pub mod selection;
pub mod serialization;
pub mod store;

pub use clip::{AudioClip, AudioClipPatch, VideoClip, VideoClipPatch};
pub use export::ExportState;
pub use overlay::{
    ImageOverlay, ImageOverlayPatch, ImageStyle, SubtitleItem, SubtitlePatch, SubtitleStyle,
    TextOverlay, TextOverlayPatch, TextStyle,
};
pub use selection::{ElementKind, Selection};
pub use serialization::{SessionFile, CURRENT_VERSION};
pub use store::EditorStore;
