//! Upload intake: MIME-class checks and object-URL lifetimes.
//!
//! Uploaded media is referenced through pool-issued object URLs. Each URL
//! must be released exactly once, when its owner is replaced or removed;
//! the pool tracks live URLs so teardown can assert nothing leaked.

use quickcut_core::{generate_id, EditorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Class of accepted media.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Video,
    Image,
    Audio,
}

impl MediaKind {
    /// Classify a MIME type. Anything outside the accepted classes is an
    /// `UnsupportedMedia` error and the upload is not committed.
    pub fn from_mime(mime: &str) -> Result<Self> {
        let class = mime.split('/').next().unwrap_or("");
        match class {
            "video" => Ok(Self::Video),
            "image" => Ok(Self::Image),
            "audio" => Ok(Self::Audio),
            _ => Err(EditorError::UnsupportedMedia(mime.to_string())),
        }
    }
}

/// An accepted upload: display name, media class, and its object URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub name: String,
    pub kind: MediaKind,
    pub url: String,
}

/// Issues and releases object URLs for uploaded media.
///
/// Mirrors the create/revoke discipline of browser object URLs: a URL is
/// valid from `accept` until the single matching `revoke`.
#[derive(Debug, Default)]
pub struct UrlPool {
    live: HashSet<String>,
}

impl UrlPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept an upload, classifying its MIME type and issuing a URL.
    pub fn accept(&mut self, name: &str, mime: &str) -> Result<MediaUpload> {
        let kind = MediaKind::from_mime(mime)?;
        let url = format!("quickcut://{}", generate_id("media"));
        self.live.insert(url.clone());
        debug!(name, mime, %url, "accepted upload");
        Ok(MediaUpload {
            name: name.to_string(),
            kind,
            url,
        })
    }

    /// Release a URL. Releasing twice, or releasing a URL this pool never
    /// issued, is an error.
    pub fn revoke(&mut self, url: &str) -> Result<()> {
        if self.live.remove(url) {
            debug!(%url, "revoked object URL");
            Ok(())
        } else {
            Err(EditorError::UrlReleased(url.to_string()))
        }
    }

    /// Whether a URL is currently live.
    pub fn is_live(&self, url: &str) -> bool {
        self.live.contains(url)
    }

    /// Number of URLs not yet released. Non-zero at teardown is a leak.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
