//! Session serialization with versioning and migration.
//!
//! Sessions persist as JSON with a schema version field so newer builds can
//! migrate older files forward and refuse files from the future.

use quickcut_core::{EditorError, Result};
use serde::{Deserialize, Serialize};

use crate::store::EditorStore;

/// Current schema version.
pub const CURRENT_VERSION: u32 = 1;

/// Versioned session file wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionFile {
    /// Schema version for migration.
    pub version: u32,
    /// The full editor state.
    pub session: EditorStore,
    /// Application version that wrote this file.
    pub app_version: String,
}

impl SessionFile {
    /// Wrap a store snapshot for persistence.
    pub fn new(session: EditorStore) -> Self {
        Self {
            version: CURRENT_VERSION,
            session,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Serialize to JSON bytes.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| EditorError::Serialization(format!("failed to serialize session: {e}")))
    }

    /// Deserialize from JSON bytes, applying migrations if needed.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let raw: serde_json::Value = serde_json::from_slice(data)
            .map_err(|e| EditorError::Serialization(format!("invalid JSON: {e}")))?;

        let version = raw.get("version").and_then(|v| v.as_u64()).unwrap_or(0) as u32;
        if version > CURRENT_VERSION {
            return Err(EditorError::Serialization(format!(
                "session file version {version} is newer than supported version {CURRENT_VERSION}"
            )));
        }

        let migrated = migrate(raw, version)?;
        serde_json::from_value(migrated)
            .map_err(|e| EditorError::Serialization(format!("failed to parse session: {e}")))
    }

    /// Save to a file path.
    pub fn save_to_file(&self, path: &std::path::Path) -> Result<()> {
        let data = self.to_json()?;
        std::fs::write(path, data)?;
        Ok(())
    }

    /// Load from a file path.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_json(&data)
    }
}

/// Apply sequential migrations from `from_version` to CURRENT_VERSION.
fn migrate(mut data: serde_json::Value, from_version: u32) -> Result<serde_json::Value> {
    let mut version = from_version;

    while version < CURRENT_VERSION {
        match version {
            0 => {
                // v0 → v1: bare store snapshot without the version wrapper
                if data.get("version").is_none() {
                    data = serde_json::json!({
                        "version": 1,
                        "session": data,
                        "app_version": "0.1.0",
                    });
                }
                version = 1;
            }
            _ => {
                return Err(EditorError::Serialization(format!(
                    "no migration path from version {version}"
                )));
            }
        }
    }

    Ok(data)
}
