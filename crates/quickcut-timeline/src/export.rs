//! Export progress state machine.
//!
//! Two states: idle and exporting. `start` resets progress and enters
//! exporting; `finish` is the only way out and pins progress at 100.
//! Progress is monotonically non-decreasing while exporting and cannot be
//! observed changing after finish.

use quickcut_core::{EditorError, Result};
use serde::{Deserialize, Serialize};

/// Export bookkeeping: whether an export is running and how far along it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExportState {
    exporting: bool,
    /// Percent complete, 0..=100
    progress: f64,
}

impl ExportState {
    /// Whether an export is in progress.
    #[inline]
    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Percent complete, 0..=100.
    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Begin exporting. Progress resets to 0.
    pub fn start(&mut self) -> Result<()> {
        if self.exporting {
            return Err(EditorError::ExportInProgress);
        }
        self.exporting = true;
        self.progress = 0.0;
        Ok(())
    }

    /// Report progress. Values below the current progress or above 100 are
    /// clamped so the reading never moves backwards.
    pub fn set_progress(&mut self, percent: f64) -> Result<()> {
        if !self.exporting {
            return Err(EditorError::NotExporting);
        }
        self.progress = percent.clamp(self.progress, 100.0);
        Ok(())
    }

    /// Finish exporting. Progress pins at exactly 100.
    pub fn finish(&mut self) -> Result<()> {
        if !self.exporting {
            return Err(EditorError::NotExporting);
        }
        self.exporting = false;
        self.progress = 100.0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle() {
        let mut state = ExportState::default();
        assert!(!state.is_exporting());

        state.start().unwrap();
        assert!(state.is_exporting());
        assert_eq!(state.progress(), 0.0);

        state.set_progress(47.0).unwrap();
        assert_eq!(state.progress(), 47.0);

        state.finish().unwrap();
        assert!(!state.is_exporting());
        assert_eq!(state.progress(), 100.0);
    }

    #[test]
    fn test_no_progress_after_finish() {
        let mut state = ExportState::default();
        state.start().unwrap();
        state.finish().unwrap();
        assert!(state.set_progress(50.0).is_err());
        assert_eq!(state.progress(), 100.0);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let mut state = ExportState::default();
        state.start().unwrap();
        state.set_progress(60.0).unwrap();
        state.set_progress(30.0).unwrap();
        assert_eq!(state.progress(), 60.0);
        state.set_progress(250.0).unwrap();
        assert_eq!(state.progress(), 100.0);
    }

    #[test]
    fn test_double_start_rejected() {
        let mut state = ExportState::default();
        state.start().unwrap();
        assert!(state.start().is_err());
    }

    #[test]
    fn test_restart_resets_progress() {
        let mut state = ExportState::default();
        state.start().unwrap();
        state.finish().unwrap();
        state.start().unwrap();
        assert_eq!(state.progress(), 0.0);
    }
}
