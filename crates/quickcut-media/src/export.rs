//! Simulated export pipeline.
//!
//! There is no real encoder yet; exporting advances a progress bar by a
//! random step per tick. The simulator is the owner of that recurring
//! callback and is the part that must be torn down correctly: once it
//! finishes or is cancelled it is disarmed, and a disarmed simulator never
//! mutates the store again, no matter how many stray ticks arrive.

use quickcut_core::Result;
use quickcut_timeline::EditorStore;
use rand::Rng;
use tracing::{debug, info};

/// Maximum percent added per tick.
const MAX_STEP_PERCENT: f64 = 5.0;

/// Outcome of a single simulator tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportTick {
    /// Export advanced to this percent.
    Progress(f64),
    /// This tick reached 100 and finished the export.
    Finished,
    /// The simulator is disarmed; nothing happened.
    Idle,
}

/// Tick-driven export simulation.
///
/// The host event loop calls [`tick`](Self::tick) on a timer; the simulator
/// drives the store's export state machine and disarms itself at the
/// terminal state.
#[derive(Debug, Default)]
pub struct ExportSimulator {
    armed: bool,
}

impl ExportSimulator {
    /// Create an idle simulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether ticks currently advance an export.
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Begin an export: resets store progress to 0 and arms the ticker.
    pub fn begin(&mut self, store: &mut EditorStore) -> Result<()> {
        store.start_export()?;
        self.armed = true;
        info!("export started");
        Ok(())
    }

    /// Advance the export by one tick.
    ///
    /// On the tick that reaches 100 the store's export is finished and the
    /// simulator disarms itself, so a late timer firing after completion
    /// cannot be observed through the store.
    pub fn tick<R: Rng>(&mut self, store: &mut EditorStore, rng: &mut R) -> Result<ExportTick> {
        if !self.armed {
            return Ok(ExportTick::Idle);
        }
        let step = rng.gen::<f64>() * MAX_STEP_PERCENT;
        let next = store.export().progress() + step;
        if next >= 100.0 {
            store.finish_export()?;
            self.armed = false;
            info!("export finished");
            return Ok(ExportTick::Finished);
        }
        store.set_export_progress(next)?;
        debug!(percent = next, "export progress");
        Ok(ExportTick::Progress(next))
    }

    /// Disarm without touching the store. Called when the owning view is
    /// torn down; the store keeps whatever export state it had.
    pub fn cancel(&mut self) {
        if self.armed {
            self.armed = false;
            info!("export ticker cancelled");
        }
    }
}
