//! Unique identifier generation.
//!
//! Ids are human-readable strings of the form `{prefix}-{millis}-{suffix}`:
//! a monotonically non-decreasing unix-millisecond timestamp combined with a
//! random suffix. Collisions require two calls in the same millisecond to
//! also draw the same suffix.

use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// High-water mark for the timestamp component. The clock may step
/// backwards (NTP adjustment); generated ids must not.
static LAST_MILLIS: AtomicU64 = AtomicU64::new(0);

fn monotonic_millis() -> u64 {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let prev = LAST_MILLIS.fetch_max(now, Ordering::Relaxed);
    now.max(prev)
}

/// Generate a process-unique id with the given prefix.
pub fn generate_id(prefix: &str) -> String {
    let millis = monotonic_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1000);
    format!("{prefix}-{millis}-{suffix:03}")
}
