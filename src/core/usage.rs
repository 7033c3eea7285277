use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Process-wide session accounting: id cursors hand out diagnostic numbers,
/// the active counts back the utilization readout. Counters are independent,
/// no cross-counter invariant is enforced.
pub struct UsageTracker {
    encoder_ids: AtomicU64,
    decoder_ids: AtomicU64,
    encoders: AtomicU64,
    decoders: AtomicU64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct UsageSnapshot {
    pub encoders: u64,
    pub decoders: u64,
    pub encoders_created: u64,
    pub decoders_created: u64,
}

impl UsageTracker {
    pub const fn new() -> Self {
        Self {
            encoder_ids: AtomicU64::new(0),
            decoder_ids: AtomicU64::new(0),
            encoders: AtomicU64::new(0),
            decoders: AtomicU64::new(0),
        }
    }

    /// Returns the new session's id. Ids start at 1 and are never reused.
    pub fn register_encoder(&self) -> u64 {
        self.encoders.fetch_add(1, Ordering::Relaxed);
        self.encoder_ids.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn register_decoder(&self) -> u64 {
        self.decoders.fetch_add(1, Ordering::Relaxed);
        self.decoder_ids.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn release_encoder(&self) {
        self.encoders.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn release_decoder(&self) {
        self.decoders.fetch_sub(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> UsageSnapshot {
        UsageSnapshot {
            encoders: self.encoders.load(Ordering::Relaxed),
            decoders: self.decoders.load(Ordering::Relaxed),
            encoders_created: self.encoder_ids.load(Ordering::Relaxed),
            decoders_created: self.decoder_ids.load(Ordering::Relaxed),
        }
    }
}

impl Default for UsageTracker {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_USAGE: UsageTracker = UsageTracker::new();

/// The process-wide tracker. Sessions take the tracker as an explicit
/// constructor argument; this is the instance the registry hands them.
pub fn global() -> &'static UsageTracker {
    &GLOBAL_USAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic_per_mode() {
        let tracker = UsageTracker::new();
        assert_eq!(tracker.register_encoder(), 1);
        assert_eq!(tracker.register_encoder(), 2);
        assert_eq!(tracker.register_decoder(), 1);

        tracker.release_encoder();
        // Releasing never frees an id for reuse.
        assert_eq!(tracker.register_encoder(), 3);
    }

    #[test]
    fn snapshot_reflects_live_counts() {
        let tracker = UsageTracker::new();
        tracker.register_encoder();
        tracker.register_decoder();
        tracker.register_decoder();
        tracker.release_decoder();

        let snapshot = tracker.snapshot();
        assert_eq!(snapshot.encoders, 1);
        assert_eq!(snapshot.decoders, 1);
        assert_eq!(snapshot.encoders_created, 1);
        assert_eq!(snapshot.decoders_created, 2);
    }
}
