use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Counters for one walkthrough session
#[derive(Debug, Default)]
pub struct WalkthroughMetrics {
    pub advances: AtomicU64,
    pub restarts: AtomicU64,
    pub inputs: AtomicU64,
    pub groups_scheduled: AtomicU64,
    pub groups_cancelled: AtomicU64,
    pub stale_signals_dropped: AtomicU64,
}

impl WalkthroughMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_advance(&self) {
        self.advances.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_restart(&self) {
        self.restarts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_input(&self) {
        self.inputs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_group_scheduled(&self) {
        self.groups_scheduled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_group_cancelled(&self) {
        self.groups_cancelled.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_stale_signal(&self) {
        self.stale_signals_dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_stats(&self) -> WalkthroughStats {
        WalkthroughStats {
            advances: self.advances.load(Ordering::Relaxed),
            restarts: self.restarts.load(Ordering::Relaxed),
            inputs: self.inputs.load(Ordering::Relaxed),
            groups_scheduled: self.groups_scheduled.load(Ordering::Relaxed),
            groups_cancelled: self.groups_cancelled.load(Ordering::Relaxed),
            stale_signals_dropped: self.stale_signals_dropped.load(Ordering::Relaxed),
        }
    }

    pub fn log_stats(&self) {
        let stats = self.get_stats();
        info!(
            advances = stats.advances,
            restarts = stats.restarts,
            inputs = stats.inputs,
            groups_scheduled = stats.groups_scheduled,
            groups_cancelled = stats.groups_cancelled,
            stale_signals_dropped = stats.stale_signals_dropped,
            "Walkthrough session metrics"
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WalkthroughStats {
    pub advances: u64,
    pub restarts: u64,
    pub inputs: u64,
    pub groups_scheduled: u64,
    pub groups_cancelled: u64,
    pub stale_signals_dropped: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_accumulate() {
        let metrics = WalkthroughMetrics::new();
        metrics.record_advance();
        metrics.record_advance();
        metrics.record_restart();
        metrics.record_stale_signal();

        let stats = metrics.get_stats();
        assert_eq!(stats.advances, 2);
        assert_eq!(stats.restarts, 1);
        assert_eq!(stats.stale_signals_dropped, 1);
        assert_eq!(stats.groups_scheduled, 0);
    }
}
