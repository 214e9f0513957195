use crate::WatchMetrics;
use std::time::Duration;
use tracing::{debug, trace};

/// Reports watcher events as `tracing` events under the `expiry_watch` target
///
/// Per-call events go out at `trace`, non-empty prunes at `debug`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingMetrics;

impl WatchMetrics for TracingMetrics {
    fn record_add(&self) {
        trace!(
            target: "expiry_watch",
            event = "add",
            "Item Added"
        );
    }

    fn record_remove(&self, found: bool) {
        trace!(
            target: "expiry_watch",
            event = "remove",
            found = found,
            "Item Removed"
        );
    }

    fn record_expired(&self, count: usize) {
        if count == 0 {
            return;
        }
        debug!(
            target: "expiry_watch",
            event = "expired",
            count = count,
            "Items Expired"
        );
    }

    fn record_prune_latency(&self, duration: Duration) {
        trace!(
            target: "expiry_watch",
            event = "latency",
            duration_us = duration.as_micros() as u64,
            "Prune Latency"
        );
    }

    fn record_index_size(&self, keys: usize, ids: usize) {
        trace!(
            target: "expiry_watch",
            event = "size",
            keys = keys,
            ids = ids,
            "Index Size Update"
        );
    }
}
