//! Metrics trait for watcher observability

use std::time::Duration;

/// Trait for watcher metrics/observability
///
/// Implement this to integrate with your metrics system (Prometheus, StatsD, etc.)
pub trait WatchMetrics: Send + Sync + 'static {
    /// Record an item registration
    fn record_add(&self);

    /// Record a removal request; `found` is false for benign misses
    fn record_remove(&self, found: bool);

    /// Record items emitted by one prune pass
    fn record_expired(&self, count: usize);

    /// Record how long a prune pass took
    fn record_prune_latency(&self, duration: Duration);

    /// Record index size (distinct timestamps, tracked ids)
    fn record_index_size(&self, keys: usize, ids: usize);
}

/// No-op metrics implementation (default)
///
/// Zero overhead when metrics are not needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopMetrics;

impl WatchMetrics for NoopMetrics {
    #[inline]
    fn record_add(&self) {}

    #[inline]
    fn record_remove(&self, _found: bool) {}

    #[inline]
    fn record_expired(&self, _count: usize) {}

    #[inline]
    fn record_prune_latency(&self, _duration: Duration) {}

    #[inline]
    fn record_index_size(&self, _keys: usize, _ids: usize) {}
}

/// Metrics adapter using the `metrics` crate
///
/// # Example
/// ```ignore
/// use expiry_watch_core::MetricsCrateAdapter;
///
/// let metrics = MetricsCrateAdapter::new("order_expiry");
/// // Emits: order_expiry_added_total, order_expiry_expired_total, etc.
/// ```
#[cfg(feature = "metrics")]
#[derive(Debug, Clone)]
pub struct MetricsCrateAdapter {
    prefix: String,
}

#[cfg(feature = "metrics")]
impl MetricsCrateAdapter {
    /// Create a new adapter with the given metric name prefix
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn metric_name(&self, name: &str) -> String {
        format!("{}_{}", self.prefix, name)
    }
}

#[cfg(feature = "metrics")]
impl WatchMetrics for MetricsCrateAdapter {
    fn record_add(&self) {
        metrics::counter!(self.metric_name("added_total")).increment(1);
    }

    fn record_remove(&self, found: bool) {
        let outcome = if found { "removed" } else { "miss" };
        metrics::counter!(self.metric_name("removed_total"), "outcome" => outcome).increment(1);
    }

    fn record_expired(&self, count: usize) {
        metrics::counter!(self.metric_name("expired_total")).increment(count as u64);
    }

    fn record_prune_latency(&self, duration: Duration) {
        metrics::histogram!(self.metric_name("prune_duration_seconds"))
            .record(duration.as_secs_f64());
    }

    fn record_index_size(&self, keys: usize, ids: usize) {
        metrics::gauge!(self.metric_name("timestamps")).set(keys as f64);
        metrics::gauge!(self.metric_name("ids")).set(ids as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_metrics() {
        let metrics = NoopMetrics;
        // Just verify these don't panic
        metrics.record_add();
        metrics.record_remove(false);
        metrics.record_expired(3);
        metrics.record_prune_latency(Duration::from_millis(1));
        metrics.record_index_size(1, 2);
    }
}
