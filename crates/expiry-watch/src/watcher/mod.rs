//! Expiration watcher

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use expiry_watch_core::{
    Clock, ExpirationBuffer, ExpiredBatch, ExpiredItem, NoopMetrics, SystemClock, WatchMetrics,
};

use crate::index::{RemoveOutcome, TimeIndex};

mod config;
mod poller;
mod receiver;

pub use config::{DEFAULT_CHANNEL_CAPACITY, WatcherConfig};
pub use receiver::{ExpiredReceiver, ReceiveError};

/// Poller lifecycle flags
#[derive(Debug, Default)]
struct Lifecycle {
    watching: bool,
    started_once: bool,
}

/// State shared between watcher handles and the poller task
struct Shared<C, M> {
    /// Expiration index
    index: RwLock<TimeIndex>,
    /// Guarded separately so start/stop never wait on index mutation
    lifecycle: Mutex<Lifecycle>,
    /// Send side, moved into the poller on start
    outbox: Mutex<Option<mpsc::Sender<ExpiredBatch>>>,
    /// Receive side, handed out once by `receive`
    inbox: Mutex<Option<mpsc::Receiver<ExpiredBatch>>>,
    buffer: ExpirationBuffer,
    clock: C,
    metrics: M,
}

impl<C: Clock, M: WatchMetrics> Shared<C, M> {
    fn is_watching(&self) -> bool {
        self.lifecycle.lock().watching
    }

    /// Remove and return every item due at the current time
    fn prune(&self) -> ExpiredBatch {
        let started = Instant::now();
        let mut pruned = Vec::new();

        loop {
            let threshold = self.buffer.threshold_unix(self.clock.now());

            // Minimum lookup and delete form one critical section
            let mut index = self.index.write();
            let key = match index.minimum() {
                Some((key, _)) if key <= threshold => key,
                _ => break,
            };
            if let Some(ids) = index.delete_key(key) {
                pruned.extend(ids.into_iter().map(|id| ExpiredItem {
                    expiration_time_seconds: key,
                    id,
                }));
            }
        }

        let (keys, ids) = {
            let index = self.index.read();
            (index.len(), index.id_count())
        };
        self.metrics.record_prune_latency(started.elapsed());
        self.metrics.record_expired(pruned.len());
        self.metrics.record_index_size(keys, ids);

        if !pruned.is_empty() {
            debug!(
                target: "expiry_watch",
                expired = pruned.len(),
                remaining = ids,
                "Pruned expired items"
            );
        }
        pruned
    }
}

/// Tracks ids against expiration timestamps and emits them once expired
///
/// Generic over:
/// - `C`: The wall-clock source
/// - `M`: The metrics collector
///
/// Cloning creates a new handle to the SAME watcher.
pub struct Watcher<C = SystemClock, M = NoopMetrics>
where
    C: Clock,
    M: WatchMetrics,
{
    shared: Arc<Shared<C, M>>,
}

impl<C: Clock, M: WatchMetrics> Clone for Watcher<C, M> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

// Constructors for the system clock and no metrics
impl Watcher<SystemClock, NoopMetrics> {
    /// Create a watcher with the given expiration buffer
    pub fn new(expiration_buffer: ExpirationBuffer) -> Self {
        Self::with_config(WatcherConfig::with_buffer(expiration_buffer))
    }

    /// Create with custom config
    pub fn with_config(config: WatcherConfig) -> Self {
        Self::with_clock_and_metrics(config, SystemClock, NoopMetrics)
    }
}

impl<C: Clock, M: WatchMetrics> Watcher<C, M> {
    /// Create a watcher with a custom clock and metrics
    pub fn with_clock_and_metrics(config: WatcherConfig, clock: C, metrics: M) -> Self {
        let (tx, rx) = mpsc::channel(config.effective_capacity());

        Self {
            shared: Arc::new(Shared {
                index: RwLock::new(TimeIndex::new()),
                lifecycle: Mutex::new(Lifecycle::default()),
                outbox: Mutex::new(Some(tx)),
                inbox: Mutex::new(Some(rx)),
                buffer: config.expiration_buffer,
                clock,
                metrics,
            }),
        }
    }

    /// Register `id` as expiring at `expiration_time_seconds`
    pub fn add(&self, expiration_time_seconds: i64, id: impl Into<String>) {
        self.shared
            .index
            .write()
            .insert_id(expiration_time_seconds, id.into());
        self.shared.metrics.record_add();
    }

    /// Cancel the registration of `id` at `expiration_time_seconds`
    ///
    /// Removing something that is not tracked is a no-op: the poller may
    /// already have pruned it.
    pub fn remove(&self, expiration_time_seconds: i64, id: &str) {
        let outcome = self
            .shared
            .index
            .write()
            .remove_id(expiration_time_seconds, id);

        if outcome != RemoveOutcome::Removed {
            trace!(
                target: "expiry_watch",
                id = %id,
                expiration_time_seconds,
                reason = ?outcome,
                "Attempted to remove item from watcher that no longer exists"
            );
        }
        self.shared
            .metrics
            .record_remove(outcome == RemoveOutcome::Removed);
    }

    /// Remove and return every item that has expired
    ///
    /// Items come back ascending by timestamp; ids sharing a timestamp are
    /// in no particular order. The poller calls this on every tick.
    pub fn prune(&self) -> ExpiredBatch {
        self.shared.prune()
    }

    /// Take the receiving end of the output queue
    ///
    /// Returns `Some` on the first call only.
    pub fn receive(&self) -> Option<ExpiredReceiver> {
        self.shared.inbox.lock().take().map(ExpiredReceiver::new)
    }

    /// Configured expiration buffer
    pub fn expiration_buffer(&self) -> ExpirationBuffer {
        self.shared.buffer
    }

    /// Whether the poller is currently running
    pub fn is_watching(&self) -> bool {
        self.shared.is_watching()
    }

    /// Whether `start` has ever succeeded on this watcher
    pub fn was_started_once(&self) -> bool {
        self.shared.lifecycle.lock().started_once
    }

    /// Number of distinct expiration timestamps tracked
    pub fn len(&self) -> usize {
        self.shared.index.read().len()
    }

    /// Number of ids tracked
    pub fn id_count(&self) -> usize {
        self.shared.index.read().id_count()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.index.read().is_empty()
    }

    /// Check if `id` is tracked at `expiration_time_seconds`
    pub fn contains(&self, expiration_time_seconds: i64, id: &str) -> bool {
        self.shared
            .index
            .read()
            .contains(expiration_time_seconds, id)
    }
}
