//! Background poller lifecycle

use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::debug;

use expiry_watch_core::{Clock, ExpiredBatch, Result, WatchError, WatchMetrics};

use super::{Shared, Watcher};

impl<C: Clock, M: WatchMetrics> Watcher<C, M> {
    /// Start the background poller on the current tokio runtime
    ///
    /// A watcher can only be started once; restarting after [`stop`](Self::stop)
    /// fails with [`WatchError::AlreadyStartedOnce`].
    pub fn start(&self, polling_interval: Duration) -> Result<()> {
        let mut lifecycle = self.shared.lifecycle.lock();
        if lifecycle.watching {
            return Err(WatchError::AlreadyStarted);
        }
        if lifecycle.started_once {
            return Err(WatchError::AlreadyStartedOnce);
        }
        if polling_interval.is_zero() {
            return Err(WatchError::InvalidPollingInterval);
        }
        let handle = Handle::try_current().map_err(|_| WatchError::NoRuntime)?;
        let outbox = self
            .shared
            .outbox
            .lock()
            .take()
            .ok_or(WatchError::AlreadyStartedOnce)?;

        lifecycle.watching = true;
        lifecycle.started_once = true;
        drop(lifecycle);

        handle.spawn(poll_loop(
            Arc::downgrade(&self.shared),
            outbox,
            polling_interval,
        ));
        debug!(
            target: "expiry_watch",
            interval_ms = polling_interval.as_millis() as u64,
            "Expiration poller started"
        );
        Ok(())
    }

    /// Stop the poller
    ///
    /// The output queue closes on the poller's next tick. Calling this more
    /// than once is harmless.
    pub fn stop(&self) {
        self.shared.lifecycle.lock().watching = false;
    }
}

/// Prune on every tick until stopped, then close the queue
///
/// Holds only a weak reference so dropping every watcher handle also ends
/// the loop.
async fn poll_loop<C: Clock, M: WatchMetrics>(
    shared: Weak<Shared<C, M>>,
    outbox: mpsc::Sender<ExpiredBatch>,
    polling_interval: Duration,
) {
    let mut ticker = time::interval_at(Instant::now() + polling_interval, polling_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        let watching = match shared.upgrade() {
            Some(shared) => shared.is_watching(),
            None => {
                debug!(target: "expiry_watch", "Watcher dropped, poller exiting");
                break;
            }
        };
        if !watching {
            debug!(target: "expiry_watch", "Expiration poller stopped, closing output queue");
            break;
        }

        // Wait for room first so due items stay indexed while the consumer lags.
        // Nothing strong is held across this await; an unclaimed receiver
        // lives in `Shared` and must drop with the last watcher handle.
        let Ok(permit) = outbox.reserve().await else {
            debug!(target: "expiry_watch", "Output queue receiver dropped, poller exiting");
            break;
        };
        let Some(shared) = shared.upgrade() else {
            debug!(target: "expiry_watch", "Watcher dropped, poller exiting");
            break;
        };
        permit.send(shared.prune());
    }
}
