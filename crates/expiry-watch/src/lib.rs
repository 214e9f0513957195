//! expiry-watch: Track ids against expiration timestamps and get told when they expire
//!
//! # Features
//!
//! - **Ordered time index** with logarithmic minimum/insert/delete
//! - **Signed expiration buffer** to expire items early or late
//! - **Background poller** delivering batches over a bounded queue
//! - **Pluggable clock and metrics**
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use expiry_watch::prelude::*;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let watcher = Watcher::new(ExpirationBuffer::None);
//!     let mut expired = watcher.receive().expect("receiver already taken");
//!
//!     watcher.add(1_700_000_000, "order-1");
//!     watcher.start(Duration::from_millis(100))?;
//!
//!     while let Some(batch) = expired.recv().await {
//!         for item in batch {
//!             println!("{} expired at {}", item.id, item.expiration_time_seconds);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

mod index;
mod watcher;

// Re-export core
pub use expiry_watch_core::*;

pub use index::{RemoveOutcome, TimeIndex};
pub use watcher::{
    DEFAULT_CHANNEL_CAPACITY, ExpiredReceiver, ReceiveError, Watcher, WatcherConfig,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Clock, ExpirationBuffer, ExpiredBatch, ExpiredItem, ExpiredReceiver, ManualClock,
        Result, SystemClock, WatchError, WatchMetrics, Watcher, WatcherConfig,
    };
}
